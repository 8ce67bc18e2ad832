//! Staggered, once-only entrance animations.
//!
//! A section is split into sub-elements (words, characters or records) and
//! each one gets a start delay `base_delay + index * increment`, in seconds,
//! relative to the moment the section first enters the viewport. The delays
//! end up as CSS `transition-delay` values, so the browser owns the actual
//! animation handles.

use crate::viewport::Watch;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTiming {
    pub base_delay: f64,
    pub increment: f64,
}

impl RevealTiming {
    pub const fn new(base_delay: f64, increment: f64) -> Self {
        Self {
            base_delay,
            increment,
        }
    }

    pub fn delay(&self, index: usize) -> f64 {
        self.base_delay + index as f64 * self.increment
    }
}

pub mod timings {
    use super::RevealTiming;

    use super::RevealTrigger;

    pub const HERO_TRIGGER: RevealTrigger = RevealTrigger::OnLoad;
    pub const SECTION_TRIGGER: RevealTrigger = RevealTrigger::InView;

    pub const HERO_PHRASE: RevealTiming = RevealTiming::new(1.6, 0.18);
    pub const VISION_HEADING_FIRST: RevealTiming = RevealTiming::new(0.3, 0.03);
    pub const VISION_HEADING_SECOND: RevealTiming = RevealTiming::new(0.7, 0.03);
    pub const VISION_BODY_FIRST: RevealTiming = RevealTiming::new(0.8, 0.1);
    pub const VISION_BODY_SECOND: RevealTiming = RevealTiming::new(1.5, 0.1);
    pub const TESTIMONIALS_HEADING: RevealTiming = RevealTiming::new(0.1, 0.04);
    pub const TESTIMONIAL_CARDS: RevealTiming = RevealTiming::new(0.0, 0.15);
    pub const PROJECTS_HEADING: RevealTiming = RevealTiming::new(0.1, 0.05);
    pub const CONTACT_HEADING: RevealTiming = RevealTiming::new(0.0, 0.05);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Split {
    Words,
    Chars,
}

impl Split {
    pub fn apply(self, text: &str) -> Vec<String> {
        match self {
            Split::Words => text.split_whitespace().map(str::to_owned).collect(),
            // Spaces would collapse inside inline-block spans
            Split::Chars => text
                .chars()
                .map(|c| if c == ' ' { '\u{00A0}' } else { c })
                .map(String::from)
                .collect(),
        }
    }
}

/// When a section's reveal fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealTrigger {
    /// As soon as the section mounts, wherever the page is scrolled.
    OnLoad,
    /// The first time the section intersects the viewport.
    InView,
}

impl RevealTrigger {
    pub fn fires_on_mount(self) -> bool {
        self == RevealTrigger::OnLoad
    }
}

/// Latches on the first intersecting reading and ignores everything after.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    pub has_been_triggered: bool,
}

impl RevealState {
    /// Returns true only for the reading that fires the reveal.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if self.has_been_triggered || !is_intersecting {
            return false;
        }
        self.has_been_triggered = true;
        true
    }

    /// Feeds one viewport reading. Returns whether this reading fires the
    /// reveal and whether the viewport is still worth watching.
    pub fn step(&mut self, is_intersecting: bool) -> (bool, Watch) {
        let fired = self.observe(is_intersecting);
        let next = if self.has_been_triggered {
            Watch::Stop
        } else {
            Watch::Continue
        };
        (fired, next)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScheduledReveal<T> {
    pub item: T,
    pub delay: f64,
}

pub fn schedule<T>(
    items: impl IntoIterator<Item = T>,
    timing: RevealTiming,
) -> Vec<ScheduledReveal<T>> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| ScheduledReveal {
            item,
            delay: timing.delay(index),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::timings::*;
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{} != {}", a, e);
        }
    }

    #[test]
    fn hero_phrase_delays() {
        let words = Split::Words.apply("We make your vision reality");
        assert_eq!(words.len(), 5);
        let delays: Vec<f64> = schedule(words, HERO_PHRASE).iter().map(|s| s.delay).collect();
        assert_close(&delays, &[1.6, 1.78, 1.96, 2.14, 2.32]);
    }

    #[rstest]
    #[case(HERO_PHRASE)]
    #[case(VISION_HEADING_FIRST)]
    #[case(VISION_HEADING_SECOND)]
    #[case(VISION_BODY_FIRST)]
    #[case(VISION_BODY_SECOND)]
    #[case(TESTIMONIALS_HEADING)]
    #[case(TESTIMONIAL_CARDS)]
    #[case(PROJECTS_HEADING)]
    #[case(CONTACT_HEADING)]
    fn section_delays_follow_formula_and_increase(#[case] timing: RevealTiming) {
        let delays: Vec<f64> = (0..12).map(|index| timing.delay(index)).collect();
        for (index, delay) in delays.iter().enumerate() {
            let expected = timing.base_delay + index as f64 * timing.increment;
            assert!((delay - expected).abs() < 1e-9);
        }
        assert!(delays.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn chars_keep_spaces_as_non_breaking() {
        let chars = Split::Chars.apply("Our Projects");
        assert_eq!(chars.len(), 12);
        assert_eq!(chars[3], "\u{00A0}");
        assert_eq!(chars[4], "P");
    }

    #[test]
    fn words_ignore_repeated_whitespace() {
        assert_eq!(
            Split::Words.apply("  Excellence in\tstrategy  "),
            vec!["Excellence", "in", "strategy"]
        );
    }

    #[test]
    fn reveal_state_fires_once() {
        let mut state = RevealState::default();
        assert!(!state.observe(false));
        assert!(state.observe(true));
        assert!(!state.observe(false));
        assert!(!state.observe(true));
        assert!(state.has_been_triggered);
    }

    #[test]
    fn enter_leave_enter_schedules_each_item_once() {
        let words = Split::Words.apply("We make your vision reality");
        let mut state = RevealState::default();
        let mut scheduled = Vec::new();
        let mut watches = Vec::new();

        for visible in [false, true, false, true] {
            let (fired, watch) = state.step(visible);
            if fired {
                scheduled.extend(schedule(words.iter().cloned(), HERO_PHRASE));
            }
            watches.push(watch);
        }

        assert_eq!(scheduled.len(), words.len());
        let items: Vec<_> = scheduled.into_iter().map(|s| s.item).collect();
        assert_eq!(items, words);
        assert_eq!(
            watches,
            vec![Watch::Continue, Watch::Stop, Watch::Stop, Watch::Stop]
        );
    }

    #[test]
    fn step_keeps_watching_until_first_intersection() {
        let mut state = RevealState::default();
        assert_eq!(state.step(false), (false, Watch::Continue));
        assert_eq!(state.step(false), (false, Watch::Continue));
        assert_eq!(state.step(true), (true, Watch::Stop));
    }

    #[test]
    fn hero_fires_on_mount_and_sections_wait_for_viewport() {
        assert!(HERO_TRIGGER.fires_on_mount());
        assert!(!SECTION_TRIGGER.fires_on_mount());
    }

    #[test]
    fn empty_section_schedules_nothing() {
        let mut state = RevealState::default();
        assert!(state.observe(true));
        assert!(schedule(Split::Words.apply(""), CONTACT_HEADING).is_empty());
        assert!(schedule(Vec::<String>::new(), CONTACT_HEADING).is_empty());
    }
}
