//! Navigation chrome state: the scrolled treatment of the nav bar and the
//! mobile menu toggle.

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::config::SCROLL_THRESHOLD;
use crate::error::DomError;
use crate::subscription::Subscription;

pub fn compute_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub scrolled_past_threshold: bool,
}

impl ScrollState {
    /// Records a new offset sample. Returns the new value only when it
    /// differs from the stored one.
    pub fn observe(&mut self, offset: f64) -> Option<bool> {
        let scrolled = compute_scrolled(offset);
        if scrolled == self.scrolled_past_threshold {
            return None;
        }
        self.scrolled_past_threshold = scrolled;
        Some(scrolled)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub is_open: bool,
}

impl MenuState {
    pub fn toggle(self) -> Self {
        Self {
            is_open: !self.is_open,
        }
    }

    pub fn close_on_navigate(self) -> Self {
        Self { is_open: false }
    }
}

/// Anything that can feed vertical scroll offsets to a single listener.
pub trait ScrollSource {
    fn subscribe(&self, on_offset: Box<dyn FnMut(f64)>) -> Result<Subscription, DomError>;
}

/// The browser window's `scroll` event.
pub struct WindowScroll;

impl ScrollSource for WindowScroll {
    fn subscribe(
        &self,
        mut on_offset: Box<dyn FnMut(f64)>,
    ) -> Result<Subscription, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;

        // Initial sample so a reload mid-page starts in the right state
        on_offset(window.scroll_y().unwrap_or_default());

        let reader = window.clone();
        let scroll_callback = Closure::wrap(Box::new(move || {
            on_offset(reader.scroll_y().unwrap_or_default());
        }) as Box<dyn FnMut()>);

        window
            .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
            .map_err(DomError::js("adding scroll listener"))?;

        Ok(Subscription::new(move || {
            let listener = scroll_callback.as_ref().unchecked_ref();
            if let Err(err) = window
                .remove_event_listener_with_callback("scroll", listener)
                .map_err(DomError::js("removing scroll listener"))
            {
                warn!("{}", err);
            }
        }))
    }
}

/// One mounted scroll observer. Lives as long as the nav bar that owns it.
pub struct ScrollWatch {
    _subscription: Subscription,
}

impl ScrollWatch {
    pub fn mount(
        source: &dyn ScrollSource,
        on_change: impl Fn(bool) + 'static,
    ) -> Result<Self, DomError> {
        let mut state = ScrollState::default();
        let subscription = source.subscribe(Box::new(move |offset| {
            if let Some(scrolled) = state.observe(offset) {
                debug!("nav scrolled past threshold: {}", scrolled);
                on_change(scrolled);
            }
        }))?;

        Ok(Self {
            _subscription: subscription,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    type Listener = Box<dyn FnMut(f64)>;

    /// Hand-driven source that tracks how many listeners are attached.
    #[derive(Clone, Default)]
    struct ManualScroll {
        listeners: Rc<RefCell<Vec<(usize, Listener)>>>,
        next_id: Rc<Cell<usize>>,
    }

    impl ManualScroll {
        fn emit(&self, offset: f64) {
            for (_, listener) in self.listeners.borrow_mut().iter_mut() {
                listener(offset);
            }
        }

        fn listener_count(&self) -> usize {
            self.listeners.borrow().len()
        }
    }

    impl ScrollSource for ManualScroll {
        fn subscribe(&self, on_offset: Listener) -> Result<Subscription, DomError> {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.listeners.borrow_mut().push((id, on_offset));
            let listeners = self.listeners.clone();
            Ok(Subscription::new(move || {
                listeners.borrow_mut().retain(|(other, _)| *other != id);
            }))
        }
    }

    #[rstest]
    #[case(0.0, false)]
    #[case(-30.0, false)]
    #[case(50.0, false)]
    #[case(50.5, true)]
    #[case(1200.0, true)]
    #[case(f64::NAN, false)]
    fn scrolled_is_strictly_past_threshold(#[case] offset: f64, #[case] expected: bool) {
        assert_eq!(compute_scrolled(offset), expected);
    }

    #[test]
    fn offset_sequence_maps_to_scrolled_sequence() {
        let mut state = ScrollState::default();
        let seen: Vec<bool> = [0.0, 20.0, 60.0, 40.0]
            .into_iter()
            .map(|offset| {
                state.observe(offset);
                state.scrolled_past_threshold
            })
            .collect();
        assert_eq!(seen, vec![false, false, true, false]);
    }

    #[test]
    fn observe_reports_only_changes() {
        let mut state = ScrollState::default();
        assert_eq!(state.observe(10.0), None);
        assert_eq!(state.observe(70.0), Some(true));
        assert_eq!(state.observe(90.0), None);
        assert_eq!(state.observe(0.0), Some(false));
    }

    #[rstest]
    #[case(MenuState { is_open: false }, true)]
    #[case(MenuState { is_open: true }, false)]
    fn toggle_flips_menu(#[case] menu: MenuState, #[case] expected: bool) {
        assert_eq!(menu.toggle().is_open, expected);
    }

    #[rstest]
    #[case(MenuState { is_open: false })]
    #[case(MenuState { is_open: true })]
    fn navigating_always_closes_menu(#[case] menu: MenuState) {
        assert!(!menu.close_on_navigate().is_open);
    }

    #[test]
    fn watch_notifies_on_change_and_detaches_on_drop() {
        let source = ManualScroll::default();
        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = changes.clone();

        let watch = ScrollWatch::mount(&source, move |scrolled| sink.borrow_mut().push(scrolled))
            .expect("manual source never fails");
        assert_eq!(source.listener_count(), 1);

        for offset in [0.0, 20.0, 60.0, 40.0] {
            source.emit(offset);
        }
        assert_eq!(*changes.borrow(), vec![true, false]);

        source.emit(300.0);
        source.emit(400.0);
        assert_eq!(*changes.borrow(), vec![true, false, true]);

        drop(watch);
        assert_eq!(source.listener_count(), 0);

        source.emit(0.0);
        assert_eq!(*changes.borrow(), vec![true, false, true]);
    }
}
