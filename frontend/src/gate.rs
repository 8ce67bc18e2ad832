/// Stage of the one-time "Under Development" interstitial. Dismissal is
/// terminal for the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GateState {
    #[default]
    Shown,
    Leaving,
    Dismissed,
}

impl GateState {
    /// The user asked to enter the site.
    pub fn enter(self) -> Self {
        match self {
            GateState::Shown => GateState::Leaving,
            other => other,
        }
    }

    /// The fade-out finished.
    pub fn faded(self) -> Self {
        match self {
            GateState::Leaving | GateState::Dismissed => GateState::Dismissed,
            GateState::Shown => GateState::Shown,
        }
    }

    pub fn is_visible(self) -> bool {
        self != GateState::Dismissed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn single_click_dismisses_after_fade() {
        let gate = GateState::default();
        assert!(gate.is_visible());
        let gate = gate.enter();
        assert_eq!(gate, GateState::Leaving);
        assert!(gate.is_visible());
        let gate = gate.faded();
        assert_eq!(gate, GateState::Dismissed);
        assert!(!gate.is_visible());
    }

    #[test]
    fn dismissed_never_comes_back() {
        let gate = GateState::Dismissed;
        assert_eq!(gate.enter(), GateState::Dismissed);
        assert_eq!(gate.faded(), GateState::Dismissed);
    }

    #[test]
    fn stray_fade_does_not_hide_a_shown_gate() {
        assert_eq!(GateState::Shown.faded(), GateState::Shown);
    }
}
