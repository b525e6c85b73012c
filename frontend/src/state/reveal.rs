use std::rc::Rc;

use log::debug;
use yew::Reducible;

/// One-shot entrance state for a single element.
///
/// Starts hidden and flips to visible the first time the element is
/// reported as intersecting the viewport. Later reports, whether the
/// element is entering or leaving, leave it visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealState {
    visible: bool,
}

impl RevealState {
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Applies one intersection report. Returns `true` only for the
    /// report that caused the hidden -> visible transition.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.visible || !intersecting {
            return false;
        }
        self.visible = true;
        true
    }
}

impl Reducible for RevealState {
    type Action = bool;

    fn reduce(self: Rc<Self>, intersecting: bool) -> Rc<Self> {
        let mut next = *self;
        if next.observe(intersecting) {
            debug!("element revealed");
            Rc::new(next)
        } else {
            self
        }
    }
}

/// Inline style offsetting the entrance transition, for staggered siblings.
pub fn transition_delay(delay_ms: u32) -> String {
    format!("transition-delay: {}ms;", delay_ms)
}

/// Entrance delay for the `index`-th of a row of siblings.
pub fn stagger_delay(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).map_or(u32::MAX, |index| index.saturating_mul(step_ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let state = RevealState::default();
        assert!(!state.visible());
    }

    #[test]
    fn leaving_before_entering_stays_hidden() {
        let mut state = RevealState::default();
        assert!(!state.observe(false));
        assert!(!state.visible());
    }

    #[test]
    fn never_reverts_once_visible() {
        let mut state = RevealState::default();
        assert!(state.observe(true));
        for intersecting in [false, true, false, false, true] {
            assert!(!state.observe(intersecting));
            assert!(state.visible());
        }
    }

    #[test]
    fn reducer_keeps_same_state_after_reveal() {
        let hidden = Rc::new(RevealState::default());
        let shown = hidden.clone().reduce(true);
        assert!(shown.visible());
        assert!(!Rc::ptr_eq(&hidden, &shown));

        let again = shown.clone().reduce(true);
        assert!(Rc::ptr_eq(&shown, &again));
        let left = again.clone().reduce(false);
        assert!(Rc::ptr_eq(&again, &left));
    }

    #[test]
    fn siblings_stagger_by_step() {
        let delays: Vec<u32> = (0..4).map(|index| stagger_delay(index, 150)).collect();
        assert_eq!(delays, vec![0, 150, 300, 450]);
        assert_eq!(stagger_delay(usize::MAX, 150), u32::MAX);
    }

    #[test]
    fn delay_renders_as_milliseconds() {
        assert_eq!(transition_delay(0), "transition-delay: 0ms;");
        assert_eq!(transition_delay(300), "transition-delay: 300ms;");
    }
}
