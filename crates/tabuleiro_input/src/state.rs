//! Pointer-count state machine.
//!
//! Governs which gesture sources may contribute events for the current
//! phase of a touch sequence. Once a two-finger gesture starts, single-touch
//! recognizers stay muted until every pointer lifts; once a third finger
//! joins, the two-finger recognizers stay muted while the extra fingers
//! settle back down.

/// Gesture phase of the surface, one instance per router.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerState {
    /// No multi-touch gesture in progress.
    #[default]
    Idle,
    /// Two-finger gesture in progress (rotate/scale/pan).
    MultiTouch2,
    /// Three-finger gesture in progress (action trigger).
    MultiTouch3,
}

impl PointerState {
    /// True when no multi-touch gesture is draining.
    #[must_use]
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    /// True if a sample with two pointers may drive the two-finger
    /// recognizers. Denied while three fingers are still settling down.
    #[must_use]
    pub const fn accepts_two_fingers(self) -> bool {
        matches!(self, Self::Idle | Self::MultiTouch2)
    }

    /// True if a sample with three pointers may enter the three-finger
    /// phase. A third finger may join an ongoing two-finger gesture.
    #[must_use]
    pub const fn accepts_three_fingers(self) -> bool {
        matches!(self, Self::Idle | Self::MultiTouch2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(PointerState::default(), PointerState::Idle);
        assert!(PointerState::Idle.is_idle());
    }

    #[test]
    fn test_two_finger_gate() {
        assert!(PointerState::Idle.accepts_two_fingers());
        assert!(PointerState::MultiTouch2.accepts_two_fingers());
        // Three fingers settling down to two must not restart rotate/scale.
        assert!(!PointerState::MultiTouch3.accepts_two_fingers());
    }

    #[test]
    fn test_three_finger_gate() {
        assert!(PointerState::Idle.accepts_three_fingers());
        assert!(PointerState::MultiTouch2.accepts_three_fingers());
        assert!(!PointerState::MultiTouch3.accepts_three_fingers());
    }
}
