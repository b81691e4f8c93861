//! Semantic input events shared between producer and consumer.
//!
//! Every positional event carries integer screen coordinates already flipped
//! to a bottom-left origin (`y' = logical_height - y_raw`) to match the
//! engine's convention. The flip happens exactly once, at capture time, in
//! the router.

use serde::{Deserialize, Serialize};

/// Event type discriminator.
///
/// The de-duplication pass collapses runs of same-kind events, so the kind
/// must be cheap to compare.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// Plain confirmed tap.
    Click,
    /// Ctrl-modified tap (selection toggle).
    ToggleClick,
    /// Confirmed double tap.
    DoubleClick,
    /// Pinch scale update.
    Scale,
    /// Press acknowledged or detail request.
    Hover,
    /// Drag started (press at the drag origin).
    LoadBegin,
    /// All or some pointers lifted.
    Released,
    /// Drag or two-finger translation update.
    Move,
    /// Two-finger rotation update.
    Rotate,
    /// Two-finger translation started.
    Pan,
    /// Device tilt update.
    Tilt,
    /// Non-modifier key released.
    Key,
    /// Default action trigger.
    Action,
    /// Signaled (ping) action trigger.
    SignaledAction,
    /// Initial contact positions of a two-finger gesture.
    TwoFingerPressed,
}

/// One semantic interaction, queued at capture time and replayed into the
/// engine once per render tick.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Confirmed single tap with no modifiers.
    Click {
        /// Flipped screen x.
        x: i32,
        /// Flipped screen y.
        y: i32,
    },
    /// Confirmed single tap with ctrl held (toggles selection).
    ToggleClick {
        /// Flipped screen x.
        x: i32,
        /// Flipped screen y.
        y: i32,
    },
    /// Confirmed double tap.
    DoubleClick {
        /// Flipped screen x.
        x: i32,
        /// Flipped screen y.
        y: i32,
    },
    /// Pinch scale factor relative to the previous update.
    Scale(f32),
    /// Detail/show request at a position.
    Hover {
        /// Flipped screen x.
        x: i32,
        /// Flipped screen y.
        y: i32,
    },
    /// Drag started: press at the first touch point of the gesture.
    LoadBegin {
        /// Flipped screen x.
        x: i32,
        /// Flipped screen y.
        y: i32,
    },
    /// Pointer(s) lifted.
    Released,
    /// Drag or translation moved to a new position.
    Move {
        /// Flipped screen x.
        x: i32,
        /// Flipped screen y.
        y: i32,
    },
    /// Two-finger rotation delta in radians.
    Rotate(f32),
    /// Two-finger translation started at the pointer centroid.
    Pan {
        /// Flipped screen x.
        x: i32,
        /// Flipped screen y.
        y: i32,
    },
    /// Device tilt delta (sign already inverted at capture).
    Tilt(f32),
    /// Non-modifier key released.
    Key {
        /// Native key code, or [`crate::keys::NO_KEY_MAPPING`].
        code: i32,
        /// Native modifier bitmask.
        modifiers: i32,
    },
    /// Default action at a position (alt-tap or three-finger gesture).
    Action {
        /// Flipped screen x.
        x: i32,
        /// Flipped screen y.
        y: i32,
    },
    /// Signaled action (ping) at a position.
    SignaledAction {
        /// Flipped screen x.
        x: i32,
        /// Flipped screen y.
        y: i32,
    },
    /// Initial positions of both fingers when a two-finger gesture starts.
    TwoFingerPressed {
        /// First pointer flipped x.
        x1: i32,
        /// First pointer flipped y.
        y1: i32,
        /// Second pointer flipped x.
        x2: i32,
        /// Second pointer flipped y.
        y2: i32,
    },
}

impl InputEvent {
    /// Returns the discriminator for this event.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Click { .. } => EventKind::Click,
            Self::ToggleClick { .. } => EventKind::ToggleClick,
            Self::DoubleClick { .. } => EventKind::DoubleClick,
            Self::Scale(_) => EventKind::Scale,
            Self::Hover { .. } => EventKind::Hover,
            Self::LoadBegin { .. } => EventKind::LoadBegin,
            Self::Released => EventKind::Released,
            Self::Move { .. } => EventKind::Move,
            Self::Rotate(_) => EventKind::Rotate,
            Self::Pan { .. } => EventKind::Pan,
            Self::Tilt(_) => EventKind::Tilt,
            Self::Key { .. } => EventKind::Key,
            Self::Action { .. } => EventKind::Action,
            Self::SignaledAction { .. } => EventKind::SignaledAction,
            Self::TwoFingerPressed { .. } => EventKind::TwoFingerPressed,
        }
    }

    /// Returns the position carried by this event, if any.
    #[must_use]
    pub const fn position(&self) -> Option<(i32, i32)> {
        match self {
            Self::Click { x, y }
            | Self::ToggleClick { x, y }
            | Self::DoubleClick { x, y }
            | Self::Hover { x, y }
            | Self::LoadBegin { x, y }
            | Self::Move { x, y }
            | Self::Pan { x, y }
            | Self::Action { x, y }
            | Self::SignaledAction { x, y } => Some((*x, *y)),
            Self::TwoFingerPressed { x1, y1, .. } => Some((*x1, *y1)),
            Self::Scale(_) | Self::Released | Self::Rotate(_) | Self::Tilt(_) | Self::Key { .. } => {
                None
            }
        }
    }
}
