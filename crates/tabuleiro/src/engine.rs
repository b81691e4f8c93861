//! The downstream engine boundary.
//!
//! The native engine consumes interactions through this trait; the render
//! tick replays each drained batch into it in order. Implementations must
//! not block: the tick thread calls them at frame rate.

/// Typed interaction API the engine exposes to the input side.
pub trait EngineSink: Send {
    /// A press landed. `toggle` selects toggle semantics (ctrl-tap).
    fn touch_pressed(&mut self, toggle: bool, x: i32, y: i32);
    /// The pressed pointer moved.
    fn touch_moved(&mut self, x: i32, y: i32);
    /// All or some pointers lifted.
    fn touch_released(&mut self);
    /// Confirmed double tap.
    fn double_click(&mut self, x: i32, y: i32);
    /// Both initial contact positions of a two-finger gesture.
    fn two_finger_pressed(&mut self, x1: i32, y1: i32, x2: i32, y2: i32);
    /// Detail request (show-press or shift-double-tap).
    fn hover(&mut self, x: i32, y: i32);
    /// Pinch scale factor relative to the previous update.
    fn scale(&mut self, factor: f32);
    /// Two-finger rotation delta in radians.
    fn rotate(&mut self, delta: f32);
    /// Two-finger translation started at this centroid.
    fn pan(&mut self, x: i32, y: i32);
    /// Device tilt delta.
    fn tilt(&mut self, delta: f32);
    /// Non-modifier key released, native code and modifier bitmask.
    fn keyboard(&mut self, code: i32, modifiers: i32);
    /// Action trigger; `signal` marks the ping variant.
    fn action(&mut self, signal: bool, x: i32, y: i32);
}

/// One recorded [`EngineSink`] call, for assertions in tests and traces.
#[derive(Clone, Debug, PartialEq)]
#[allow(missing_docs)]
pub enum SinkCall {
    TouchPressed { toggle: bool, x: i32, y: i32 },
    TouchMoved { x: i32, y: i32 },
    TouchReleased,
    DoubleClick { x: i32, y: i32 },
    TwoFingerPressed { x1: i32, y1: i32, x2: i32, y2: i32 },
    Hover { x: i32, y: i32 },
    Scale(f32),
    Rotate(f32),
    Pan { x: i32, y: i32 },
    Tilt(f32),
    Keyboard { code: i32, modifiers: i32 },
    Action { signal: bool, x: i32, y: i32 },
}

/// Sink that records every call. Used by tests and by the trace binary.
#[derive(Debug, Default)]
pub struct RecordingSink {
    /// Calls received so far, in order.
    pub calls: Vec<SinkCall>,
}

impl RecordingSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns everything recorded so far.
    pub fn take(&mut self) -> Vec<SinkCall> {
        std::mem::take(&mut self.calls)
    }
}

impl EngineSink for RecordingSink {
    fn touch_pressed(&mut self, toggle: bool, x: i32, y: i32) {
        self.calls.push(SinkCall::TouchPressed { toggle, x, y });
    }
    fn touch_moved(&mut self, x: i32, y: i32) {
        self.calls.push(SinkCall::TouchMoved { x, y });
    }
    fn touch_released(&mut self) {
        self.calls.push(SinkCall::TouchReleased);
    }
    fn double_click(&mut self, x: i32, y: i32) {
        self.calls.push(SinkCall::DoubleClick { x, y });
    }
    fn two_finger_pressed(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.calls.push(SinkCall::TwoFingerPressed { x1, y1, x2, y2 });
    }
    fn hover(&mut self, x: i32, y: i32) {
        self.calls.push(SinkCall::Hover { x, y });
    }
    fn scale(&mut self, factor: f32) {
        self.calls.push(SinkCall::Scale(factor));
    }
    fn rotate(&mut self, delta: f32) {
        self.calls.push(SinkCall::Rotate(delta));
    }
    fn pan(&mut self, x: i32, y: i32) {
        self.calls.push(SinkCall::Pan { x, y });
    }
    fn tilt(&mut self, delta: f32) {
        self.calls.push(SinkCall::Tilt(delta));
    }
    fn keyboard(&mut self, code: i32, modifiers: i32) {
        self.calls.push(SinkCall::Keyboard { code, modifiers });
    }
    fn action(&mut self, signal: bool, x: i32, y: i32) {
        self.calls.push(SinkCall::Action { signal, x, y });
    }
}
