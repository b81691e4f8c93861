//! Single-touch recognizer: tap, double-tap, show-press, drag.
//!
//! Single-tap confirmation is deferred by the double-tap window: a tap is
//! only confirmed once no second press arrives in time, which is why the
//! router must keep feeding presses and releases here even while it is
//! otherwise ignoring single-touch samples. Timestamps are passed in as
//! durations from an arbitrary monotonic epoch so the logic stays
//! deterministic under test.

use std::time::Duration;

use tabuleiro_shared::constants::{DEFAULT_DOUBLE_TAP_WINDOW_MS, DEFAULT_TAP_SLOP_PX};

/// Delay before an unmoving press is acknowledged with a show-press signal.
const SHOW_PRESS_DELAY: Duration = Duration::from_millis(180);

/// Discrete signals produced by the tap recognizer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TapSignal {
    /// Press held without movement long enough to acknowledge visually.
    ShowPress {
        /// Raw x of the press.
        x: f32,
        /// Raw y of the press.
        y: f32,
    },
    /// Pointer dragged beyond the slop radius.
    Scroll {
        /// Raw x of the first touch of the gesture.
        first_x: f32,
        /// Raw y of the first touch of the gesture.
        first_y: f32,
        /// Raw current x.
        x: f32,
        /// Raw current y.
        y: f32,
    },
    /// Single tap confirmed (double-tap window expired with no second tap).
    SingleTap {
        /// Raw x of the tap.
        x: f32,
        /// Raw y of the tap.
        y: f32,
    },
    /// Second press close enough in time and space to the first.
    DoubleTap {
        /// Raw x of the second press.
        x: f32,
        /// Raw y of the second press.
        y: f32,
    },
}

/// An in-progress press.
#[derive(Clone, Copy, Debug)]
struct Press {
    x: f32,
    y: f32,
    at: Duration,
    dragging: bool,
    show_press_sent: bool,
    /// Set when this press completed a double-tap; its release must not
    /// produce a pending single tap.
    consumed_by_double: bool,
}

/// A released tap waiting out the double-tap window.
#[derive(Clone, Copy, Debug)]
struct PendingTap {
    x: f32,
    y: f32,
    pressed_at: Duration,
    released_at: Duration,
}

/// Tap/double-tap/drag state machine.
#[derive(Debug)]
pub struct TapRecognizer {
    slop: f32,
    double_tap_window: Duration,
    press: Option<Press>,
    pending: Option<PendingTap>,
}

impl Default for TapRecognizer {
    fn default() -> Self {
        Self::new(
            DEFAULT_TAP_SLOP_PX,
            Duration::from_millis(DEFAULT_DOUBLE_TAP_WINDOW_MS),
        )
    }
}

impl TapRecognizer {
    /// Creates a recognizer with the given slop radius and double-tap window.
    #[must_use]
    pub const fn new(slop: f32, double_tap_window: Duration) -> Self {
        Self {
            slop,
            double_tap_window,
            press: None,
            pending: None,
        }
    }

    /// Feeds a press. May emit a `DoubleTap` immediately.
    pub fn press(&mut self, x: f32, y: f32, now: Duration) -> Option<TapSignal> {
        let mut consumed_by_double = false;
        if let Some(pending) = self.pending.take() {
            let in_window = now.saturating_sub(pending.pressed_at) <= self.double_tap_window;
            if in_window && dist(x, y, pending.x, pending.y) <= self.slop * 2.0 {
                consumed_by_double = true;
            }
        }
        self.press = Some(Press {
            x,
            y,
            at: now,
            dragging: false,
            show_press_sent: false,
            consumed_by_double,
        });
        consumed_by_double.then_some(TapSignal::DoubleTap { x, y })
    }

    /// Feeds a motion sample for the active press.
    pub fn motion(&mut self, x: f32, y: f32) -> Option<TapSignal> {
        let press = self.press.as_mut()?;
        if !press.dragging && dist(x, y, press.x, press.y) <= self.slop {
            return None;
        }
        press.dragging = true;
        Some(TapSignal::Scroll {
            first_x: press.x,
            first_y: press.y,
            x,
            y,
        })
    }

    /// Feeds a release. A clean press becomes a pending tap awaiting
    /// confirmation; drags and double-tap presses just end.
    pub fn release(&mut self, now: Duration) {
        if let Some(press) = self.press.take() {
            if !press.dragging && !press.consumed_by_double {
                self.pending = Some(PendingTap {
                    x: press.x,
                    y: press.y,
                    pressed_at: press.at,
                    released_at: now,
                });
            }
        }
    }

    /// Discards all in-flight state. Called when a second pointer joins:
    /// whatever the single-touch interpretation was, it is no longer valid.
    pub fn cancel(&mut self) {
        self.press = None;
        self.pending = None;
    }

    /// Advances time-based detection: confirms pending taps whose window
    /// expired and acknowledges long unmoving presses.
    pub fn advance(&mut self, now: Duration) -> Vec<TapSignal> {
        let mut signals = Vec::new();
        if let Some(pending) = self.pending {
            if now.saturating_sub(pending.released_at) > self.double_tap_window {
                self.pending = None;
                signals.push(TapSignal::SingleTap {
                    x: pending.x,
                    y: pending.y,
                });
            }
        }
        if let Some(press) = self.press.as_mut() {
            if !press.show_press_sent
                && !press.dragging
                && now.saturating_sub(press.at) >= SHOW_PRESS_DELAY
            {
                press.show_press_sent = true;
                signals.push(TapSignal::ShowPress {
                    x: press.x,
                    y: press.y,
                });
            }
        }
        signals
    }
}

fn dist(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let dx = x1 - x2;
    let dy = y1 - y2;
    (dx * dx + dy * dy).sqrt()
}
