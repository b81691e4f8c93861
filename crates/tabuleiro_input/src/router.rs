//! Gesture event router.
//!
//! Merges the output of the independent recognizers into one ordered event
//! stream, arbitrated by the pointer-count state machine: single-touch
//! recognition is muted while a multi-touch gesture drains, two-finger
//! recognition is muted while a third finger settles, and the tilt filter
//! is only open while exactly two fingers are down.
//!
//! Coordinates are flipped to a bottom-left origin exactly once, here, using
//! the *logical* viewport height (which differs from the physical surface
//! height when a fixed render resolution is pinned).

use std::sync::Arc;
use std::time::Duration;

use tabuleiro_shared::constants::{
    DEFAULT_DOUBLE_TAP_WINDOW_MS, DEFAULT_TAP_SLOP_PX, FIXED_LOGICAL_HEIGHT, FIXED_LOGICAL_WIDTH,
};
use tabuleiro_shared::events::InputEvent;
use tabuleiro_shared::keys::{Key, MetaKeys};

use crate::queue::EventQueue;
use crate::recognizer::{
    RotationRecognizer, RotationSignal, ScaleRecognizer, TapRecognizer, TapSignal,
    TranslationRecognizer, TranslationSignal,
};
use crate::sample::{TouchPhase, TouchSample};
use crate::state::PointerState;
use crate::tilt::{Orientation, TiltFilter};

/// Router construction parameters.
#[derive(Clone, Copy, Debug)]
pub struct RouterConfig {
    /// Movement beyond this radius turns a press into a drag.
    pub tap_slop: f32,
    /// Window for double-tap detection.
    pub double_tap_window: Duration,
    /// The device's natural orientation, for tilt axis selection.
    pub natural_orientation: Orientation,
    /// Physical surface size in pixels.
    pub surface_size: (u32, u32),
    /// Pinned logical render resolution; touch input is rescaled into it.
    pub fixed_resolution: Option<(u32, u32)>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            tap_slop: DEFAULT_TAP_SLOP_PX,
            double_tap_window: Duration::from_millis(DEFAULT_DOUBLE_TAP_WINDOW_MS),
            natural_orientation: Orientation::Portrait,
            surface_size: (FIXED_LOGICAL_WIDTH, FIXED_LOGICAL_HEIGHT),
            fixed_resolution: None,
        }
    }
}

/// Translates raw samples and recognizer signals into queued semantic events.
///
/// Lives on the input-producer side; the consumer only ever touches the
/// shared [`EventQueue`].
pub struct GestureEventRouter {
    queue: Arc<EventQueue>,
    state: PointerState,
    meta: MetaKeys,
    tap: TapRecognizer,
    scale: ScaleRecognizer,
    rotation: RotationRecognizer,
    translation: TranslationRecognizer,
    tilt: TiltFilter,
    dragging: bool,
    surface_size: (u32, u32),
    fixed_resolution: Option<(u32, u32)>,
}

impl GestureEventRouter {
    /// Creates a router with its own empty queue.
    #[must_use]
    pub fn new(config: RouterConfig) -> Self {
        Self {
            queue: Arc::new(EventQueue::new()),
            state: PointerState::Idle,
            meta: MetaKeys::none(),
            tap: TapRecognizer::new(config.tap_slop, config.double_tap_window),
            scale: ScaleRecognizer::new(),
            rotation: RotationRecognizer::new(),
            translation: TranslationRecognizer::new(),
            tilt: TiltFilter::new(config.natural_orientation),
            dragging: false,
            surface_size: config.surface_size,
            fixed_resolution: config.fixed_resolution,
        }
    }

    /// Shared handle to the queue, for the render-tick consumer.
    #[must_use]
    pub fn queue(&self) -> Arc<EventQueue> {
        Arc::clone(&self.queue)
    }

    /// Current gesture phase.
    #[must_use]
    pub const fn pointer_state(&self) -> PointerState {
        self.state
    }

    /// Updates the physical surface size after a resize.
    pub fn set_surface_size(&mut self, width: u32, height: u32) {
        self.surface_size = (width, height);
    }

    /// Pins (or unpins) a fixed logical render resolution.
    pub fn set_fixed_resolution(&mut self, resolution: Option<(u32, u32)>) {
        self.fixed_resolution = resolution;
    }

    /// Updates the current device orientation for tilt axis selection.
    pub fn set_device_orientation(&mut self, orientation: Orientation) {
        self.tilt.set_orientation(orientation);
    }

    /// Logical viewport size: the pinned resolution if any, else the surface.
    #[must_use]
    pub fn logical_size(&self) -> (u32, u32) {
        self.fixed_resolution.unwrap_or(self.surface_size)
    }

    /// Feeds one raw touch sample.
    ///
    /// `now` is time since an arbitrary monotonic epoch; it only has to be
    /// consistent with the `now` passed to [`Self::advance`].
    pub fn handle_touch(&mut self, sample: &TouchSample, now: Duration) {
        let sample = self.rescale(sample);
        let count = sample.pointer_count();
        self.tilt.set_enabled(count == 2);

        if sample.phase.is_release() {
            self.queue.push(InputEvent::Released);
            self.dragging = false;
            // The tap recognizer sees every release so a double-tap press
            // can still suppress the pending single tap.
            self.tap.release(now);
            if count <= 1 {
                if !self.state.is_idle() {
                    tracing::debug!(state = ?self.state, "multi-touch gesture ended");
                }
                self.state = PointerState::Idle;
                self.scale.reset();
                self.rotation.reset();
                self.translation.reset();
            }
            return;
        }

        match sample.phase {
            TouchPhase::Down => {
                if let Some(pointer) = sample.pointers.first() {
                    // Forwarded even mid-multi-touch: the double-tap timer
                    // lives in the recognizer.
                    if let Some(signal) = self.tap.press(pointer.x, pointer.y, now) {
                        self.process_tap_signal(signal);
                    }
                }
            }
            TouchPhase::PointerDown => self.tap.cancel(),
            TouchPhase::Move | TouchPhase::PointerUp | TouchPhase::Up => {}
        }

        match count {
            0 | 1 => {
                if !self.state.is_idle() {
                    // A multi-touch gesture is still draining.
                    return;
                }
                if sample.phase == TouchPhase::Move {
                    if let Some(pointer) = sample.pointers.first() {
                        if let Some(signal) = self.tap.motion(pointer.x, pointer.y) {
                            self.process_tap_signal(signal);
                        }
                    }
                }
            }
            2 => {
                if !self.state.accepts_two_fingers() {
                    return;
                }
                if self.state != PointerState::MultiTouch2 {
                    tracing::debug!("two-finger gesture started");
                    self.state = PointerState::MultiTouch2;
                }
                match self.rotation.on_sample(&sample) {
                    Some(RotationSignal::TwoFingerContact { x1, y1, x2, y2 }) => {
                        let event = InputEvent::TwoFingerPressed {
                            x1: x1 as i32,
                            y1: self.flip(y1),
                            x2: x2 as i32,
                            y2: self.flip(y2),
                        };
                        self.queue.push(event);
                    }
                    Some(RotationSignal::Rotated(delta)) => self.on_rotate(delta),
                    None => {}
                }
                if let Some(factor) = self.scale.on_sample(&sample) {
                    self.on_scale(factor);
                }
                match self.translation.on_sample(&sample) {
                    Some(TranslationSignal::Begin { x, y }) => {
                        let event = InputEvent::Pan { x: x as i32, y: self.flip(y) };
                        self.queue.push(event);
                    }
                    Some(TranslationSignal::Update { x, y }) => {
                        let event = InputEvent::Move { x: x as i32, y: self.flip(y) };
                        self.queue.push(event);
                    }
                    None => {}
                }
            }
            _ => {
                if self.state.accepts_three_fingers() {
                    tracing::debug!("three-finger action triggered");
                    self.state = PointerState::MultiTouch3;
                    let (x, y) = sample.centroid();
                    let event = InputEvent::Action { x: x as i32, y: self.flip(y) };
                    self.queue.push(event);
                }
            }
        }
    }

    /// Feeds a pre-recognized scale update. Ignored outside a two-finger
    /// gesture.
    pub fn on_scale(&mut self, factor: f32) {
        if self.state == PointerState::MultiTouch2 {
            self.queue.push(InputEvent::Scale(factor));
        }
    }

    /// Feeds a pre-recognized rotation delta. Zero-magnitude deltas are
    /// suppressed; ignored outside a two-finger gesture.
    pub fn on_rotate(&mut self, delta: f32) {
        if delta != 0.0 && self.state == PointerState::MultiTouch2 {
            self.queue.push(InputEvent::Rotate(delta));
        }
    }

    /// Feeds a key press. Modifiers become held state; anything else is
    /// ignored on the way down.
    pub fn handle_key_down(&mut self, key: Key) {
        if key.is_modifier() {
            self.meta.set(key, true);
        }
    }

    /// Feeds a key release. Modifiers clear their held state; other keys are
    /// forwarded with the native code (sentinel for unmapped keys) and the
    /// current modifier bitmask.
    pub fn handle_key_up(&mut self, key: Key) {
        if key.is_modifier() {
            self.meta.set(key, false);
        } else {
            self.queue.push(InputEvent::Key {
                code: key.native_code(),
                modifiers: self.meta.native_modifiers(),
            });
        }
    }

    /// Feeds a 3-axis orientation sensor sample. Produces a tilt event only
    /// while exactly two pointers are down.
    pub fn handle_sensor(&mut self, values: [f32; 3]) {
        if let Some(delta) = self.tilt.sample(values) {
            self.queue.push(InputEvent::Tilt(delta));
        }
    }

    /// Discards all in-flight gesture state (used when the session pauses).
    /// Held modifier keys are kept; the platform reports their releases even
    /// across a pause.
    pub fn reset(&mut self) {
        self.state = PointerState::Idle;
        self.dragging = false;
        self.tap.cancel();
        self.scale.reset();
        self.rotation.reset();
        self.translation.reset();
        self.tilt.set_enabled(false);
    }

    /// Advances time-based recognition (tap confirmation, show-press).
    pub fn advance(&mut self, now: Duration) {
        for signal in self.tap.advance(now) {
            self.process_tap_signal(signal);
        }
    }

    fn process_tap_signal(&mut self, signal: TapSignal) {
        match signal {
            TapSignal::ShowPress { x, y } => {
                let event = InputEvent::Hover { x: x as i32, y: self.flip(y) };
                self.queue.push(event);
            }
            TapSignal::Scroll { first_x, first_y, x, y } => {
                if !self.dragging {
                    self.dragging = true;
                    let event =
                        InputEvent::LoadBegin { x: first_x as i32, y: self.flip(first_y) };
                    self.queue.push(event);
                }
                let event = InputEvent::Move { x: x as i32, y: self.flip(y) };
                self.queue.push(event);
            }
            TapSignal::SingleTap { x, y } => {
                tracing::debug!(x, y, "single tap confirmed");
                self.dispatch_tap(x as i32, self.flip(y));
            }
            TapSignal::DoubleTap { x, y } => {
                let event = if self.meta.shift() {
                    InputEvent::Hover { x: x as i32, y: self.flip(y) }
                } else {
                    InputEvent::DoubleClick { x: x as i32, y: self.flip(y) }
                };
                self.queue.push(event);
            }
        }
    }

    /// Classifies a confirmed single tap by the held modifiers.
    fn dispatch_tap(&mut self, x: i32, y: i32) {
        let event = if self.meta.is_empty() {
            Some(InputEvent::Click { x, y })
        } else if self.meta.ctrl() {
            Some(InputEvent::ToggleClick { x, y })
        } else if self.meta.alt_left {
            Some(InputEvent::Action { x, y })
        } else if self.meta.alt_right {
            // Right-alt alone signals; with right-shift it is the plain
            // action, a workaround for keyboards without a left alt.
            if self.meta.shift_right {
                Some(InputEvent::Action { x, y })
            } else {
                Some(InputEvent::SignaledAction { x, y })
            }
        } else {
            // Shift alone modifies double-taps only.
            None
        };
        if let Some(event) = event {
            self.queue.push(event);
        }
    }

    /// Maps a raw y (top-left origin) to the engine's bottom-left origin.
    fn flip(&self, y: f32) -> i32 {
        (self.logical_size().1 as f32 - y) as i32
    }

    /// Rescales a physical-coordinate sample into logical coordinates.
    fn rescale(&self, sample: &TouchSample) -> TouchSample {
        let Some((lw, lh)) = self.fixed_resolution else {
            return sample.clone();
        };
        let (pw, ph) = self.surface_size;
        if pw == 0 || ph == 0 {
            return sample.clone();
        }
        let sx = lw as f32 / pw as f32;
        let sy = lh as f32 / ph as f32;
        let pointers = sample
            .pointers
            .iter()
            .map(|p| crate::sample::Pointer {
                id: p.id,
                x: p.x * sx,
                y: p.y * sy,
                pressure: p.pressure,
            })
            .collect();
        TouchSample::new(sample.phase, pointers)
    }
}

impl Default for GestureEventRouter {
    fn default() -> Self {
        Self::new(RouterConfig::default())
    }
}
