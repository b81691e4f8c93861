//! Two-finger translation (pan) recognizer.
//!
//! Tracks the pointer centroid. The contact sample only sets the baseline;
//! the first moved sample begins the pan, later ones update it. This keeps a
//! plain two-finger press (a pinch about to start, or a tilt grip) from
//! emitting a spurious pan.

use crate::sample::{TouchPhase, TouchSample};

/// Signals produced by the translation recognizer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TranslationSignal {
    /// Pan started at this raw centroid.
    Begin {
        /// Raw centroid x.
        x: f32,
        /// Raw centroid y.
        y: f32,
    },
    /// Pan moved to this raw centroid.
    Update {
        /// Raw centroid x.
        x: f32,
        /// Raw centroid y.
        y: f32,
    },
}

/// Centroid-tracking state machine for two-finger samples.
#[derive(Debug, Default)]
pub struct TranslationRecognizer {
    active: bool,
    baselined: bool,
}

impl TranslationRecognizer {
    /// Creates an inactive recognizer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds a sample. Samples without exactly two pointers are ignored.
    pub fn on_sample(&mut self, sample: &TouchSample) -> Option<TranslationSignal> {
        if sample.pointer_count() != 2 {
            return None;
        }
        if sample.phase == TouchPhase::PointerDown || !self.baselined {
            self.baselined = true;
            self.active = false;
            return None;
        }
        if sample.phase != TouchPhase::Move {
            return None;
        }

        let (x, y) = sample.centroid();
        if self.active {
            Some(TranslationSignal::Update { x, y })
        } else {
            self.active = true;
            Some(TranslationSignal::Begin { x, y })
        }
    }

    /// Forgets the gesture.
    pub fn reset(&mut self) {
        self.active = false;
        self.baselined = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::Pointer;

    fn two(phase: TouchPhase, a: (f32, f32), b: (f32, f32)) -> TouchSample {
        TouchSample::new(
            phase,
            vec![Pointer::new(0, a.0, a.1), Pointer::new(1, b.0, b.1)],
        )
    }

    #[test]
    fn test_contact_is_silent_then_begin_then_update() {
        let mut pan = TranslationRecognizer::new();
        assert_eq!(
            pan.on_sample(&two(TouchPhase::PointerDown, (0.0, 0.0), (100.0, 0.0))),
            None
        );
        assert_eq!(
            pan.on_sample(&two(TouchPhase::Move, (10.0, 0.0), (110.0, 0.0))),
            Some(TranslationSignal::Begin { x: 60.0, y: 0.0 })
        );
        assert_eq!(
            pan.on_sample(&two(TouchPhase::Move, (20.0, 0.0), (120.0, 0.0))),
            Some(TranslationSignal::Update { x: 70.0, y: 0.0 })
        );
    }

    #[test]
    fn test_reset_restarts_gesture() {
        let mut pan = TranslationRecognizer::new();
        let _ = pan.on_sample(&two(TouchPhase::PointerDown, (0.0, 0.0), (100.0, 0.0)));
        let _ = pan.on_sample(&two(TouchPhase::Move, (10.0, 0.0), (110.0, 0.0)));
        pan.reset();
        let _ = pan.on_sample(&two(TouchPhase::PointerDown, (0.0, 0.0), (100.0, 0.0)));
        assert_eq!(
            pan.on_sample(&two(TouchPhase::Move, (5.0, 0.0), (105.0, 0.0))),
            Some(TranslationSignal::Begin { x: 55.0, y: 0.0 })
        );
    }

    #[test]
    fn test_wrong_pointer_count_ignored() {
        let mut pan = TranslationRecognizer::new();
        let sample = TouchSample::new(TouchPhase::Move, vec![Pointer::new(0, 1.0, 2.0)]);
        assert_eq!(pan.on_sample(&sample), None);
    }
}
