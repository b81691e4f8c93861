//! Two-finger rotation recognizer.
//!
//! Tracks the angle of the line between the two contacts. First contact
//! reports the initial finger positions; every later sample reports the
//! angle delta since the previous one.

use crate::sample::{TouchPhase, TouchSample};

/// Signals produced by the rotation recognizer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RotationSignal {
    /// Both fingers just made contact, at these raw positions.
    TwoFingerContact {
        /// First pointer raw x.
        x1: f32,
        /// First pointer raw y.
        y1: f32,
        /// Second pointer raw x.
        x2: f32,
        /// Second pointer raw y.
        y2: f32,
    },
    /// Angle changed by this delta (radians) since the last sample.
    Rotated(f32),
}

/// Angle-delta state machine for two-finger samples.
#[derive(Debug, Default)]
pub struct RotationRecognizer {
    last_angle: Option<f32>,
}

impl RotationRecognizer {
    /// Creates an inactive recognizer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds a sample. Samples without exactly two pointers are ignored.
    pub fn on_sample(&mut self, sample: &TouchSample) -> Option<RotationSignal> {
        if sample.pointer_count() != 2 {
            return None;
        }
        let (a, b) = (&sample.pointers[0], &sample.pointers[1]);
        let angle = (b.y - a.y).atan2(b.x - a.x);

        if sample.phase == TouchPhase::PointerDown || self.last_angle.is_none() {
            self.last_angle = Some(angle);
            return Some(RotationSignal::TwoFingerContact {
                x1: a.x,
                y1: a.y,
                x2: b.x,
                y2: b.y,
            });
        }

        let last = self.last_angle.replace(angle).unwrap_or(angle);
        Some(RotationSignal::Rotated(angle - last))
    }

    /// Forgets the gesture baseline.
    pub fn reset(&mut self) {
        self.last_angle = None;
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
    fn test_first_contact_reports_positions() {
        let mut rot = RotationRecognizer::new();
        let signal = rot.on_sample(&two(TouchPhase::PointerDown, (100.0, 200.0), (150.0, 220.0)));
        assert_eq!(
            signal,
            Some(RotationSignal::TwoFingerContact {
                x1: 100.0,
                y1: 200.0,
                x2: 150.0,
                y2: 220.0
            })
        );
    }

    #[test]
    fn test_delta_between_samples() {
        let mut rot = RotationRecognizer::new();
        let _ = rot.on_sample(&two(TouchPhase::PointerDown, (0.0, 0.0), (100.0, 0.0)));

        // Second finger swings to 45 degrees.
        let signal = rot.on_sample(&two(TouchPhase::Move, (0.0, 0.0), (100.0, 100.0)));
        match signal {
            Some(RotationSignal::Rotated(delta)) => {
                assert!((delta - std::f32::consts::FRAC_PI_4).abs() < 1e-5);
            }
            other => panic!("expected rotation delta, got {other:?}"),
        }
    }

    #[test]
    fn test_unmoved_fingers_report_zero_delta() {
        let mut rot = RotationRecognizer::new();
        let _ = rot.on_sample(&two(TouchPhase::PointerDown, (0.0, 0.0), (100.0, 0.0)));
        let signal = rot.on_sample(&two(TouchPhase::Move, (0.0, 0.0), (100.0, 0.0)));
        assert_eq!(signal, Some(RotationSignal::Rotated(0.0)));
    }

    #[test]
    fn test_single_pointer_ignored() {
        let mut rot = RotationRecognizer::new();
        let sample = TouchSample::new(TouchPhase::Move, vec![Pointer::new(0, 1.0, 2.0)]);
        assert_eq!(rot.on_sample(&sample), None);
    }
}
