//! Two-finger pinch recognizer.
//!
//! Tracks the span between the two contacts and reports the ratio of the
//! current span to the previous one. A factor above 1.0 means the fingers
//! spread apart (zoom in), below 1.0 means pinched together.

use crate::sample::{TouchPhase, TouchSample};

/// Minimum span in pixels; below this the ratio is numerically useless.
const MIN_SPAN: f32 = 1.0;

/// Span-ratio state machine for two-finger samples.
#[derive(Debug, Default)]
pub struct ScaleRecognizer {
    last_span: Option<f32>,
}

impl ScaleRecognizer {
    /// Creates an inactive recognizer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds a sample, returning the scale factor since the previous one.
    ///
    /// Samples without exactly two pointers, baseline samples, degenerate
    /// spans, and unchanged spans all return `None`.
    pub fn on_sample(&mut self, sample: &TouchSample) -> Option<f32> {
        if sample.pointer_count() != 2 {
            return None;
        }
        let (a, b) = (&sample.pointers[0], &sample.pointers[1]);
        let span = ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt();
        if span < MIN_SPAN {
            return None;
        }

        if sample.phase == TouchPhase::PointerDown || self.last_span.is_none() {
            self.last_span = Some(span);
            return None;
        }

        let last = self.last_span.replace(span).unwrap_or(span);
        let factor = span / last;
        ((factor - 1.0).abs() > f32::EPSILON).then_some(factor)
    }

    /// Forgets the gesture baseline.
    pub fn reset(&mut self) {
        self.last_span = None;
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
    fn test_spread_scales_up() {
        let mut scale = ScaleRecognizer::new();
        assert_eq!(
            scale.on_sample(&two(TouchPhase::PointerDown, (0.0, 0.0), (100.0, 0.0))),
            None
        );
        let factor = scale
            .on_sample(&two(TouchPhase::Move, (0.0, 0.0), (120.0, 0.0)))
            .expect("span changed");
        assert!((factor - 1.2).abs() < 1e-5);
    }

    #[test]
    fn test_pinch_scales_down() {
        let mut scale = ScaleRecognizer::new();
        let _ = scale.on_sample(&two(TouchPhase::PointerDown, (0.0, 0.0), (100.0, 0.0)));
        let factor = scale
            .on_sample(&two(TouchPhase::Move, (0.0, 0.0), (50.0, 0.0)))
            .expect("span changed");
        assert!((factor - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_unchanged_span_is_silent() {
        let mut scale = ScaleRecognizer::new();
        let _ = scale.on_sample(&two(TouchPhase::PointerDown, (0.0, 0.0), (100.0, 0.0)));
        assert_eq!(
            scale.on_sample(&two(TouchPhase::Move, (0.0, 0.0), (100.0, 0.0))),
            None
        );
    }

    #[test]
    fn test_degenerate_span_ignored() {
        let mut scale = ScaleRecognizer::new();
        assert_eq!(
            scale.on_sample(&two(TouchPhase::Move, (10.0, 10.0), (10.0, 10.0))),
            None
        );
    }
}
