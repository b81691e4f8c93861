//! Raw touch samples as delivered by the platform input layer.
//!
//! The sample sequence for a multi-finger gesture is:
//! first contact `Down`, second and third contacts `PointerDown`,
//! secondary lifts `PointerUp`, last lift `Up`. `PointerUp`/`Up` samples
//! still include the lifting pointer in the pointer set, matching the
//! platform convention.

/// Phase of a touch sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    /// First pointer made contact.
    Down,
    /// A secondary pointer made contact.
    PointerDown,
    /// One or more pointers moved.
    Move,
    /// A secondary pointer lifted.
    PointerUp,
    /// The last pointer lifted.
    Up,
}

impl TouchPhase {
    /// Returns true for `Up` and `PointerUp`.
    #[must_use]
    pub const fn is_release(self) -> bool {
        matches!(self, Self::Up | Self::PointerUp)
    }

    /// Returns true for `Down` and `PointerDown`.
    #[must_use]
    pub const fn is_press(self) -> bool {
        matches!(self, Self::Down | Self::PointerDown)
    }
}

/// One active touch contact.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    /// Stable id for the lifetime of the contact.
    pub id: u32,
    /// Raw screen x, top-left origin.
    pub x: f32,
    /// Raw screen y, top-left origin.
    pub y: f32,
    /// Contact pressure, 0.0 to 1.0.
    pub pressure: f32,
}

impl Pointer {
    /// Creates a pointer with neutral pressure.
    #[must_use]
    pub const fn new(id: u32, x: f32, y: f32) -> Self {
        Self { id, x, y, pressure: 1.0 }
    }
}

/// One raw touch sample: a phase plus the current set of active pointers.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchSample {
    /// What happened in this sample.
    pub phase: TouchPhase,
    /// All active pointers, including the lifting one on release phases.
    pub pointers: Vec<Pointer>,
}

impl TouchSample {
    /// Creates a sample.
    #[must_use]
    pub fn new(phase: TouchPhase, pointers: Vec<Pointer>) -> Self {
        Self { phase, pointers }
    }

    /// Number of active pointers in this sample.
    #[must_use]
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// Averaged position of all pointers.
    ///
    /// Returns `(0.0, 0.0)` for an empty sample; callers never build those.
    #[must_use]
    pub fn centroid(&self) -> (f32, f32) {
        if self.pointers.is_empty() {
            return (0.0, 0.0);
        }
        let n = self.pointers.len() as f32;
        let sum = self
            .pointers
            .iter()
            .fold((0.0f32, 0.0f32), |acc, p| (acc.0 + p.x, acc.1 + p.y));
        (sum.0 / n, sum.1 / n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_classification() {
        assert!(TouchPhase::Up.is_release());
        assert!(TouchPhase::PointerUp.is_release());
        assert!(!TouchPhase::Move.is_release());
        assert!(TouchPhase::Down.is_press());
        assert!(TouchPhase::PointerDown.is_press());
        assert!(!TouchPhase::Up.is_press());
    }

    #[test]
    fn test_centroid() {
        let sample = TouchSample::new(
            TouchPhase::Move,
            vec![Pointer::new(0, 100.0, 200.0), Pointer::new(1, 200.0, 400.0)],
        );
        assert_eq!(sample.centroid(), (150.0, 300.0));
    }
}
