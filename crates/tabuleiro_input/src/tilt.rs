//! Orientation sensor filtering for tilt gestures.
//!
//! Tilt is a two-finger gesture: the router enables this filter only while
//! exactly two pointers are down. Which axis of the 3-axis sample carries
//! the tilt depends on how the device is currently held relative to its
//! natural orientation, and the sign is inverted before emission to match
//! the engine's camera convention.

/// Device orientation, current or natural.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Held upright.
    Portrait,
    /// Held sideways.
    Landscape,
}

/// Gated axis selector for orientation sensor samples.
#[derive(Clone, Copy, Debug)]
pub struct TiltFilter {
    natural: Orientation,
    current: Orientation,
    enabled: bool,
}

impl TiltFilter {
    /// Creates a disabled filter for a device with the given natural
    /// orientation.
    #[must_use]
    pub const fn new(natural: Orientation) -> Self {
        Self {
            natural,
            current: natural,
            enabled: false,
        }
    }

    /// Enables or disables tilt intake. The router flips this on every touch
    /// sample so the filter only passes samples while two fingers are down.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// True while the filter passes samples.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Updates the current device orientation.
    pub fn set_orientation(&mut self, current: Orientation) {
        self.current = current;
    }

    /// Translates a 3-axis sensor sample into a tilt delta.
    ///
    /// Returns `None` while disabled. The axis read depends on the current
    /// orientation relative to the natural one; the sign is inverted before
    /// emission.
    #[must_use]
    pub fn sample(&self, values: [f32; 3]) -> Option<f32> {
        if !self.enabled {
            return None;
        }
        let value = match (self.natural, self.current) {
            (Orientation::Landscape, Orientation::Landscape)
            | (Orientation::Portrait, Orientation::Portrait) => values[0],
            (Orientation::Landscape, Orientation::Portrait) => values[1],
            (Orientation::Portrait, Orientation::Landscape) => -values[1],
        };
        Some(-value)
    }
}
