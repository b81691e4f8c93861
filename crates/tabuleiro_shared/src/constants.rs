//! # Client Constants
//!
//! Timing and surface configuration for the Tabuleiro client.
//!
//! **NOTE:** The tick interval must match what the engine reports as its
//! notification period; 33 ms is the engine default.

/// Default interval between render ticks, in milliseconds (~30 Hz).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 33;

/// Logical width used when the client pins a fixed render resolution.
pub const FIXED_LOGICAL_WIDTH: u32 = 1024;

/// Logical height used when the client pins a fixed render resolution.
pub const FIXED_LOGICAL_HEIGHT: u32 = 768;

/// Default tap slop in pixels: movement beyond this turns a press into a drag.
pub const DEFAULT_TAP_SLOP_PX: f32 = 16.0;

/// Default window for double-tap detection, in milliseconds.
pub const DEFAULT_DOUBLE_TAP_WINDOW_MS: u64 = 300;
