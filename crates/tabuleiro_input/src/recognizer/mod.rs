//! Gesture recognizers.
//!
//! Each recognizer is a small, independent state machine consuming the
//! samples the router forwards to it and emitting discrete signals. The
//! router subscribes to all of them and merges their output into the event
//! queue; recognizers never touch the queue themselves.

pub mod rotation;
pub mod scale;
pub mod tap;
pub mod translation;

pub use rotation::{RotationRecognizer, RotationSignal};
pub use scale::ScaleRecognizer;
pub use tap::{TapRecognizer, TapSignal};
pub use translation::{TranslationRecognizer, TranslationSignal};
