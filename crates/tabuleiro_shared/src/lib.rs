//! # Tabuleiro Shared Types
//!
//! Platform-independent types shared between the input-producer side and the
//! render-consumer side of the Tabuleiro client:
//!
//! - Semantic input events ([`InputEvent`]) and their discriminator
//!   ([`EventKind`])
//! - Key codes and modifier bitmasks in the encoding the engine expects
//! - The typed engine/dialog protocol that replaces the old opaque
//!   pointer-handle boundary
//!
//! The CLIENT uses these to queue and replay gestures.
//! The ENGINE boundary uses them as its call vocabulary.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod constants;
pub mod events;
pub mod keys;
pub mod protocol;

pub use constants::{DEFAULT_TICK_INTERVAL_MS, FIXED_LOGICAL_HEIGHT, FIXED_LOGICAL_WIDTH};
pub use events::{EventKind, InputEvent};
pub use keys::{Key, MetaKeys, NO_KEY_MAPPING};
pub use protocol::{DialogRequest, DialogResponse, EntityPayload};
