//! # Tabuleiro Client Integration
//!
//! Everything between the input core and the platform adapter:
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                      CLIENT SESSION                           │
//! ├───────────────────────────────────────────────────────────────┤
//! │ Platform callbacks → Session → GestureEventRouter → Queue     │
//! │                         │                             │       │
//! │                    TickDriver ──── drain ─────────────┘       │
//! │                         │                                     │
//! │                    replay_batch → EngineSink (native engine)  │
//! │                                                               │
//! │ Engine ⇄ DialogBroker/DialogSurface ⇄ UI layer                │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! The crate never touches windowing or sensors itself; the platform
//! adapter feeds the [`session::Session`] and implements
//! [`engine::EngineSink`] on its engine binding.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod dialog;
pub mod engine;
pub mod error;
pub mod replay;
pub mod session;
pub mod tick;

pub use config::{ClientConfig, Resolution};
pub use dialog::{dialog_channel, DialogBroker, DialogSurface};
pub use engine::{EngineSink, RecordingSink, SinkCall};
pub use error::{ClientError, ClientResult};
pub use session::Session;
pub use tick::{RenderTick, TickDriver};
