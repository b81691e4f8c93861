//! # Tabuleiro Input Core
//!
//! Translates raw multi-pointer touch samples, key state, and orientation
//! sensor samples into a clean, de-duplicated, ordered stream of semantic
//! events for the render-tick consumer.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     INPUT PIPELINE                           │
//! ├──────────────────────────────────────────────────────────────┤
//! │  Touch Samples → Router → Recognizers → EventQueue → Drain   │
//! │       ↓             ↓          ↓            ↓          ↓     │
//! │   Rescale      PointerState  Signals     Append      De-dup  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Two threads touch this crate: the input producer (platform callbacks)
//! drives the router, the render consumer drains the queue once per tick.
//! The queue is the only shared mutable state.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod dedup;
pub mod queue;
pub mod recognizer;
pub mod router;
pub mod sample;
pub mod state;
pub mod tilt;

pub use queue::EventQueue;
pub use router::{GestureEventRouter, RouterConfig};
pub use sample::{Pointer, TouchPhase, TouchSample};
pub use state::PointerState;
pub use tilt::{Orientation, TiltFilter};
