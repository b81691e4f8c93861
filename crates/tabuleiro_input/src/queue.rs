//! Ordered event queue between the input producer and the render consumer.
//!
//! The producer appends at callback time; the consumer drains once per render
//! tick. The two operations are mutually exclusive behind one coarse lock —
//! contention is brief (tens of events per tick at most) and the drain takes
//! a prefix-consistent snapshot, so ordering across the full session is
//! preserved even when the consumer runs late.

use parking_lot::Mutex;
use tabuleiro_shared::events::{EventKind, InputEvent};

use crate::dedup::collapse_runs;

/// Append-only buffer of semantic events, drained and cleared atomically.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Mutex<Vec<InputEvent>>,
}

impl EventQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one event. O(1) amortized; never blocks on the consumer for
    /// longer than the swap-and-clear below.
    pub fn push(&self, event: InputEvent) {
        self.events.lock().push(event);
    }

    /// Number of events currently buffered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// True if nothing is buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Returns every buffered event in order and clears the queue.
    ///
    /// Concurrent appends land either in this batch or the next one, never
    /// in both and never in neither.
    #[must_use]
    pub fn drain(&self) -> Vec<InputEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    /// Drains the queue and collapses high-frequency runs.
    ///
    /// Consecutive `Move` events (and separately `Hover` events) are reduced
    /// to the most recent of the run; a `Released` terminating a run is kept
    /// right after the surviving event. This is what the render tick calls.
    #[must_use]
    pub fn drain_deduplicated(&self) -> Vec<InputEvent> {
        let mut batch = self.drain();
        collapse_runs(EventKind::Move, &mut batch);
        collapse_runs(EventKind::Hover, &mut batch);
        batch
    }
}
