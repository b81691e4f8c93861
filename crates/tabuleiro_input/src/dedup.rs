//! Drain-time de-duplication of high-frequency event runs.
//!
//! A drag produces a move event per input sample — far more than the engine
//! needs per 33 ms tick. Collapsing a run down to its last value bounds the
//! per-tick event volume while guaranteeing the final position and the
//! release boundary are never lost.

use tabuleiro_shared::events::{EventKind, InputEvent};

/// Collapses runs of `kind` within `events`, in place.
///
/// Every event of `kind` supersedes the previous one until a `Released`
/// arrives; the survivor is emitted just before the `Released`. A run still
/// open at the end of the batch keeps only its last event.
pub fn collapse_runs(kind: EventKind, events: &mut Vec<InputEvent>) {
    let mut collapsed = Vec::with_capacity(events.len());
    let mut held: Option<InputEvent> = None;
    for event in events.drain(..) {
        if event.kind() == kind {
            held = Some(event);
        } else if event.kind() == EventKind::Released {
            if let Some(last) = held.take() {
                collapsed.push(last);
            }
            collapsed.push(event);
        } else {
            collapsed.push(event);
        }
    }
    if let Some(last) = held {
        collapsed.push(last);
    }
    *events = collapsed;
}
