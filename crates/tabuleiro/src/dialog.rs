//! Typed dialog channel between the engine side and the UI layer.
//!
//! ```text
//! ┌─────────────┐  DialogRequest   ┌─────────────┐
//! │   Engine    │─────────────────>│   UI layer  │
//! │  (broker)   │<─────────────────│  (surface)  │
//! └─────────────┘  DialogResponse  └─────────────┘
//! ```
//!
//! The broker allocates correlation ids; the surface renders whatever
//! arrives and answers with the matching id. Neither side blocks the render
//! tick: both ends poll with `try_*` from their own loops.

use std::sync::atomic::{AtomicU64, Ordering};

use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};
use tabuleiro_shared::protocol::{DialogRequest, DialogResponse, RequestId};

use crate::error::{ClientError, ClientResult};

/// Engine-side endpoint: sends requests, collects responses.
#[derive(Debug)]
pub struct DialogBroker {
    next_id: AtomicU64,
    requests: Sender<DialogRequest>,
    responses: Receiver<DialogResponse>,
}

/// UI-side endpoint: receives requests, sends responses back.
#[derive(Debug)]
pub struct DialogSurface {
    requests: Receiver<DialogRequest>,
    responses: Sender<DialogResponse>,
}

/// Creates a connected broker/surface pair.
#[must_use]
pub fn dialog_channel() -> (DialogBroker, DialogSurface) {
    let (request_tx, request_rx) = unbounded();
    let (response_tx, response_rx) = unbounded();
    (
        DialogBroker {
            next_id: AtomicU64::new(1),
            requests: request_tx,
            responses: response_rx,
        },
        DialogSurface {
            requests: request_rx,
            responses: response_tx,
        },
    )
}

impl DialogBroker {
    /// Allocates a fresh correlation id.
    pub fn next_id(&self) -> RequestId {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Sends a request to the UI layer.
    pub fn send(&self, request: DialogRequest) -> ClientResult<()> {
        tracing::debug!(id = request.id(), "dialog request");
        self.requests
            .send(request)
            .map_err(|_| ClientError::DialogDisconnected)
    }

    /// Returns the next response if one has arrived.
    pub fn try_response(&self) -> ClientResult<Option<DialogResponse>> {
        match self.responses.try_recv() {
            Ok(response) => Ok(Some(response)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(ClientError::DialogDisconnected),
        }
    }

    /// Blocks until a response arrives. Never call from the tick thread.
    pub fn wait_response(&self) -> ClientResult<DialogResponse> {
        self.responses
            .recv()
            .map_err(|_| ClientError::DialogDisconnected)
    }
}

impl DialogSurface {
    /// Returns the next request if one is pending.
    pub fn try_request(&self) -> ClientResult<Option<DialogRequest>> {
        match self.requests.try_recv() {
            Ok(request) => Ok(Some(request)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(ClientError::DialogDisconnected),
        }
    }

    /// Blocks until a request arrives.
    pub fn next_request(&self) -> ClientResult<DialogRequest> {
        self.requests
            .recv()
            .map_err(|_| ClientError::DialogDisconnected)
    }

    /// Sends a response back to the engine side.
    pub fn respond(&self, response: DialogResponse) -> ClientResult<()> {
        self.responses
            .send(response)
            .map_err(|_| ClientError::DialogDisconnected)
    }
}
