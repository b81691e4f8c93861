//! Typed dialog protocol between the engine and the UI layer.
//!
//! The engine used to hand opaque pointer-sized handles back through the
//! dialog callbacks; here the boundary is a typed request carrying its own
//! correlation id, answered by exactly one typed response. The UI layer is a
//! pass-through: it renders the request and sends back whatever the user
//! chose, without interpreting the payload.

use serde::{Deserialize, Serialize};

/// Correlation id tying a [`DialogResponse`] to its [`DialogRequest`].
pub type RequestId = u64;

/// Entity properties shown in the entity editor dialog.
///
/// The engine owns the full entity model; only the editable subset crosses
/// this boundary.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityPayload {
    /// Entity id in the engine's model.
    pub id: u64,
    /// Maximum hit points.
    pub max_hit_points: i32,
    /// Current hit points.
    pub hit_points: i32,
    /// Vision type index (engine enum).
    pub vision_type: i32,
    /// Dark vision range in meters.
    pub vision_range_m: f32,
    /// Light radius in meters, if the entity emits light.
    pub light_radius_m: Option<f32>,
    /// Free-form event annotations, one per line.
    pub events: String,
}

/// Dialog requests the engine sends upward to the UI layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DialogRequest {
    /// Plain message box.
    Message {
        /// Correlation id.
        id: RequestId,
        /// Whether this is an error (affects the dialog title only).
        error: bool,
        /// Message body.
        text: String,
    },
    /// Ask for a name to save the current board under.
    SaveBoard {
        /// Correlation id.
        id: RequestId,
    },
    /// Ask which board to open.
    OpenBoard {
        /// Correlation id.
        id: RequestId,
        /// Boards shipped with the client.
        static_boards: Vec<String>,
        /// Boards saved by the user.
        saved_boards: Vec<String>,
    },
    /// Ask the user to pick one item from a list.
    ChooseItem {
        /// Correlation id.
        id: RequestId,
        /// Items to choose from.
        items: Vec<String>,
    },
    /// Open the entity property editor.
    EditEntity {
        /// Correlation id.
        id: RequestId,
        /// Editable entity properties.
        entity: EntityPayload,
    },
}

impl DialogRequest {
    /// Returns the correlation id of this request.
    #[must_use]
    pub const fn id(&self) -> RequestId {
        match self {
            Self::Message { id, .. }
            | Self::SaveBoard { id }
            | Self::OpenBoard { id, .. }
            | Self::ChooseItem { id, .. }
            | Self::EditEntity { id, .. } => *id,
        }
    }
}

/// Dialog responses the UI layer sends back down to the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DialogResponse {
    /// Message box acknowledged.
    Acknowledged {
        /// Correlation id.
        id: RequestId,
    },
    /// Board name chosen for saving; empty string means cancelled.
    BoardName {
        /// Correlation id.
        id: RequestId,
        /// Chosen name, empty on cancel.
        name: String,
    },
    /// Board chosen for opening.
    BoardChoice {
        /// Correlation id.
        id: RequestId,
        /// Chosen name, empty on cancel.
        name: String,
        /// True if the choice came from the static list.
        is_static: bool,
    },
    /// Item chosen from a list, `None` on cancel.
    ItemChoice {
        /// Correlation id.
        id: RequestId,
        /// Index into the request's item list.
        index: Option<usize>,
    },
    /// Edited entity, `None` on cancel.
    EntityUpdate {
        /// Correlation id.
        id: RequestId,
        /// Updated properties.
        entity: Option<EntityPayload>,
    },
}

impl DialogResponse {
    /// Returns the correlation id of this response.
    #[must_use]
    pub const fn id(&self) -> RequestId {
        match self {
            Self::Acknowledged { id }
            | Self::BoardName { id, .. }
            | Self::BoardChoice { id, .. }
            | Self::ItemChoice { id, .. }
            | Self::EntityUpdate { id, .. } => *id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_extraction() {
        let req = DialogRequest::OpenBoard {
            id: 7,
            static_boards: vec!["castle".into()],
            saved_boards: vec![],
        };
        assert_eq!(req.id(), 7);
    }

    #[test]
    fn test_response_id_extraction() {
        let resp = DialogResponse::ItemChoice { id: 9, index: None };
        assert_eq!(resp.id(), 9);
    }
}
