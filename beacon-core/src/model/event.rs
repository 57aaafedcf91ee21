use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Events a client sends to the relay.
///
/// Negotiation payloads (`offer`, `answer`, `candidate`) are opaque JSON:
/// the relay forwards them verbatim and never inspects their contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "op",
    content = "d",
    rename_all = "kebab-case",
    rename_all_fields = "camelCase"
)]
pub enum ClientEvent {
    JoinRoom {
        room_id: String,
        user_id: String,
    },
    Offer {
        room_id: String,
        user_id: String,
        offer: Value,
    },
    Answer {
        room_id: String,
        user_id: String,
        answer: Value,
    },
    IceCandidate {
        room_id: String,
        user_id: String,
        candidate: Value,
    },
    ChatMessage {
        room_id: String,
        user_id: String,
        message: String,
    },
}

impl ClientEvent {
    /// Room the event targets. Every client event carries one explicitly.
    pub fn room_id(&self) -> &str {
        match self {
            Self::JoinRoom { room_id, .. }
            | Self::Offer { room_id, .. }
            | Self::Answer { room_id, .. }
            | Self::IceCandidate { room_id, .. }
            | Self::ChatMessage { room_id, .. } => room_id,
        }
    }

    /// Sender label declared in the event, not looked up from any registry.
    pub fn user_id(&self) -> &str {
        match self {
            Self::JoinRoom { user_id, .. }
            | Self::Offer { user_id, .. }
            | Self::Answer { user_id, .. }
            | Self::IceCandidate { user_id, .. }
            | Self::ChatMessage { user_id, .. } => user_id,
        }
    }
}

/// Events the relay pushes to room members. Relayed negotiation events
/// carry the sender's declared `userId` but not the room id; the chat
/// timestamp is assigned by the relay at dispatch time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "op",
    content = "d",
    rename_all = "kebab-case",
    rename_all_fields = "camelCase"
)]
pub enum ServerEvent {
    UserConnected {
        user_id: String,
    },
    Offer {
        offer: Value,
        user_id: String,
    },
    Answer {
        answer: Value,
        user_id: String,
    },
    IceCandidate {
        candidate: Value,
        user_id: String,
    },
    ChatMessage {
        message: String,
        user_id: String,
        timestamp: String,
    },
    UserDisconnected {
        user_id: String,
    },
}
