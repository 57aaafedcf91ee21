use beacon_core::{ClientEvent, ConnectionId, Membership, ServerEvent};
use chrono::{SecondsFormat, Utc};
use tracing::info;

use crate::registry::{MembershipRegistry, RoomIndex};

/// Outbound events addressed to specific connections, produced by one
/// router call and delivered by the transport afterwards.
pub type Outbox = Vec<(ConnectionId, ServerEvent)>;

/// The protocol state machine: owns the membership registry and the room
/// index, consumes decoded client events, and emits addressed server
/// events. Purely synchronous; the service above it provides locking and
/// delivery.
pub struct SignalingRouter {
    registry: MembershipRegistry,
    rooms: RoomIndex,
}

impl SignalingRouter {
    pub fn new() -> Self {
        Self {
            registry: MembershipRegistry::new(),
            rooms: RoomIndex::new(),
        }
    }

    pub fn handle_event(&mut self, sender: ConnectionId, event: ClientEvent) -> Outbox {
        match event {
            ClientEvent::JoinRoom { room_id, user_id } => self.handle_join(sender, room_id, user_id),
            ClientEvent::Offer {
                room_id,
                user_id,
                offer,
            } => self.relay(sender, &room_id, ServerEvent::Offer { offer, user_id }),
            ClientEvent::Answer {
                room_id,
                user_id,
                answer,
            } => self.relay(sender, &room_id, ServerEvent::Answer { answer, user_id }),
            ClientEvent::IceCandidate {
                room_id,
                user_id,
                candidate,
            } => self.relay(
                sender,
                &room_id,
                ServerEvent::IceCandidate { candidate, user_id },
            ),
            ClientEvent::ChatMessage {
                room_id,
                user_id,
                message,
            } => {
                // One timestamp per broadcast, assigned here so every
                // recipient sees the same relay-authoritative instant.
                let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
                self.relay(
                    sender,
                    &room_id,
                    ServerEvent::ChatMessage {
                        message,
                        user_id,
                        timestamp,
                    },
                )
            }
        }
    }

    /// Transport disconnect. Removes the connection from both structures
    /// and notifies its room, if it ever joined one. Idempotent: a second
    /// call finds no record and emits nothing.
    pub fn handle_disconnect(&mut self, sender: ConnectionId) -> Outbox {
        let Some(membership) = self.registry.remove(sender) else {
            return Vec::new();
        };
        self.rooms.leave(&membership.room_id, sender);

        info!(
            "User {} disconnected from room {}",
            membership.user_id, membership.room_id
        );

        self.rooms
            .members_except(&membership.room_id, sender)
            .into_iter()
            .map(|id| {
                (
                    id,
                    ServerEvent::UserDisconnected {
                        user_id: membership.user_id.clone(),
                    },
                )
            })
            .collect()
    }

    fn handle_join(&mut self, sender: ConnectionId, room_id: String, user_id: String) -> Outbox {
        // A join to a different room replaces the previous membership; the
        // old room is left silently, with no user-disconnected broadcast.
        if let Some(previous) = self.registry.get(sender) {
            if previous.room_id != room_id {
                self.rooms.leave(&previous.room_id, sender);
            }
        }

        info!("User {} joined room {}", user_id, room_id);

        self.registry
            .put(sender, Membership::new(user_id.clone(), room_id.clone()));
        self.rooms.join(&room_id, sender);

        self.rooms
            .members_except(&room_id, sender)
            .into_iter()
            .map(|id| {
                (
                    id,
                    ServerEvent::UserConnected {
                        user_id: user_id.clone(),
                    },
                )
            })
            .collect()
    }

    /// Broadcast-except-self with the sender's declared identity attached.
    /// No membership check: any room id can be targeted, and a room with
    /// no members yields an empty outbox.
    fn relay(&self, sender: ConnectionId, room_id: &str, event: ServerEvent) -> Outbox {
        self.rooms
            .members_except(room_id, sender)
            .into_iter()
            .map(|id| (id, event.clone()))
            .collect()
    }
}

impl Default for SignalingRouter {
    fn default() -> Self {
        Self::new()
    }
}
