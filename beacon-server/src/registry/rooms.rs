use std::collections::{HashMap, HashSet};

use beacon_core::ConnectionId;

/// Reverse index room -> member connections, derived from the membership
/// registry and kept consistent with it on every mutation.
///
/// Rooms are created implicitly on first join and evicted once empty.
#[derive(Debug, Default)]
pub struct RoomIndex {
    rooms: HashMap<String, HashSet<ConnectionId>>,
}

impl RoomIndex {
    pub fn new() -> Self {
        Self {
            rooms: HashMap::new(),
        }
    }

    pub fn join(&mut self, room_id: &str, connection_id: ConnectionId) {
        self.rooms
            .entry(room_id.to_string())
            .or_default()
            .insert(connection_id);
    }

    pub fn leave(&mut self, room_id: &str, connection_id: ConnectionId) {
        if let Some(members) = self.rooms.get_mut(room_id) {
            members.remove(&connection_id);
            if members.is_empty() {
                self.rooms.remove(room_id);
            }
        }
    }

    /// All current members of the room other than `excluded`, in
    /// unspecified order. Unknown rooms yield an empty list.
    pub fn members_except(&self, room_id: &str, excluded: ConnectionId) -> Vec<ConnectionId> {
        match self.rooms.get(room_id) {
            Some(members) => members
                .iter()
                .copied()
                .filter(|id| *id != excluded)
                .collect(),
            None => Vec::new(),
        }
    }
}
