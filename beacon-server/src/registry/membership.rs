use std::collections::HashMap;

use beacon_core::{ConnectionId, Membership};

/// Authoritative connection -> `(userId, roomId)` map.
///
/// A record exists iff the connection has joined a room and has not yet
/// disconnected. At most one record per connection.
#[derive(Debug, Default)]
pub struct MembershipRegistry {
    records: HashMap<ConnectionId, Membership>,
}

impl MembershipRegistry {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    /// Inserts or overwrites the membership record for a connection.
    pub fn put(&mut self, connection_id: ConnectionId, membership: Membership) {
        self.records.insert(connection_id, membership);
    }

    /// Absence is normal for connections that never joined.
    pub fn get(&self, connection_id: ConnectionId) -> Option<&Membership> {
        self.records.get(&connection_id)
    }

    /// Removes and returns the record, if any. Safe to call twice.
    pub fn remove(&mut self, connection_id: ConnectionId) -> Option<Membership> {
        self.records.remove(&connection_id)
    }
}
