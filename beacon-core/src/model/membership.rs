/// Room membership declared by a connection's `join-room` event.
///
/// `user_id` is a client-chosen label, not an identity the relay verifies.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Membership {
    pub user_id: String,
    pub room_id: String,
}

impl Membership {
    pub fn new(user_id: impl Into<String>, room_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            room_id: room_id.into(),
        }
    }
}
