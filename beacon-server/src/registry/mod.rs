mod membership;
mod rooms;

pub use membership::MembershipRegistry;
pub use rooms::RoomIndex;
