mod connection;
mod event;
mod membership;

pub use connection::ConnectionId;
pub use event::{ClientEvent, ServerEvent};
pub use membership::Membership;
