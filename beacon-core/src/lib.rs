pub mod model;
pub mod protocol;

pub use model::{ClientEvent, ConnectionId, Membership, ServerEvent};
pub use protocol::{ProtocolError, decode_client_event, encode_server_event};
