pub mod config;
pub mod http;
pub mod registry;
pub mod signaling;

pub use config::RelayConfig;
pub use http::AppState;
pub use registry::{MembershipRegistry, RoomIndex};
pub use signaling::{EventSink, Outbox, SignalingRouter, SignalingService, WebSocketSink};
