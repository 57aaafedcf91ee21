mod router;
mod service;
mod ws_handler;

pub use router::{Outbox, SignalingRouter};
pub use service::{EventSink, SignalingService, WebSocketSink};
pub use ws_handler::ws_handler;
