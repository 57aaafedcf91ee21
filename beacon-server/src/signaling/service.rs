use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::extract::ws::Message;
use beacon_core::{ClientEvent, ConnectionId, ServerEvent, encode_server_event};
use dashmap::DashMap;
use tokio::sync::mpsc;
use tracing::{debug, error, warn};

use crate::signaling::SignalingRouter;

/// Delivery seam between the router and the transport. The production
/// implementation pushes frames onto per-connection WebSocket queues;
/// tests substitute a capturing implementation.
#[async_trait]
pub trait EventSink: Send + Sync {
    async fn deliver(&self, target: ConnectionId, event: ServerEvent);
}

/// Production [`EventSink`]: a map of live connections to their outbound
/// queues. Delivery is fire-and-forget per recipient; a vanished or
/// closed recipient is logged and skipped, never failing the others.
#[derive(Clone, Default)]
pub struct WebSocketSink {
    connections: Arc<DashMap<ConnectionId, mpsc::UnboundedSender<Message>>>,
}

impl WebSocketSink {
    pub fn new() -> Self {
        Self {
            connections: Arc::new(DashMap::new()),
        }
    }

    pub fn register(&self, connection_id: ConnectionId, tx: mpsc::UnboundedSender<Message>) {
        self.connections.insert(connection_id, tx);
    }

    pub fn unregister(&self, connection_id: ConnectionId) {
        self.connections.remove(&connection_id);
    }
}

#[async_trait]
impl EventSink for WebSocketSink {
    async fn deliver(&self, target: ConnectionId, event: ServerEvent) {
        if let Some(tx) = self.connections.get(&target) {
            match encode_server_event(&event) {
                Ok(json) => {
                    if tx.send(Message::Text(json.into())).is_err() {
                        error!("Failed to queue event for {}", target);
                    } else {
                        debug!("Queued frame for {}", target);
                    }
                }
                Err(e) => error!("Failed to serialize server event: {}", e),
            }
        } else {
            warn!("Dropping event for vanished connection {}", target);
        }
    }
}

struct ServiceInner {
    router: Mutex<SignalingRouter>,
    sink: Arc<dyn EventSink>,
}

/// Owns the router behind a single lock and forwards its outbox through
/// the sink. Each call collects the outbox atomically with the router
/// mutation, then delivers outside the lock.
#[derive(Clone)]
pub struct SignalingService {
    inner: Arc<ServiceInner>,
}

impl SignalingService {
    pub fn new(sink: Arc<dyn EventSink>) -> Self {
        Self {
            inner: Arc::new(ServiceInner {
                router: Mutex::new(SignalingRouter::new()),
                sink,
            }),
        }
    }

    pub async fn handle_event(&self, sender: ConnectionId, event: ClientEvent) {
        debug!(
            "Routing event from {} (user {}, room {})",
            sender,
            event.user_id(),
            event.room_id()
        );
        let outbox = {
            let mut router = self.inner.router.lock().unwrap();
            router.handle_event(sender, event)
        };
        self.dispatch(outbox).await;
    }

    /// Runs disconnect cleanup for a connection. The registry and index
    /// entries are gone before any notification leaves the router, and a
    /// second call delivers nothing.
    pub async fn handle_disconnect(&self, connection_id: ConnectionId) {
        let outbox = {
            let mut router = self.inner.router.lock().unwrap();
            router.handle_disconnect(connection_id)
        };
        self.dispatch(outbox).await;
    }

    async fn dispatch(&self, outbox: Vec<(ConnectionId, ServerEvent)>) {
        for (target, event) in outbox {
            self.inner.sink.deliver(target, event).await;
        }
    }
}
