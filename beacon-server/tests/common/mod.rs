//! Shared helpers for relay integration tests.
//!
//! Each test spins up a real relay on an ephemeral port and talks to it
//! over genuine WebSocket connections.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use futures::{SinkExt, StreamExt};
use serde_json::{Value, json};
use tokio::net::{TcpListener, TcpStream};
use tokio::time::timeout;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tracing::Level;

use beacon_server::config::RelayConfig;
use beacon_server::http::{self, AppState};
use beacon_server::signaling::{SignalingService, WebSocketSink};

pub type WsClient = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Timeout for messages the test expects to arrive (ms).
pub const RECV_TIMEOUT_MS: u64 = 3000;

/// Quiet window used to assert that no message arrives (ms).
pub const SILENCE_WINDOW_MS: u64 = 300;

#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Starts a relay on 127.0.0.1:0 and returns its WebSocket URL.
#[allow(dead_code)]
pub async fn spawn_relay() -> String {
    let sink = WebSocketSink::new();
    let service = SignalingService::new(Arc::new(sink.clone()));
    let state = Arc::new(AppState {
        service,
        sink,
        config: RelayConfig::default(),
    });
    let app = http::router(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no local addr");

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    format!("ws://{}/ws", addr)
}

#[allow(dead_code)]
pub async fn connect(url: &str) -> WsClient {
    let (ws, _) = connect_async(url).await.expect("Failed to connect");
    ws
}

/// Gives the relay a beat to process frames that produce no reply.
#[allow(dead_code)]
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(100)).await;
}

#[allow(dead_code)]
pub async fn send_event(ws: &mut WsClient, frame: &Value) {
    ws.send(Message::text(frame.to_string()))
        .await
        .expect("Failed to send frame");
}

/// Receives the next text frame as JSON, skipping ping/pong noise.
#[allow(dead_code)]
pub async fn recv_event(ws: &mut WsClient) -> Result<Value> {
    loop {
        let msg = timeout(Duration::from_millis(RECV_TIMEOUT_MS), ws.next())
            .await
            .context("Timeout waiting for message")?
            .context("Stream ended")?
            .context("WebSocket error")?;

        match msg {
            Message::Text(text) => {
                return serde_json::from_str(text.as_str()).context("Invalid JSON frame");
            }
            Message::Ping(_) | Message::Pong(_) => continue,
            other => anyhow::bail!("Expected text frame, got {:?}", other),
        }
    }
}

/// Returns a frame only if one arrives within the quiet window.
#[allow(dead_code)]
pub async fn try_recv_event(ws: &mut WsClient) -> Option<Value> {
    match timeout(Duration::from_millis(SILENCE_WINDOW_MS), ws.next()).await {
        Ok(Some(Ok(Message::Text(text)))) => serde_json::from_str(text.as_str()).ok(),
        _ => None,
    }
}

#[allow(dead_code)]
pub fn join_room(room_id: &str, user_id: &str) -> Value {
    json!({"op": "join-room", "d": {"roomId": room_id, "userId": user_id}})
}

#[allow(dead_code)]
pub fn offer(room_id: &str, user_id: &str, payload: &Value) -> Value {
    json!({"op": "offer", "d": {"roomId": room_id, "userId": user_id, "offer": payload}})
}

#[allow(dead_code)]
pub fn answer(room_id: &str, user_id: &str, payload: &Value) -> Value {
    json!({"op": "answer", "d": {"roomId": room_id, "userId": user_id, "answer": payload}})
}

#[allow(dead_code)]
pub fn ice_candidate(room_id: &str, user_id: &str, payload: &Value) -> Value {
    json!({"op": "ice-candidate", "d": {"roomId": room_id, "userId": user_id, "candidate": payload}})
}

#[allow(dead_code)]
pub fn chat_message(room_id: &str, user_id: &str, message: &str) -> Value {
    json!({"op": "chat-message", "d": {"roomId": room_id, "userId": user_id, "message": message}})
}
