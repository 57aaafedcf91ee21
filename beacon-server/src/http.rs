//! HTTP surface: the WebSocket upgrade route plus a small info route.

use std::sync::Arc;

use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::config::RelayConfig;
use crate::signaling::{SignalingService, WebSocketSink, ws_handler};

/// Shared state behind every route.
pub struct AppState {
    pub service: SignalingService,
    pub sink: WebSocketSink,
    pub config: RelayConfig,
}

/// Builds the relay router: `GET /` info, `GET /ws` upgrade, permissive
/// CORS for browser clients.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(info_handler))
        .route("/ws", get(ws_handler))
        .layer(cors)
        .with_state(state)
}

async fn info_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "service": "beacon-server",
        "version": env!("CARGO_PKG_VERSION"),
        "websocket": "/ws"
    }))
}
