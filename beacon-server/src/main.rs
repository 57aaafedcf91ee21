use std::sync::Arc;

use tracing::info;

use beacon_server::config::RelayConfig;
use beacon_server::http::{self, AppState};
use beacon_server::signaling::{SignalingService, WebSocketSink};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("beacon_server=info".parse().unwrap()),
        )
        .init();

    let config = RelayConfig::from_env();

    let sink = WebSocketSink::new();
    let service = SignalingService::new(Arc::new(sink.clone()));
    let state = Arc::new(AppState {
        service,
        sink,
        config: config.clone(),
    });

    let app = http::router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .expect("Failed to bind listener");
    info!("Signaling relay listening on http://{}", config.listen_addr);

    axum::serve(listener, app).await.expect("Server error");
}
