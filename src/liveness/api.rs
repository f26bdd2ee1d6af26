//! Handlers for the liveness routes.

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, State};
use chrono::{SecondsFormat, Utc};
use tracing::info;

use super::LivenessState;

/// GET / — greeting carrying the node's hostname.
pub(super) async fn root(
    State(state): State<LivenessState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
) -> String {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    info!(%timestamp, %peer, "request received");
    format!("Hello from backend server: {}", state.hostname)
}

/// GET /health — process is up; no dependency checks.
pub(super) async fn health() -> &'static str {
    "OK"
}
