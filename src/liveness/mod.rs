//! Liveness responder — the reachability probe the load balancer polls.
//!
//! Stateless apart from the hostname captured at startup. `run()` drives the
//! axum event loop; the [`CancellationToken`] is wired to axum's graceful
//! shutdown.
//!
//! ## URL layout
//!
//! ```text
//! GET  /        → "Hello from backend server: <hostname>"
//! GET  /health  → "OK"
//! ```

mod api;

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::config::{EnvInput, keys};
use crate::error::AppError;

pub const DEFAULT_PORT: u16 = 5050;

/// Hostname reported when the OS lookup fails.
const UNKNOWN_HOST: &str = "unknown";

/// Listener settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LivenessConfig {
    pub port: u16,
}

impl Default for LivenessConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

impl LivenessConfig {
    /// Read `PORT`; absent or empty means [`DEFAULT_PORT`].
    pub fn from_env(env: &EnvInput) -> Result<Self, AppError> {
        let Some(raw) = env.non_empty(keys::PORT) else {
            return Ok(Self::default());
        };
        let port = raw
            .parse::<u16>()
            .map_err(|e| AppError::Config(format!("invalid {} '{raw}': {e}", keys::PORT)))?;
        Ok(Self { port })
    }

    /// All interfaces, configured port.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

/// Router state injected into handlers via [`axum::extract::State`].
#[derive(Clone)]
pub(crate) struct LivenessState {
    pub hostname: Arc<str>,
}

/// Local node name, or `"unknown"` when it cannot be read.
pub fn local_hostname() -> String {
    hostname::get()
        .ok()
        .and_then(|h| h.into_string().ok())
        .unwrap_or_else(|| UNKNOWN_HOST.to_string())
}

pub fn build_router(hostname: &str) -> Router {
    let state = LivenessState {
        hostname: Arc::from(hostname),
    };
    Router::new()
        .route("/", get(api::root))
        .route("/health", get(api::health))
        .with_state(state)
}

/// Bind the configured port and serve until `shutdown` is cancelled.
pub async fn run(config: LivenessConfig, shutdown: CancellationToken) -> Result<(), AppError> {
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(bind_addr)
        .await
        .map_err(|e| AppError::Liveness(format!("bind failed on {bind_addr}: {e}")))?;

    let hostname = local_hostname();
    info!(port = config.port, %hostname, "liveness responder listening");

    serve(listener, build_router(&hostname), shutdown).await
}

/// Serve `router` on an already-bound listener.
pub async fn serve(
    listener: TcpListener,
    router: Router,
    shutdown: CancellationToken,
) -> Result<(), AppError> {
    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async move { shutdown.cancelled().await })
    .await
    .map_err(|e| AppError::Liveness(format!("server error: {e}")))?;

    info!("liveness responder shut down");
    Ok(())
}
