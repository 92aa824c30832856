//! Polaris pipeline validation server.
//!
//! Provides the HTTP endpoint the pipeline editor calls before a pipeline is
//! scheduled.
//!
//! # Architecture
//!
//! The server consists of:
//! - **Protocol**: JSON request, response and error bodies
//! - **Routes**: HTTP handlers, CORS and request tracing
//! - **Error**: mapping of failures to HTTP status codes
//!
//! # Endpoints
//!
//! - `POST /pipelines/parse`: `{nodes, edges}` → `{num_nodes, num_edges, is_dag}`
//! - `GET /health`: liveness check

pub mod error;
pub mod protocol;
pub mod routes;

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

pub use error::{ServerError, ServerResult};
pub use protocol::{ErrorBody, ErrorDetail, PipelineRequest, PipelineSummary};
pub use routes::create_router;

/// Origins the pipeline editor is served from during development.
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &["http://localhost", "http://localhost:3000"];

/// Default request body limit (2 MiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Origins allowed to call the API from a browser.
    pub allowed_origins: Vec<String>,
    /// Largest accepted request body, in bytes.
    pub max_body_bytes: usize,
}

impl ServerConfig {
    /// Resolve `host` and `port` to the address to bind.
    ///
    /// Accepts host names (`localhost`) as well as IPv4 and bare IPv6
    /// literals (`::1`).
    pub async fn resolve_addr(&self) -> ServerResult<SocketAddr> {
        let invalid = || ServerError::InvalidAddress(format!("{}:{}", self.host, self.port));
        tokio::net::lookup_host((self.host.as_str(), self.port))
            .await
            .map_err(|_| invalid())?
            .next()
            .ok_or_else(invalid)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|o| o.to_string())
                .collect(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

/// Start the Polaris server and run until Ctrl+C.
pub async fn serve(config: ServerConfig) -> ServerResult<()> {
    // Reject bad CORS settings before touching the network.
    let app = create_router(&config)?;
    serve_app(app, &config).await
}

/// Bind the configured address and serve `app` until Ctrl+C.
pub async fn serve_app(app: Router, config: &ServerConfig) -> ServerResult<()> {
    let addr = config.resolve_addr().await?;
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Starting Polaris server at http://{}", listener.local_addr()?);

    // Create shutdown signal channel
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

    // Handle Ctrl+C for graceful shutdown
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Received shutdown signal");
            let _ = shutdown_tx.send(());
        }
    });

    run(listener, app, async move {
        let _ = shutdown_rx.await;
    })
    .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// Serve on an already bound listener until `shutdown` resolves.
pub async fn serve_listener<F>(
    listener: TcpListener,
    config: &ServerConfig,
    shutdown: F,
) -> ServerResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = create_router(config)?;
    run(listener, app, shutdown).await
}

async fn run<F>(listener: TcpListener, app: Router, shutdown: F) -> ServerResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
