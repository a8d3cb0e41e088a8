//! HTTP server startup logic.

use std::net::{IpAddr, SocketAddr};

use axum::Router;
use axum_server::Handle;
use hyper_util::rt::TokioTimer;

use crate::config::HttpServerConfig;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Cannot resolve http.host {host:?}: {reason}")]
    Address { host: String, reason: String },

    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),
}

/// Resolve `http.host` and `http.port` to a listen address.
///
/// IP literals (v4 or v6) are used directly; anything else goes through DNS
/// and the first result wins.
pub async fn resolve_addr(config: &HttpServerConfig) -> Result<SocketAddr, ServerError> {
    if let Ok(ip) = config.host.parse::<IpAddr>() {
        return Ok(SocketAddr::new(ip, config.port));
    }

    let address_error = |reason: String| ServerError::Address {
        host: config.host.clone(),
        reason,
    };
    tokio::net::lookup_host((config.host.as_str(), config.port))
        .await
        .map_err(|e| address_error(e.to_string()))?
        .next()
        .ok_or_else(|| address_error("no addresses found".to_string()))
}

/// Start the HTTP server.
///
/// This function blocks until the server shuts down. Binding failure is
/// returned as `ServerError::Bind` without retrying. Request body and handling
/// timeouts are part of the router; the header read timeout is enforced here
/// per connection.
pub async fn start_server(app: Router, config: &HttpServerConfig) -> Result<(), ServerError> {
    let addr = resolve_addr(config).await?;

    let handle = Handle::new();
    shutdown::setup_shutdown_handler(handle.clone(), config.shutdown_grace());

    let mut server = axum_server::bind(addr).handle(handle);
    server
        .http_builder()
        .http1()
        .timer(TokioTimer::new())
        .header_read_timeout(config.header_read_timeout());

    tracing::info!(
        %addr,
        header_read_timeout_secs = config.header_read_timeout_seconds,
        body_read_timeout_secs = config.body_read_timeout_seconds,
        write_timeout_secs = config.write_timeout_seconds,
        "starting server"
    );

    server.serve(app.into_make_service()).await?;

    tracing::info!("server stopped");
    Ok(())
}
