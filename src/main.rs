//! Mjolnir: a minimal JSON web API.
//!
//! This is the application entry point. It loads configuration, initializes
//! tracing, captures the build metadata and start instant, sets up the Axum
//! router and starts the HTTP server.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mjolnir::build_info::BuildInfo;
use mjolnir::config::{AppConfig, DEFAULT_LOG_FILTER};
use mjolnir::http::start_server;
use mjolnir::{create_router, AppState};

/// Mjolnir: a minimal JSON web API
#[derive(Parser, Debug)]
#[command(name = "mjolnir", version, about)]
struct Args {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level filter (e.g., "mjolnir=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Captured before anything else so uptime covers the whole process
    let build = BuildInfo::current();

    let config = AppConfig::resolve(args.config.as_ref())?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!(
        port = config.http.port,
        version = %build.version,
        build_time = %build.build_time,
        runtime_version = %build.runtime_version,
        "Loaded configuration"
    );

    let state = AppState::new(build);
    let app = create_router(state, &config.http);

    start_server(app, &config.http).await?;

    Ok(())
}
