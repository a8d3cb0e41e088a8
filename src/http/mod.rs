//! HTTP server module.
//!
//! The server includes:
//! - Per-connection header read timeout, request body and handling timeouts
//! - Graceful shutdown on SIGTERM/SIGINT

mod server;
mod shutdown;

pub use server::{resolve_addr, start_server, ServerError};
