//! Mjolnir: a minimal JSON web API.
//!
//! Serves a health probe and greeting endpoints, and ships the `taggen`
//! utility that labels builds as `<major.minor>-<adjective>-<noun>`.

pub mod build_info;
pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod models;
pub mod response;
pub mod routes;
pub mod state;
pub mod tag;

pub use routes::create_router;
pub use state::AppState;
