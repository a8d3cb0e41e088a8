//! Shared application state for request handlers.

use std::sync::Arc;

use crate::build_info::BuildInfo;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Holds the build metadata and start instant, both read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub build: Arc<BuildInfo>,
}

impl AppState {
    /// Creates a new application state from the given build metadata.
    pub fn new(build: BuildInfo) -> Self {
        Self {
            build: Arc::new(build),
        }
    }
}
