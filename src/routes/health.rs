//! Health check endpoint for container orchestration.
//!
//! Reports build metadata and uptime. Used by Kubernetes, ECS, systemd and load
//! balancers to verify the service is alive.

use axum::extract::State;

use crate::build_info::format_uptime;
use crate::models::{HealthState, HealthStatus};
use crate::response::JsonResponse;
use crate::state::AppState;

/// Health check handler.
///
/// This is a liveness probe: it only checks that the process can respond to HTTP.
pub async fn health(State(state): State<AppState>) -> JsonResponse<HealthStatus> {
    let build = &state.build;
    let status = HealthStatus {
        status: HealthState::Healthy,
        version: build.version.clone(),
        build_time: build.build_time.clone(),
        runtime_version: build.runtime_version.clone(),
        uptime: format_uptime(build.uptime()),
    };

    tracing::info!("health handler");
    JsonResponse::ok(status)
}
