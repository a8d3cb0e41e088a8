//! HTTP route handlers.
//!
//! Four fixed GET routes plus an explicit 400 for an empty greeting name.
//! Anything else falls through to axum's default 404/405 handling.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod hello;

use axum::{
    http::{
        header::{HeaderValue, CACHE_CONTROL, CONTENT_TYPE},
        StatusCode,
    },
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::{
    set_header::SetResponseHeaderLayer,
    timeout::{RequestBodyTimeoutLayer, TimeoutLayer},
};

use crate::config::HttpServerConfig;
use crate::error::AppError;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Responses describe live process state and must not be cached upstream
pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

/// Creates the Axum router with all routes and request layers.
pub fn create_router(state: AppState, http: &HttpServerConfig) -> Router {
    let greeting_routes = Router::new()
        .route("/", get(hello::root))
        .route("/api/hello", get(hello::hello))
        .route("/api/hello/", get(hello::hello_empty_name))
        .route("/api/hello/{name}", get(hello::hello_name));

    // Health check - always fresh for liveness probes
    let health_routes = Router::new().route("/health", get(health::health));

    let app = Router::new()
        .merge(greeting_routes)
        .merge(health_routes)
        .with_state(state);

    with_request_layers(app, http)
}

/// Wrap a router in the timeout, cache and request ID layers.
///
/// The timeouts sit inside the request ID layer so a timed-out request
/// still gets its span, completion log and `x-request-id` header.
pub fn with_request_layers(app: Router, http: &HttpServerConfig) -> Router {
    app.layer(TimeoutLayer::with_status_code(
        StatusCode::REQUEST_TIMEOUT,
        http.write_timeout(),
    ))
    .layer(RequestBodyTimeoutLayer::new(http.body_read_timeout()))
    .layer(middleware::map_response(timeout_as_json))
    .layer(SetResponseHeaderLayer::if_not_present(
        CACHE_CONTROL,
        HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
    ))
    // Request ID middleware - creates root span with request_id for correlation
    .layer(middleware::from_fn(request_id_layer))
}

/// Give the timeout layer's bare 408 a JSON body like every other response.
async fn timeout_as_json(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT
        && !response.headers().contains_key(CONTENT_TYPE)
    {
        return AppError::Timeout.into_response();
    }
    response
}
