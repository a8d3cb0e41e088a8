//! Request ID middleware for correlating logs with requests.
//!
//! Every request gets an ID: the caller's `x-request-id` when it is a valid
//! UUID (so IDs survive a proxy hop), otherwise a fresh UUID v4. The whole
//! request lifecycle runs inside a tracing span carrying that ID, and the ID is
//! echoed back in the `x-request-id` response header.

use std::time::Instant;

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Extension type for accessing the request ID in handlers if needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestId(pub Uuid);

impl RequestId {
    /// Reuse a well-formed incoming ID, or mint a new one.
    fn from_headers(headers: &HeaderMap) -> Self {
        let incoming = headers
            .get(&REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| Uuid::parse_str(value.trim()).ok());
        RequestId(incoming.unwrap_or_else(Uuid::new_v4))
    }
}

/// Middleware that assigns a request ID and creates a request span.
///
/// This must be the outermost layer so the span, the completion log and the
/// response header also cover responses produced by inner layers, such as a
/// timeout's 408.
pub async fn request_id_layer(mut request: Request, next: Next) -> Response {
    let request_id = RequestId::from_headers(request.headers());

    let span = tracing::info_span!(
        "request",
        request_id = %request_id.0,
        method = %request.method(),
        path = %request.uri().path(),
        duration_ms = tracing::field::Empty,
    );

    let start = Instant::now();
    request.extensions_mut().insert(request_id);

    async move {
        let mut response = next.run(request).await;

        // A hyphenated UUID is always a valid header value
        if let Ok(value) = HeaderValue::from_str(&request_id.0.to_string()) {
            response
                .headers_mut()
                .insert(REQUEST_ID_HEADER.clone(), value);
        }

        let duration_ms = start.elapsed().as_millis() as u64;
        tracing::Span::current().record("duration_ms", duration_ms);
        tracing::info!(
            status = response.status().as_u16(),
            duration_ms,
            "Request completed"
        );

        response
    }
    .instrument(span)
    .await
}
