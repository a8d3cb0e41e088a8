//! JSON response writer.
//!
//! Unlike `axum::Json`, an encoding failure does not turn into a 500: the
//! status chosen by the handler is kept, the body is left empty and the error
//! is logged.

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

pub const APPLICATION_JSON: &str = "application/json";

/// A status code plus a value serialized as the JSON body.
#[derive(Debug, Clone)]
pub struct JsonResponse<T>(pub StatusCode, pub T);

impl<T> JsonResponse<T> {
    pub fn ok(value: T) -> Self {
        Self(StatusCode::OK, value)
    }
}

impl<T: Serialize> IntoResponse for JsonResponse<T> {
    fn into_response(self) -> Response {
        let JsonResponse(status, value) = self;

        let body = match serde_json::to_vec(&value) {
            Ok(bytes) => Body::from(bytes),
            Err(e) => {
                tracing::error!(error = %e, "failed to encode response");
                Body::empty()
            }
        };

        let mut response = Response::new(body);
        *response.status_mut() = status;
        response
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        response
    }
}
