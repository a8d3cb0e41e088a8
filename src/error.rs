use axum::{
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::models::Message;
use crate::response::JsonResponse;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("name parameter is required")]
    MissingName,

    /// The path segment could not be extracted, e.g. invalid percent-encoded UTF-8.
    #[error("{}", .0.body_text())]
    InvalidPath(#[from] PathRejection),

    #[error("request timed out")]
    Timeout,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MissingName => StatusCode::BAD_REQUEST,
            AppError::InvalidPath(rejection) => {
                tracing::debug!(error = %rejection, "rejected path parameter");
                rejection.status()
            }
            AppError::Timeout => StatusCode::REQUEST_TIMEOUT,
        };

        JsonResponse(status, Message::new(self.to_string())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_name_is_bad_request() {
        let response = AppError::MissingName.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "name parameter is required");
    }
}
