//! Greeting endpoints.

use axum::extract::{rejection::PathRejection, Path};

use crate::error::AppError;
use crate::models::Message;
use crate::response::JsonResponse;

/// Fixed service identification returned by `/`
pub const SERVICE_NAME: &str = "Mjolnir Example API";

/// Greeting returned when no name is given
pub const DEFAULT_GREETING: &str = "Hello, World!";

/// Service identification at the site root.
pub async fn root() -> JsonResponse<Message> {
    tracing::info!("root handler");
    JsonResponse::ok(Message::new(SERVICE_NAME))
}

/// Greets the world.
pub async fn hello() -> JsonResponse<Message> {
    tracing::info!("hello handler");
    JsonResponse::ok(Message::new(DEFAULT_GREETING))
}

/// Greets the (percent-decoded) name from the path, verbatim.
pub async fn hello_name(
    name: Result<Path<String>, PathRejection>,
) -> Result<JsonResponse<Message>, AppError> {
    let Path(name) = name?;
    if name.is_empty() {
        return Err(AppError::MissingName);
    }

    tracing::info!(name = %name, "hello name handler");
    Ok(JsonResponse::ok(Message::new(greeting(&name))))
}

/// `/api/hello/` with nothing after the slash.
pub async fn hello_empty_name() -> AppError {
    AppError::MissingName
}

pub fn greeting(name: &str) -> String {
    format!("Hello, {}!", name)
}
