//! Server error type.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Error returned by API handlers.
///
/// Page routes are total and never produce one of these; only the comment
/// endpoints reject input.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// Request body failed validation.
    #[error("{0}")]
    InvalidInput(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
