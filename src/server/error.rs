// Boundary error type for the HTTP surface
//
// Two user-visible failure kinds, statically distinguished: an empty
// question (client error, recovered locally) and a generation fault
// (anything the provider call raised). The response body only ever carries
// the error's display text.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Question was empty after trimming.
    #[error("Please enter a physics question.")]
    EmptyQuestion,

    /// The provider call faulted (network, auth, malformed response).
    #[error("Failed to generate answer: {0}")]
    Generation(anyhow::Error),
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Generation(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::EmptyQuestion => StatusCode::BAD_REQUEST,
            ApiError::Generation(ref err) => {
                // Full context chain goes to the log; the client only sees
                // the display text.
                tracing::error!("Answer generation failed: {:#}", err);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
