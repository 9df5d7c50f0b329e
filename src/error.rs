// src/error.rs
// Closed error taxonomy for the ingestion pipeline. Each stage returns
// `Result<_, ApiError>`; the enum is converted to a transport response
// only at the axum boundary.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The uploaded bytes could not be parsed as a PDF.
    #[error("Lecture du PDF impossible: {0}")]
    Extraction(String),

    /// The remote model call failed (network, quota, malformed response).
    #[error("Erreur OpenAI: {0}")]
    Summarization(String),

    /// The store rejected the insert; carries the store's own message.
    #[error("{0}")]
    Persistence(String),

    /// Anything else (bad upload, unexpected data shapes).
    #[error("Erreur interne: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Trace detail stays server-side; the client only gets the message.
        error!(error = %self, "request failed");
        let body = Json(serde_json::json!({
            "status": 500,
            "detail": self.to_string(),
        }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
