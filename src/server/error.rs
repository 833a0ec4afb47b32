//! HTTP error responses.
//!
//! Every error body has the shape `{"error": "<message>"}`. Internal
//! details are logged, never returned.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message returned for undecodable request bodies.
pub const INVALID_JSON: &str = "Invalid JSON body";
/// Message returned when `config` is empty or whitespace.
pub const EMPTY_CONFIG: &str = "Config content cannot be empty";
/// Message returned for a missing or unknown API key.
pub const UNAUTHORIZED: &str = "Unauthorized: Invalid or missing API Key";
/// Message returned for panics and other internal failures.
pub const INTERNAL: &str = "Internal Server Error";

/// JSON error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Application-level error type that implements [`IntoResponse`].
#[derive(Error, Debug)]
pub enum AppError {
    /// Request body could not be used (400). The message is shown to
    /// the client.
    #[error("{0}")]
    BadRequest(&'static str),

    /// Missing or unknown API key (401).
    #[error("Unauthorized: Invalid or missing API Key")]
    Unauthorized,

    /// Internal server error (500). Message is logged but not returned to client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::Internal(detail) => {
                tracing::error!(error = %detail, "internal server error");
                INTERNAL.to_string()
            }
            other => other.to_string(),
        };

        (self.status(), Json(ErrorBody { error: message })).into_response()
    }
}
