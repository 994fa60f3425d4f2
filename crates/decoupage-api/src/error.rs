//! API error type mapping lookup failures to HTTP responses.
//!
//! Unlike a JSON error envelope, 404 responses carry the bare
//! human-readable message as a plain-text body ("Département non
//! trouvé", …) — that is the wire contract clients of the original
//! service already depend on.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use decoupage_core::LookupError;
use thiserror::Error;

/// Application-level error implementing [`IntoResponse`].
#[derive(Debug, Error)]
pub enum AppError {
    /// Entity absent at some level of the tree (404). The message is the
    /// public French text for the level that failed.
    #[error("{0}")]
    NotFound(String),

    /// Internal error (500). Detail is logged, never returned to clients.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<LookupError> for AppError {
    fn from(err: LookupError) -> Self {
        tracing::debug!(level = err.level(), id = err.missing_id(), "lookup miss");
        Self::NotFound(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(message) => (StatusCode::NOT_FOUND, message).into_response(),
            Self::Internal(_) => {
                tracing::error!(error = %self, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Une erreur interne est survenue",
                )
                    .into_response()
            }
        }
    }
}
