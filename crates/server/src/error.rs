//! Unified error handling for route handlers.
//!
//! Provides a unified `AppError` type mapped to HTTP responses. All route
//! handlers should return `Result<T, AppError>`. Response bodies carry the
//! message under a `detail` key.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use campus_market_core::ValidationError;

use crate::db::StoreError;

/// Application-level error type for the server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A request body failed value-level validation.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Declared order total does not match the total recomputed from items.
    #[error("Invalid total amount")]
    InvalidTotal,

    /// Document store operation failed.
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if matches!(self, Self::Store(_)) {
            tracing::error!(error = %self, "Request error");
        }

        let status = match &self {
            Self::Validation(_) | Self::InvalidTotal => StatusCode::BAD_REQUEST,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // The store message is surfaced verbatim; this is an internal/demo
        // deployment and the detail aids debugging. A hardened deployment
        // would redact it.
        let body = Json(json!({ "detail": self.to_string() }));

        (status, body).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
