use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use storefront_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Every failure is one of two kinds: the request was malformed (400) or the
/// storage layer failed (500). Implements [`IntoResponse`] to produce the
/// same JSON error body for every route.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A request that failed binding or validation.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Any failure reported by the storage layer.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => {
                tracing::debug!(error = ?core, "Rejected request");
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", core.to_string())
            }
            // Storage messages are passed through unsanitized.
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    err.to_string(),
                )
            }
        };

        let body = json!({
            "status": "error",
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
