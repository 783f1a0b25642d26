use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use playlist_core::error::CoreError;

/// Message returned for every 500 response.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce `{ "error", "status" }` bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `playlist_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A request rejected before reaching a handler (malformed JSON, bad
    /// path parameter).
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Internal error text attached to 500 responses as an extension.
///
/// Only surfaced to clients by
/// [`attach_error_details`](crate::middleware::error_details::attach_error_details)
/// in development mode.
#[derive(Debug, Clone)]
pub struct ErrorDetail(pub String);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, core.to_string()),
                CoreError::Validation(_) => (StatusCode::BAD_REQUEST, core.to_string()),
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        INTERNAL_ERROR_MESSAGE.to_string(),
                    )
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        let mut response = error_response(status, &message);
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            response
                .extensions_mut()
                .insert(ErrorDetail(self.to_string()));
        }
        response
    }
}

/// Build the uniform JSON error response.
pub fn error_response(status: StatusCode, message: &str) -> Response {
    let body = json!({
        "error": message,
        "status": status.as_u16(),
    });
    (status, axum::Json(body)).into_response()
}

/// Classify a sqlx error into an HTTP status and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique and foreign-key constraint violations map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "Resource not found".to_string()),
        _ if playlist_db::is_unique_violation(err) => (
            StatusCode::CONFLICT,
            "Duplicate value violates a unique constraint".to_string(),
        ),
        _ if playlist_db::is_foreign_key_violation(err) => (
            StatusCode::CONFLICT,
            "Referenced resource does not exist or is still referenced".to_string(),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_ERROR_MESSAGE.to_string(),
            )
        }
    }
}

/// Reclassify a unique-constraint failure on insert as a domain conflict.
///
/// Other errors pass through unchanged.
pub fn conflict_on_duplicate(err: sqlx::Error, message: &'static str) -> AppError {
    if playlist_db::is_unique_violation(&err) {
        AppError::Core(CoreError::conflict(message))
    } else {
        AppError::Database(err)
    }
}
