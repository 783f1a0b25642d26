//! Development-mode exposure of internal error text.

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::error::{ErrorDetail, INTERNAL_ERROR_MESSAGE};
use crate::state::AppState;

/// Rewrite 500 responses to include a `details` field when the server runs
/// in development mode. Production responses are left untouched.
pub async fn attach_error_details(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;

    if !state.config.environment.is_development()
        || response.status() != StatusCode::INTERNAL_SERVER_ERROR
    {
        return response;
    }

    let Some(ErrorDetail(details)) = response.extensions().get::<ErrorDetail>().cloned() else {
        return response;
    };

    let body = json!({
        "error": INTERNAL_ERROR_MESSAGE,
        "status": StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
        "details": details,
    });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
}
