use axum::extract::OriginalUri;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

/// Fallback for unmatched routes.
pub async fn route_not_found(OriginalUri(uri): OriginalUri) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Route not found",
            "status": StatusCode::NOT_FOUND.as_u16(),
            "path": uri.path(),
        })),
    )
}
