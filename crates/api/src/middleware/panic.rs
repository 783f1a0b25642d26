use std::any::Any;

use axum::http::StatusCode;
use axum::response::Response;

use crate::error::{error_response, ErrorDetail, INTERNAL_ERROR_MESSAGE};

/// Turn a handler panic into the uniform 500 JSON body.
///
/// Used with `CatchPanicLayer::custom`.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "Unknown panic payload".to_string()
    };
    tracing::error!(panic = %detail, "Handler panicked");

    let mut response = error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE);
    response.extensions_mut().insert(ErrorDetail(detail));
    response
}
