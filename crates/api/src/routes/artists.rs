//! Route definitions for the `/artists` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::artists;
use crate::state::AppState;

/// Routes mounted at `/artists`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(artists::list).post(artists::create))
        .route(
            "/{id}",
            get(artists::get_by_id)
                .put(artists::update)
                .delete(artists::delete),
        )
}
