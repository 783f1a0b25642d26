//! Route definitions for the `/albums` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::albums;
use crate::state::AppState;

/// Routes mounted at `/albums`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> create
/// GET    /{id}            -> get_by_id
/// PUT    /{id}            -> update
/// DELETE /{id}            -> delete
/// POST   /{id}/artists    -> link_artist
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(albums::list).post(albums::create))
        .route(
            "/{id}",
            get(albums::get_by_id)
                .put(albums::update)
                .delete(albums::delete),
        )
        .route("/{id}/artists", post(albums::link_artist))
}
