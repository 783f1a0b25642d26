//! Route definitions for the `/songs` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::songs;
use crate::state::AppState;

/// Routes mounted at `/songs`.
///
/// ```text
/// GET    /                      -> list
/// POST   /                      -> create
/// GET    /{id}                  -> get_by_id
/// PUT    /{id}                  -> update
/// DELETE /{id}                  -> delete
/// GET    /artist/{artist_id}    -> list_by_artist
/// GET    /album/{album_id}      -> list_by_album
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(songs::list).post(songs::create))
        .route(
            "/{id}",
            get(songs::get_by_id).put(songs::update).delete(songs::delete),
        )
        .route("/artist/{artist_id}", get(songs::list_by_artist))
        .route("/album/{album_id}", get(songs::list_by_album))
}
