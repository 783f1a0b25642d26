//! Route definitions for the `/playlists` resource.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::playlists;
use crate::state::AppState;

/// Routes mounted at `/playlists`.
///
/// ```text
/// GET    /                              -> list
/// POST   /                              -> create
/// GET    /{id}                          -> get_by_id
/// PUT    /{id}                          -> update
/// DELETE /{id}                          -> delete
/// GET    /user/{user_id}                -> list_by_user
/// POST   /{id}/songs                    -> add_song
/// DELETE /{id}/songs/{song_id}          -> remove_song
/// PUT    /{id}/songs/{song_id}/position -> reorder_song
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(playlists::list).post(playlists::create))
        .route(
            "/{id}",
            get(playlists::get_by_id)
                .put(playlists::update)
                .delete(playlists::delete),
        )
        .route("/user/{user_id}", get(playlists::list_by_user))
        .route("/{id}/songs", post(playlists::add_song))
        .route("/{id}/songs/{song_id}", delete(playlists::remove_song))
        .route(
            "/{id}/songs/{song_id}/position",
            put(playlists::reorder_song),
        )
}
