pub mod albums;
pub mod artists;
pub mod health;
pub mod playlists;
pub mod songs;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /users                                  list, create
/// /users/{id}                             get, update, delete
///
/// /artists                                list, create
/// /artists/{id}                           get (with songs, albums), update, delete
///
/// /albums                                 list, create
/// /albums/{id}                            get (with artists, songs), update, delete
/// /albums/{id}/artists                    link artist (POST)
///
/// /songs                                  list, create
/// /songs/{id}                             get (with artists, album), update, delete
/// /songs/artist/{artist_id}               songs by artist
/// /songs/album/{album_id}                 songs by album
///
/// /playlists                              list, create
/// /playlists/{id}                         get (with songs, user), update, delete
/// /playlists/user/{user_id}               playlists by user
/// /playlists/{id}/songs                   add song (POST)
/// /playlists/{id}/songs/{song_id}         remove song (DELETE)
/// /playlists/{id}/songs/{song_id}/position  reorder (PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", users::router())
        .nest("/artists", artists::router())
        .nest("/albums", albums::router())
        .nest("/songs", songs::router())
        .nest("/playlists", playlists::router())
}
