//! Existence checks shared by handlers that reference other resources.
//!
//! Each helper fetches the row or fails with `CoreError::NotFound`.

use playlist_core::error::CoreError;
use playlist_core::types::DbId;
use playlist_db::models::album::Album;
use playlist_db::models::artist::Artist;
use playlist_db::models::playlist::{Playlist, PlaylistSong};
use playlist_db::models::song::Song;
use playlist_db::models::user::User;
use playlist_db::repositories::{
    AlbumRepo, ArtistRepo, PlaylistRepo, PlaylistSongRepo, SongRepo, UserRepo,
};
use playlist_db::DbPool;

use crate::error::AppResult;

pub async fn ensure_user_exists(pool: &DbPool, id: DbId) -> AppResult<User> {
    UserRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("User", id).into())
}

pub async fn ensure_artist_exists(pool: &DbPool, id: DbId) -> AppResult<Artist> {
    ArtistRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Artist", id).into())
}

pub async fn ensure_album_exists(pool: &DbPool, id: DbId) -> AppResult<Album> {
    AlbumRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Album", id).into())
}

pub async fn ensure_song_exists(pool: &DbPool, id: DbId) -> AppResult<Song> {
    SongRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Song", id).into())
}

pub async fn ensure_playlist_exists(pool: &DbPool, id: DbId) -> AppResult<Playlist> {
    PlaylistRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Playlist", id).into())
}

/// The song's entry in a playlist; NotFound when the song is not in it.
pub async fn ensure_playlist_entry_exists(
    pool: &DbPool,
    playlist_id: DbId,
    song_id: DbId,
) -> AppResult<PlaylistSong> {
    PlaylistSongRepo::find(pool, playlist_id, song_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Playlist song", song_id).into())
}
