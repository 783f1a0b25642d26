use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use playlist_core::types::{DbId, Timestamp};

use crate::models::song::Song;
use crate::models::user::User;

/// A row from the `playlists` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Playlist {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub user_id: DbId,
    pub is_public: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a new playlist. `is_public` defaults to `true`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePlaylist {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,
    #[validate(length(max = 1000, message = "Description is too long"))]
    pub description: Option<String>,
    #[serde(default)]
    #[validate(range(min = 1, message = "User ID must be positive"))]
    pub user_id: DbId,
    #[serde(default = "default_public")]
    pub is_public: bool,
}

fn default_public() -> bool {
    true
}

/// DTO for updating an existing playlist. The owner cannot be changed.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePlaylist {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 1000, message = "Description is too long"))]
    pub description: Option<String>,
    pub is_public: Option<bool>,
}

/// A row from the `playlist_songs` junction table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct PlaylistSong {
    pub playlist_id: DbId,
    pub song_id: DbId,
    pub position: i64,
    pub added_at: Timestamp,
}

/// Body of `POST /playlists/{id}/songs`.
///
/// Without a `position` the song is appended after the current maximum.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddPlaylistSong {
    #[serde(default)]
    #[validate(range(min = 1, message = "Song ID must be positive"))]
    pub song_id: DbId,
    #[validate(range(min = 1, message = "Position must be positive"))]
    pub position: Option<i64>,
}

/// Body of `PUT /playlists/{id}/songs/{song_id}/position`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReorderPlaylistSong {
    #[serde(default)]
    #[validate(range(min = 1, message = "Position must be positive"))]
    pub new_position: i64,
}

/// A song as it appears inside one playlist.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct PlaylistTrack {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub song: Song,
    pub position: i64,
    pub added_at: Timestamp,
}

/// A playlist together with its ordered tracks and its owner.
#[derive(Debug, Clone, Serialize)]
pub struct PlaylistDetail {
    #[serde(flatten)]
    pub playlist: Playlist,
    pub songs: Vec<PlaylistTrack>,
    pub user: Option<User>,
}
