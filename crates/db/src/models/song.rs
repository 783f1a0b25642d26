use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use playlist_core::types::{DbId, Timestamp};
use playlist_core::validation::validate_positive_ids;

use crate::models::album::Album;
use crate::models::artist::Artist;

/// A row from the `songs` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Song {
    pub id: DbId,
    pub title: String,
    /// Length in seconds.
    pub duration: i64,
    pub file_url: Option<String>,
    pub album_id: Option<DbId>,
    pub created_at: Timestamp,
}

/// DTO for creating a new song. At least one artist must be credited.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSong {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,
    #[serde(default)]
    #[validate(range(min = 1, message = "Duration must be positive"))]
    pub duration: i64,
    #[validate(
        url(message = "Invalid URL format"),
        length(max = 500, message = "URL is too long")
    )]
    pub file_url: Option<String>,
    #[validate(range(min = 1, message = "Album ID must be positive"))]
    pub album_id: Option<DbId>,
    #[serde(default)]
    #[validate(
        length(min = 1, message = "At least one artist is required"),
        custom(function = "validate_positive_ids")
    )]
    pub artist_ids: Vec<DbId>,
}

impl CreateSong {
    /// Artist ids with duplicates removed, keeping first-seen order.
    pub fn distinct_artist_ids(&self) -> Vec<DbId> {
        let mut ids = Vec::with_capacity(self.artist_ids.len());
        for id in &self.artist_ids {
            if !ids.contains(id) {
                ids.push(*id);
            }
        }
        ids
    }
}

/// DTO for updating an existing song.
///
/// Omitted fields keep their value. `album_id` is tri-state: omitted keeps
/// the current album, `null` detaches the song, a number moves it.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateSong {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: Option<String>,
    #[validate(range(min = 1, message = "Duration must be positive"))]
    pub duration: Option<i64>,
    #[validate(
        url(message = "Invalid URL format"),
        length(max = 500, message = "URL is too long")
    )]
    pub file_url: Option<String>,
    #[serde(default, deserialize_with = "playlist_core::nullable::deserialize")]
    #[validate(range(min = 1, message = "Album ID must be positive"))]
    pub album_id: Option<Option<DbId>>,
}

/// A row from the `song_artists` junction table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct SongArtist {
    pub song_id: DbId,
    pub artist_id: DbId,
}

/// A song together with its credited artists and its album, if any.
#[derive(Debug, Clone, Serialize)]
pub struct SongDetail {
    #[serde(flatten)]
    pub song: Song,
    pub artists: Vec<Artist>,
    pub album: Option<Album>,
}
