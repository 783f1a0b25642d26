use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use playlist_core::types::{DbId, Timestamp};
use playlist_core::validation::validate_release_year;

use crate::models::artist::Artist;
use crate::models::song::Song;

/// A row from the `albums` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Album {
    pub id: DbId,
    pub title: String,
    pub release_year: Option<i64>,
    pub cover_art_url: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new album.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAlbum {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,
    #[validate(custom(function = "validate_release_year"))]
    pub release_year: Option<i64>,
    #[validate(
        url(message = "Invalid URL format"),
        length(max = 500, message = "URL is too long")
    )]
    pub cover_art_url: Option<String>,
}

/// DTO for updating an existing album. Omitted fields keep their value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateAlbum {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: Option<String>,
    #[validate(custom(function = "validate_release_year"))]
    pub release_year: Option<i64>,
    #[validate(
        url(message = "Invalid URL format"),
        length(max = 500, message = "URL is too long")
    )]
    pub cover_art_url: Option<String>,
}

/// A row from the `album_artists` junction table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct AlbumArtist {
    pub album_id: DbId,
    pub artist_id: DbId,
}

/// Body of `POST /albums/{id}/artists`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LinkArtist {
    #[serde(default)]
    #[validate(range(min = 1, message = "Artist ID must be positive"))]
    pub artist_id: DbId,
}

/// An album together with its credited artists and its tracks.
#[derive(Debug, Clone, Serialize)]
pub struct AlbumDetail {
    #[serde(flatten)]
    pub album: Album,
    pub artists: Vec<Artist>,
    pub songs: Vec<Song>,
}
