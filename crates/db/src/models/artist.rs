use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use playlist_core::types::{DbId, Timestamp};

use crate::models::album::Album;
use crate::models::song::Song;

/// A row from the `artists` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Artist {
    pub id: DbId,
    pub name: String,
    pub bio: Option<String>,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new artist.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateArtist {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,
    #[validate(length(max = 2000, message = "Bio is too long"))]
    pub bio: Option<String>,
    #[validate(
        url(message = "Invalid URL format"),
        length(max = 500, message = "URL is too long")
    )]
    pub image_url: Option<String>,
}

/// DTO for updating an existing artist. Omitted fields keep their value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateArtist {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 2000, message = "Bio is too long"))]
    pub bio: Option<String>,
    #[validate(
        url(message = "Invalid URL format"),
        length(max = 500, message = "URL is too long")
    )]
    pub image_url: Option<String>,
}

/// An artist together with the songs and albums they are credited on.
#[derive(Debug, Clone, Serialize)]
pub struct ArtistDetail {
    #[serde(flatten)]
    pub artist: Artist,
    pub songs: Vec<Song>,
    pub albums: Vec<Album>,
}
