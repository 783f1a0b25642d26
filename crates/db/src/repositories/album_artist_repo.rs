//! Repository for the `album_artists` junction table.

use playlist_core::types::DbId;

use crate::models::album::AlbumArtist;
use crate::DbPool;

/// Credits artists on albums.
pub struct AlbumArtistRepo;

impl AlbumArtistRepo {
    /// Credit `artist_id` on `album_id`.
    ///
    /// Fails with a unique violation if the pair already exists.
    pub async fn link(
        pool: &DbPool,
        album_id: DbId,
        artist_id: DbId,
    ) -> Result<AlbumArtist, sqlx::Error> {
        sqlx::query_as::<_, AlbumArtist>(
            "INSERT INTO album_artists (album_id, artist_id) VALUES (?1, ?2) \
             RETURNING album_id, artist_id",
        )
        .bind(album_id)
        .bind(artist_id)
        .fetch_one(pool)
        .await
    }

    /// Find a single credit.
    pub async fn find(
        pool: &DbPool,
        album_id: DbId,
        artist_id: DbId,
    ) -> Result<Option<AlbumArtist>, sqlx::Error> {
        sqlx::query_as::<_, AlbumArtist>(
            "SELECT album_id, artist_id FROM album_artists WHERE album_id = ?1 AND artist_id = ?2",
        )
        .bind(album_id)
        .bind(artist_id)
        .fetch_optional(pool)
        .await
    }
}
