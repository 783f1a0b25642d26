//! Repository for the `song_artists` junction table.

use playlist_core::types::DbId;

use crate::models::song::SongArtist;
use crate::DbPool;

/// Credits artists on songs.
pub struct SongArtistRepo;

impl SongArtistRepo {
    /// Credit `artist_id` on `song_id`.
    ///
    /// Fails with a unique violation if the pair already exists and with a
    /// foreign-key violation if either side is missing.
    pub async fn link(
        pool: &DbPool,
        song_id: DbId,
        artist_id: DbId,
    ) -> Result<SongArtist, sqlx::Error> {
        sqlx::query_as::<_, SongArtist>(
            "INSERT INTO song_artists (song_id, artist_id) VALUES (?1, ?2) \
             RETURNING song_id, artist_id",
        )
        .bind(song_id)
        .bind(artist_id)
        .fetch_one(pool)
        .await
    }
}
