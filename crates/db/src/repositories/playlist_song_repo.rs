//! Repository for the `playlist_songs` junction table.
//!
//! Positions are written verbatim: nothing here renumbers neighbours, so
//! removals leave gaps and reorders may produce shared positions.

use playlist_core::types::DbId;

use crate::models::playlist::PlaylistSong;
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "playlist_id, song_id, position, added_at";

/// Maintains the ordered song list of each playlist.
pub struct PlaylistSongRepo;

impl PlaylistSongRepo {
    /// Insert a link at `position`.
    ///
    /// Fails with a unique violation if the song is already in the playlist.
    pub async fn add(
        pool: &DbPool,
        playlist_id: DbId,
        song_id: DbId,
        position: i64,
    ) -> Result<PlaylistSong, sqlx::Error> {
        let query = format!(
            "INSERT INTO playlist_songs (playlist_id, song_id, position) VALUES (?1, ?2, ?3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PlaylistSong>(&query)
            .bind(playlist_id)
            .bind(song_id)
            .bind(position)
            .fetch_one(pool)
            .await
    }

    /// Find the link between a playlist and a song.
    pub async fn find(
        pool: &DbPool,
        playlist_id: DbId,
        song_id: DbId,
    ) -> Result<Option<PlaylistSong>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM playlist_songs WHERE playlist_id = ?1 AND song_id = ?2");
        sqlx::query_as::<_, PlaylistSong>(&query)
            .bind(playlist_id)
            .bind(song_id)
            .fetch_optional(pool)
            .await
    }

    /// Highest position currently used in a playlist, or `None` when empty.
    pub async fn max_position(pool: &DbPool, playlist_id: DbId) -> Result<Option<i64>, sqlx::Error> {
        sqlx::query_scalar("SELECT MAX(position) FROM playlist_songs WHERE playlist_id = ?1")
            .bind(playlist_id)
            .fetch_one(pool)
            .await
    }

    /// Overwrite a link's position without checking for collisions.
    ///
    /// Returns `None` if the song is not in the playlist.
    pub async fn set_position(
        pool: &DbPool,
        playlist_id: DbId,
        song_id: DbId,
        position: i64,
    ) -> Result<Option<PlaylistSong>, sqlx::Error> {
        let query = format!(
            "UPDATE playlist_songs SET position = ?3 \
             WHERE playlist_id = ?1 AND song_id = ?2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PlaylistSong>(&query)
            .bind(playlist_id)
            .bind(song_id)
            .bind(position)
            .fetch_optional(pool)
            .await
    }

    /// Remove a song from a playlist. Remaining positions are left untouched.
    ///
    /// Returns `true` if a link was removed.
    pub async fn remove(pool: &DbPool, playlist_id: DbId, song_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM playlist_songs WHERE playlist_id = ?1 AND song_id = ?2")
            .bind(playlist_id)
            .bind(song_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
