//! Repository for the `songs` table.

use playlist_core::types::DbId;

use crate::models::playlist::PlaylistTrack;
use crate::models::song::{CreateSong, Song, SongDetail, UpdateSong};
use crate::repositories::{AlbumRepo, ArtistRepo};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, duration, file_url, album_id, created_at";

/// Same columns qualified with the `s` alias for joins.
const JOINED_COLUMNS: &str = "s.id, s.title, s.duration, s.file_url, s.album_id, s.created_at";

/// Provides CRUD operations for songs.
///
/// Artist credits are written separately through
/// [`SongArtistRepo`](crate::repositories::SongArtistRepo).
pub struct SongRepo;

impl SongRepo {
    /// Insert the song row itself, returning the stored row.
    pub async fn create(pool: &DbPool, input: &CreateSong) -> Result<Song, sqlx::Error> {
        let query = format!(
            "INSERT INTO songs (title, duration, file_url, album_id) VALUES (?1, ?2, ?3, ?4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Song>(&query)
            .bind(&input.title)
            .bind(input.duration)
            .bind(&input.file_url)
            .bind(input.album_id)
            .fetch_one(pool)
            .await
    }

    /// Find a song by internal ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Song>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM songs WHERE id = ?1");
        sqlx::query_as::<_, Song>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all songs ordered by most recently created first.
    pub async fn list(pool: &DbPool) -> Result<Vec<Song>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM songs ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Song>(&query).fetch_all(pool).await
    }

    /// Update a song. `title`, `duration` and `file_url` are coalesced;
    /// `album_id` is replaced (possibly with null) whenever it is present.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateSong,
    ) -> Result<Option<Song>, sqlx::Error> {
        let query = format!(
            "UPDATE songs SET
                title = COALESCE(?2, title),
                duration = COALESCE(?3, duration),
                file_url = COALESCE(?4, file_url),
                album_id = CASE WHEN ?5 THEN ?6 ELSE album_id END
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Song>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.duration)
            .bind(&input.file_url)
            .bind(input.album_id.is_some())
            .bind(input.album_id.flatten())
            .fetch_optional(pool)
            .await
    }

    /// Delete a song. Artist credits and playlist entries cascade.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM songs WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Songs credited to an artist, most recently created first.
    pub async fn list_for_artist(
        pool: &DbPool,
        artist_id: DbId,
    ) -> Result<Vec<Song>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM songs s
             JOIN song_artists sa ON s.id = sa.song_id
             WHERE sa.artist_id = ?1
             ORDER BY s.created_at DESC, s.id DESC"
        );
        sqlx::query_as::<_, Song>(&query)
            .bind(artist_id)
            .fetch_all(pool)
            .await
    }

    /// Songs belonging to an album, in insertion order.
    pub async fn list_for_album(pool: &DbPool, album_id: DbId) -> Result<Vec<Song>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM songs WHERE album_id = ?1 ORDER BY id ASC");
        sqlx::query_as::<_, Song>(&query)
            .bind(album_id)
            .fetch_all(pool)
            .await
    }

    /// Songs in a playlist with their position, lowest position first.
    ///
    /// Songs sharing a position are ordered by when they were added.
    pub async fn list_for_playlist(
        pool: &DbPool,
        playlist_id: DbId,
    ) -> Result<Vec<PlaylistTrack>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}, ps.position, ps.added_at FROM songs s
             JOIN playlist_songs ps ON s.id = ps.song_id
             WHERE ps.playlist_id = ?1
             ORDER BY ps.position ASC, ps.added_at ASC, s.id ASC"
        );
        sqlx::query_as::<_, PlaylistTrack>(&query)
            .bind(playlist_id)
            .fetch_all(pool)
            .await
    }

    /// Fetch a song with its artists and album.
    ///
    /// The reads are independent; concurrent writes between them may yield a
    /// mixed view.
    pub async fn find_detail(pool: &DbPool, id: DbId) -> Result<Option<SongDetail>, sqlx::Error> {
        let Some(song) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let artists = ArtistRepo::list_for_song(pool, id).await?;
        let album = match song.album_id {
            Some(album_id) => AlbumRepo::find_by_id(pool, album_id).await?,
            None => None,
        };
        Ok(Some(SongDetail {
            song,
            artists,
            album,
        }))
    }
}
