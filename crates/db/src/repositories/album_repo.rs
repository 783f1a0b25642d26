//! Repository for the `albums` table.

use playlist_core::types::DbId;

use crate::models::album::{Album, AlbumDetail, CreateAlbum, UpdateAlbum};
use crate::repositories::{ArtistRepo, SongRepo};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, release_year, cover_art_url, created_at";

/// Same columns qualified with the `al` alias for joins.
const JOINED_COLUMNS: &str = "al.id, al.title, al.release_year, al.cover_art_url, al.created_at";

/// Provides CRUD operations for albums.
pub struct AlbumRepo;

impl AlbumRepo {
    /// Insert a new album, returning the stored row.
    pub async fn create(pool: &DbPool, input: &CreateAlbum) -> Result<Album, sqlx::Error> {
        let query = format!(
            "INSERT INTO albums (title, release_year, cover_art_url) VALUES (?1, ?2, ?3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Album>(&query)
            .bind(&input.title)
            .bind(input.release_year)
            .bind(&input.cover_art_url)
            .fetch_one(pool)
            .await
    }

    /// Find an album by internal ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Album>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM albums WHERE id = ?1");
        sqlx::query_as::<_, Album>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all albums, newest release first, then by title.
    ///
    /// Albums without a release year sort last.
    pub async fn list(pool: &DbPool) -> Result<Vec<Album>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM albums ORDER BY release_year DESC, title ASC, id ASC"
        );
        sqlx::query_as::<_, Album>(&query).fetch_all(pool).await
    }

    /// Update an album. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateAlbum,
    ) -> Result<Option<Album>, sqlx::Error> {
        let query = format!(
            "UPDATE albums SET
                title = COALESCE(?2, title),
                release_year = COALESCE(?3, release_year),
                cover_art_url = COALESCE(?4, cover_art_url)
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Album>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.release_year)
            .bind(&input.cover_art_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete an album. Its songs survive with `album_id` set to null and its
    /// artist credits cascade.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM albums WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Albums an artist is credited on, newest release first.
    pub async fn list_for_artist(
        pool: &DbPool,
        artist_id: DbId,
    ) -> Result<Vec<Album>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM albums al
             JOIN album_artists aa ON al.id = aa.album_id
             WHERE aa.artist_id = ?1
             ORDER BY al.release_year DESC, al.title ASC, al.id ASC"
        );
        sqlx::query_as::<_, Album>(&query)
            .bind(artist_id)
            .fetch_all(pool)
            .await
    }

    /// Fetch an album with its artists and songs.
    ///
    /// The three reads are independent; concurrent writes between them may
    /// yield a mixed view.
    pub async fn find_detail(pool: &DbPool, id: DbId) -> Result<Option<AlbumDetail>, sqlx::Error> {
        let Some(album) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let artists = ArtistRepo::list_for_album(pool, id).await?;
        let songs = SongRepo::list_for_album(pool, id).await?;
        Ok(Some(AlbumDetail {
            album,
            artists,
            songs,
        }))
    }
}
