//! Repository for the `artists` table.

use playlist_core::types::DbId;

use crate::models::artist::{Artist, ArtistDetail, CreateArtist, UpdateArtist};
use crate::repositories::{AlbumRepo, SongRepo};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, bio, image_url, created_at";

/// Same columns qualified with the `a` alias for joins.
const JOINED_COLUMNS: &str = "a.id, a.name, a.bio, a.image_url, a.created_at";

/// Provides CRUD operations for artists.
pub struct ArtistRepo;

impl ArtistRepo {
    /// Insert a new artist, returning the stored row.
    pub async fn create(pool: &DbPool, input: &CreateArtist) -> Result<Artist, sqlx::Error> {
        let query = format!(
            "INSERT INTO artists (name, bio, image_url) VALUES (?1, ?2, ?3) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(&input.name)
            .bind(&input.bio)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// Find an artist by internal ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists WHERE id = ?1");
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all artists alphabetically.
    pub async fn list(pool: &DbPool) -> Result<Vec<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists ORDER BY name ASC, id ASC");
        sqlx::query_as::<_, Artist>(&query).fetch_all(pool).await
    }

    /// Update an artist. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateArtist,
    ) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!(
            "UPDATE artists SET
                name = COALESCE(?2, name),
                bio = COALESCE(?3, bio),
                image_url = COALESCE(?4, image_url)
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.bio)
            .bind(&input.image_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete an artist. Song and album credits cascade; songs and albums stay.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM artists WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Artists credited on a song, alphabetically.
    pub async fn list_for_song(pool: &DbPool, song_id: DbId) -> Result<Vec<Artist>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM artists a
             JOIN song_artists sa ON a.id = sa.artist_id
             WHERE sa.song_id = ?1
             ORDER BY a.name ASC, a.id ASC"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(song_id)
            .fetch_all(pool)
            .await
    }

    /// Artists credited on an album, alphabetically.
    pub async fn list_for_album(
        pool: &DbPool,
        album_id: DbId,
    ) -> Result<Vec<Artist>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM artists a
             JOIN album_artists aa ON a.id = aa.artist_id
             WHERE aa.album_id = ?1
             ORDER BY a.name ASC, a.id ASC"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(album_id)
            .fetch_all(pool)
            .await
    }

    /// Fetch an artist with their songs and albums.
    ///
    /// The three reads are independent; concurrent writes between them may
    /// yield a mixed view.
    pub async fn find_detail(
        pool: &DbPool,
        id: DbId,
    ) -> Result<Option<ArtistDetail>, sqlx::Error> {
        let Some(artist) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let songs = SongRepo::list_for_artist(pool, id).await?;
        let albums = AlbumRepo::list_for_artist(pool, id).await?;
        Ok(Some(ArtistDetail {
            artist,
            songs,
            albums,
        }))
    }
}
