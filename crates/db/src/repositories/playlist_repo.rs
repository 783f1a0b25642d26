//! Repository for the `playlists` table.

use playlist_core::types::DbId;

use crate::models::playlist::{CreatePlaylist, Playlist, PlaylistDetail, UpdatePlaylist};
use crate::repositories::{SongRepo, UserRepo};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, user_id, is_public, created_at";

/// Provides CRUD operations for playlists.
pub struct PlaylistRepo;

impl PlaylistRepo {
    /// Insert a new playlist, returning the stored row.
    pub async fn create(pool: &DbPool, input: &CreatePlaylist) -> Result<Playlist, sqlx::Error> {
        let query = format!(
            "INSERT INTO playlists (name, description, user_id, is_public) \
             VALUES (?1, ?2, ?3, ?4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Playlist>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.user_id)
            .bind(input.is_public)
            .fetch_one(pool)
            .await
    }

    /// Find a playlist by internal ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Playlist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM playlists WHERE id = ?1");
        sqlx::query_as::<_, Playlist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all playlists ordered by most recently created first.
    pub async fn list(pool: &DbPool) -> Result<Vec<Playlist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM playlists ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Playlist>(&query).fetch_all(pool).await
    }

    /// Playlists owned by a user, most recently created first.
    pub async fn list_for_user(pool: &DbPool, user_id: DbId) -> Result<Vec<Playlist>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM playlists WHERE user_id = ?1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Playlist>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update a playlist. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdatePlaylist,
    ) -> Result<Option<Playlist>, sqlx::Error> {
        let query = format!(
            "UPDATE playlists SET
                name = COALESCE(?2, name),
                description = COALESCE(?3, description),
                is_public = COALESCE(?4, is_public)
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Playlist>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.is_public)
            .fetch_optional(pool)
            .await
    }

    /// Delete a playlist. Its song entries cascade.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM playlists WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Fetch a playlist with its ordered songs and its owner.
    ///
    /// The reads are independent; concurrent writes between them may yield a
    /// mixed view.
    pub async fn find_detail(
        pool: &DbPool,
        id: DbId,
    ) -> Result<Option<PlaylistDetail>, sqlx::Error> {
        let Some(playlist) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let songs = SongRepo::list_for_playlist(pool, id).await?;
        let user = UserRepo::find_by_id(pool, playlist.user_id).await?;
        Ok(Some(PlaylistDetail {
            playlist,
            songs,
            user,
        }))
    }
}
