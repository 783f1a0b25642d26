//! Handlers for the `/playlists` resource and its ordered song list.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use playlist_core::error::CoreError;
use playlist_core::ordering::next_position;
use playlist_core::types::DbId;
use playlist_db::models::playlist::{
    AddPlaylistSong, CreatePlaylist, Playlist, PlaylistDetail, PlaylistSong,
    ReorderPlaylistSong, UpdatePlaylist,
};
use playlist_db::repositories::{PlaylistRepo, PlaylistSongRepo};

use crate::error::{conflict_on_duplicate, AppResult};
use crate::extract::{IdPath, ValidatedJson};
use crate::handlers::lookup::{
    ensure_playlist_entry_exists, ensure_playlist_exists, ensure_song_exists, ensure_user_exists,
};
use crate::state::AppState;

/// GET /api/playlists
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Playlist>>> {
    let playlists = PlaylistRepo::list(&state.pool).await?;
    Ok(Json(playlists))
}

/// GET /api/playlists/{id}
///
/// Includes the ordered songs and the owner.
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<Json<PlaylistDetail>> {
    let detail = PlaylistRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(CoreError::not_found("Playlist", id))?;
    Ok(Json(detail))
}

/// GET /api/playlists/user/{user_id}
///
/// An unknown user yields an empty list.
pub async fn list_by_user(
    State(state): State<AppState>,
    IdPath(user_id): IdPath<DbId>,
) -> AppResult<Json<Vec<Playlist>>> {
    let playlists = PlaylistRepo::list_for_user(&state.pool, user_id).await?;
    Ok(Json(playlists))
}

/// POST /api/playlists
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreatePlaylist>,
) -> AppResult<(StatusCode, Json<Playlist>)> {
    ensure_user_exists(&state.pool, input.user_id).await?;

    let playlist = PlaylistRepo::create(&state.pool, &input).await?;
    tracing::info!(
        playlist_id = playlist.id,
        user_id = playlist.user_id,
        "Playlist created"
    );
    Ok((StatusCode::CREATED, Json(playlist)))
}

/// PUT /api/playlists/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdatePlaylist>,
) -> AppResult<Json<Playlist>> {
    let playlist = PlaylistRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::not_found("Playlist", id))?;
    Ok(Json(playlist))
}

/// DELETE /api/playlists/{id}
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<StatusCode> {
    if PlaylistRepo::delete(&state.pool, id).await? {
        tracing::info!(playlist_id = id, "Playlist deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found("Playlist", id).into())
    }
}

/// POST /api/playlists/{id}/songs
///
/// Without an explicit position the song goes after the current last one.
pub async fn add_song(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidatedJson(input): ValidatedJson<AddPlaylistSong>,
) -> AppResult<(StatusCode, Json<PlaylistSong>)> {
    ensure_playlist_exists(&state.pool, id).await?;
    ensure_song_exists(&state.pool, input.song_id).await?;

    let position = match input.position {
        Some(position) => position,
        None => next_position(PlaylistSongRepo::max_position(&state.pool, id).await?)?,
    };

    let entry = PlaylistSongRepo::add(&state.pool, id, input.song_id, position)
        .await
        .map_err(|e| conflict_on_duplicate(e, "Song already in playlist"))?;

    tracing::info!(
        playlist_id = id,
        song_id = input.song_id,
        position,
        "Song added to playlist"
    );
    Ok((StatusCode::CREATED, Json(entry)))
}

/// DELETE /api/playlists/{id}/songs/{song_id}
///
/// Remaining positions are not renumbered.
pub async fn remove_song(
    State(state): State<AppState>,
    IdPath((id, song_id)): IdPath<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    ensure_playlist_entry_exists(&state.pool, id, song_id).await?;

    if PlaylistSongRepo::remove(&state.pool, id, song_id).await? {
        tracing::info!(playlist_id = id, song_id, "Song removed from playlist");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found("Playlist song", song_id).into())
    }
}

/// PUT /api/playlists/{id}/songs/{song_id}/position
///
/// The new position is written as-is, even if another song already holds it.
pub async fn reorder_song(
    State(state): State<AppState>,
    IdPath((id, song_id)): IdPath<(DbId, DbId)>,
    ValidatedJson(input): ValidatedJson<ReorderPlaylistSong>,
) -> AppResult<Json<PlaylistSong>> {
    ensure_playlist_entry_exists(&state.pool, id, song_id).await?;

    let entry = PlaylistSongRepo::set_position(&state.pool, id, song_id, input.new_position)
        .await?
        .ok_or(CoreError::not_found("Playlist song", song_id))?;

    tracing::info!(
        playlist_id = id,
        song_id,
        position = entry.position,
        "Playlist song moved"
    );
    Ok(Json(entry))
}
