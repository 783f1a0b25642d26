//! Handlers for the `/songs` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use playlist_core::error::CoreError;
use playlist_core::types::DbId;
use playlist_db::models::song::{CreateSong, Song, SongDetail, UpdateSong};
use playlist_db::repositories::{SongArtistRepo, SongRepo};

use crate::error::AppResult;
use crate::extract::{IdPath, ValidatedJson};
use crate::handlers::lookup::{ensure_album_exists, ensure_artist_exists};
use crate::state::AppState;

/// GET /api/songs
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Song>>> {
    let songs = SongRepo::list(&state.pool).await?;
    Ok(Json(songs))
}

/// GET /api/songs/{id}
///
/// Includes the credited artists and the album, if any.
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<Json<SongDetail>> {
    let detail = SongRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(CoreError::not_found("Song", id))?;
    Ok(Json(detail))
}

/// POST /api/songs
///
/// Every referenced album and artist is checked before the song is
/// inserted. The song row and its artist credits are separate writes.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateSong>,
) -> AppResult<(StatusCode, Json<SongDetail>)> {
    if let Some(album_id) = input.album_id {
        ensure_album_exists(&state.pool, album_id).await?;
    }
    let artist_ids = input.distinct_artist_ids();
    for artist_id in &artist_ids {
        ensure_artist_exists(&state.pool, *artist_id).await?;
    }

    let song = SongRepo::create(&state.pool, &input).await?;
    for artist_id in &artist_ids {
        SongArtistRepo::link(&state.pool, song.id, *artist_id).await?;
    }

    tracing::info!(
        song_id = song.id,
        artist_count = artist_ids.len(),
        "Song created"
    );

    let detail = SongRepo::find_detail(&state.pool, song.id)
        .await?
        .ok_or(CoreError::not_found("Song", song.id))?;
    Ok((StatusCode::CREATED, Json(detail)))
}

/// PUT /api/songs/{id}
///
/// `album_id: null` detaches the song from its album.
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateSong>,
) -> AppResult<Json<Song>> {
    if let Some(Some(album_id)) = input.album_id {
        ensure_album_exists(&state.pool, album_id).await?;
    }

    let song = SongRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::not_found("Song", id))?;
    Ok(Json(song))
}

/// DELETE /api/songs/{id}
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<StatusCode> {
    if SongRepo::delete(&state.pool, id).await? {
        tracing::info!(song_id = id, "Song deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found("Song", id).into())
    }
}

/// GET /api/songs/artist/{artist_id}
///
/// An unknown artist yields an empty list.
pub async fn list_by_artist(
    State(state): State<AppState>,
    IdPath(artist_id): IdPath<DbId>,
) -> AppResult<Json<Vec<Song>>> {
    let songs = SongRepo::list_for_artist(&state.pool, artist_id).await?;
    Ok(Json(songs))
}

/// GET /api/songs/album/{album_id}
///
/// An unknown album yields an empty list.
pub async fn list_by_album(
    State(state): State<AppState>,
    IdPath(album_id): IdPath<DbId>,
) -> AppResult<Json<Vec<Song>>> {
    let songs = SongRepo::list_for_album(&state.pool, album_id).await?;
    Ok(Json(songs))
}
