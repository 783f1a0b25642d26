//! Handlers for the `/albums` resource and its artist credits.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use playlist_core::error::CoreError;
use playlist_core::types::DbId;
use playlist_db::models::album::{
    Album, AlbumArtist, AlbumDetail, CreateAlbum, LinkArtist, UpdateAlbum,
};
use playlist_db::repositories::{AlbumArtistRepo, AlbumRepo};

use crate::error::{conflict_on_duplicate, AppResult};
use crate::extract::{IdPath, ValidatedJson};
use crate::handlers::lookup::{ensure_album_exists, ensure_artist_exists};
use crate::state::AppState;

const ARTIST_ALREADY_LINKED: &str = "Artist already linked to this album";

/// GET /api/albums
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Album>>> {
    let albums = AlbumRepo::list(&state.pool).await?;
    Ok(Json(albums))
}

/// GET /api/albums/{id}
///
/// Includes the credited artists and the album's songs.
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<Json<AlbumDetail>> {
    let detail = AlbumRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(CoreError::not_found("Album", id))?;
    Ok(Json(detail))
}

/// POST /api/albums
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateAlbum>,
) -> AppResult<(StatusCode, Json<Album>)> {
    let album = AlbumRepo::create(&state.pool, &input).await?;
    tracing::info!(album_id = album.id, title = %album.title, "Album created");
    Ok((StatusCode::CREATED, Json(album)))
}

/// PUT /api/albums/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateAlbum>,
) -> AppResult<Json<Album>> {
    let album = AlbumRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::not_found("Album", id))?;
    Ok(Json(album))
}

/// DELETE /api/albums/{id}
///
/// Songs on the album are kept and detached.
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<StatusCode> {
    if AlbumRepo::delete(&state.pool, id).await? {
        tracing::info!(album_id = id, "Album deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found("Album", id).into())
    }
}

/// POST /api/albums/{id}/artists
///
/// An existing credit is a conflict; the unique key still guards the insert.
pub async fn link_artist(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidatedJson(input): ValidatedJson<LinkArtist>,
) -> AppResult<(StatusCode, Json<AlbumArtist>)> {
    ensure_album_exists(&state.pool, id).await?;
    ensure_artist_exists(&state.pool, input.artist_id).await?;
    if AlbumArtistRepo::find(&state.pool, id, input.artist_id)
        .await?
        .is_some()
    {
        return Err(CoreError::conflict(ARTIST_ALREADY_LINKED).into());
    }

    let link = AlbumArtistRepo::link(&state.pool, id, input.artist_id)
        .await
        .map_err(|e| conflict_on_duplicate(e, ARTIST_ALREADY_LINKED))?;

    tracing::info!(album_id = id, artist_id = input.artist_id, "Artist linked to album");
    Ok((StatusCode::CREATED, Json(link)))
}
