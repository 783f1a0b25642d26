//! Handlers for the `/artists` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use playlist_core::error::CoreError;
use playlist_core::types::DbId;
use playlist_db::models::artist::{Artist, ArtistDetail, CreateArtist, UpdateArtist};
use playlist_db::repositories::ArtistRepo;

use crate::error::AppResult;
use crate::extract::{IdPath, ValidatedJson};
use crate::state::AppState;

/// GET /api/artists
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Artist>>> {
    let artists = ArtistRepo::list(&state.pool).await?;
    Ok(Json(artists))
}

/// GET /api/artists/{id}
///
/// Includes the artist's songs and albums.
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<Json<ArtistDetail>> {
    let detail = ArtistRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(CoreError::not_found("Artist", id))?;
    Ok(Json(detail))
}

/// POST /api/artists
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateArtist>,
) -> AppResult<(StatusCode, Json<Artist>)> {
    let artist = ArtistRepo::create(&state.pool, &input).await?;
    tracing::info!(artist_id = artist.id, name = %artist.name, "Artist created");
    Ok((StatusCode::CREATED, Json(artist)))
}

/// PUT /api/artists/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateArtist>,
) -> AppResult<Json<Artist>> {
    let artist = ArtistRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::not_found("Artist", id))?;
    Ok(Json(artist))
}

/// DELETE /api/artists/{id}
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<StatusCode> {
    if ArtistRepo::delete(&state.pool, id).await? {
        tracing::info!(artist_id = id, "Artist deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found("Artist", id).into())
    }
}
