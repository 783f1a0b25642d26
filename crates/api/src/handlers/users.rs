//! Handlers for the `/users` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use playlist_core::error::CoreError;
use playlist_core::types::DbId;
use playlist_db::models::user::{CreateUser, UpdateUser, User};
use playlist_db::repositories::UserRepo;
use playlist_db::DbPool;

use crate::error::{conflict_on_duplicate, AppResult};
use crate::extract::{IdPath, ValidatedJson};
use crate::handlers::lookup::ensure_user_exists;
use crate::state::AppState;

const EMAIL_TAKEN: &str = "Email already exists";

/// Fail with Conflict if `email` belongs to a user other than `exclude`.
async fn ensure_email_available(
    pool: &DbPool,
    email: &str,
    exclude: Option<DbId>,
) -> AppResult<()> {
    let existing = match exclude {
        Some(id) => UserRepo::find_by_email_excluding(pool, email, id).await?,
        None => UserRepo::find_by_email(pool, email).await?,
    };
    match existing {
        Some(_) => Err(CoreError::conflict(EMAIL_TAKEN).into()),
        None => Ok(()),
    }
}

/// GET /api/users
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users))
}

/// GET /api/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<Json<User>> {
    let user = ensure_user_exists(&state.pool, id).await?;
    Ok(Json(user))
}

/// POST /api/users
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    ensure_email_available(&state.pool, &input.email, None).await?;

    let user = UserRepo::create(&state.pool, &input)
        .await
        .map_err(|e| conflict_on_duplicate(e, EMAIL_TAKEN))?;

    tracing::info!(user_id = user.id, "User created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /api/users/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateUser>,
) -> AppResult<Json<User>> {
    ensure_user_exists(&state.pool, id).await?;
    if let Some(email) = &input.email {
        ensure_email_available(&state.pool, email, Some(id)).await?;
    }

    let user = UserRepo::update(&state.pool, id, &input)
        .await
        .map_err(|e| conflict_on_duplicate(e, EMAIL_TAKEN))?
        .ok_or(CoreError::not_found("User", id))?;

    tracing::info!(user_id = id, "User updated");
    Ok(Json(user))
}

/// DELETE /api/users/{id}
///
/// The user's playlists are removed with it.
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<StatusCode> {
    if UserRepo::delete(&state.pool, id).await? {
        tracing::info!(user_id = id, "User deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found("User", id).into())
    }
}
