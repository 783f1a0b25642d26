//! Tests for `AppError` → HTTP response mapping and the error-detail layer.
//!
//! The first group calls `IntoResponse` directly on `AppError` values; the
//! last group goes through the router to exercise the middleware.

mod common;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use sqlx::SqlitePool;

use playlist_api::config::Environment;
use playlist_api::error::{AppError, ErrorDetail};
use playlist_core::error::CoreError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: CoreError::NotFound maps to 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Song",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["status"], 404);
    assert_eq!(json["error"], "Song with id 42 not found");
}

// ---------------------------------------------------------------------------
// Test: CoreError::Validation maps to 400 and keeps the field list
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation(
        "duration: Duration must be positive, title: Title must be 1-255 characters".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], 400);
    assert_eq!(
        json["error"],
        "Validation failed: duration: Duration must be positive, title: Title must be 1-255 characters"
    );
}

// ---------------------------------------------------------------------------
// Test: AppError::BadRequest maps to 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("invalid field value".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "invalid field value");
}

// ---------------------------------------------------------------------------
// Test: CoreError::Conflict maps to 409 with the bare message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn conflict_error_returns_409() {
    let err = AppError::Core(CoreError::Conflict("Song already in playlist".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["status"], 409);
    assert_eq!(json["error"], "Song already in playlist");
}

// ---------------------------------------------------------------------------
// Test: CoreError::Internal maps to 500 and sanitizes the message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn core_internal_error_returns_500_and_sanitizes() {
    let err = AppError::Core(CoreError::Internal("secret path /etc/shadow".into()));

    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let detail = response.extensions().get::<ErrorDetail>().cloned();
    assert!(detail.unwrap().0.contains("/etc/shadow"));

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["error"], "Internal server error");
    assert_eq!(json["status"], 500);
    assert!(json.get("details").is_none());
}

// ---------------------------------------------------------------------------
// Test: sqlx errors are classified
// ---------------------------------------------------------------------------

#[tokio::test]
async fn row_not_found_returns_404() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Resource not found");
}

#[tokio::test]
async fn pool_closed_returns_500() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::PoolClosed)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Internal server error");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unique_violation_returns_409(pool: SqlitePool) {
    sqlx::query("INSERT INTO users (name, email) VALUES ('A', 'a@example.com')")
        .execute(&pool)
        .await
        .unwrap();
    let err = sqlx::query("INSERT INTO users (name, email) VALUES ('B', 'a@example.com')")
        .execute(&pool)
        .await
        .unwrap_err();

    let (status, json) = error_to_response(AppError::Database(err)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["status"], 409);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn foreign_key_violation_returns_409(pool: SqlitePool) {
    let err = sqlx::query("INSERT INTO playlists (name, user_id) VALUES ('Orphan', 999)")
        .execute(&pool)
        .await
        .unwrap_err();

    let (status, _) = error_to_response(AppError::Database(err)).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

// ---------------------------------------------------------------------------
// Test: details are attached to 500s only in development mode
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn development_mode_exposes_details(pool: SqlitePool) {
    let mut config = common::test_config();
    config.environment = Environment::Development;
    let app = common::build_app_with_config(pool.clone(), config);

    // A closed pool makes every query fail with an internal error.
    pool.close().await;
    let response = common::get(app, "/api/users").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = common::body_json(response).await;
    assert_eq!(json["error"], "Internal server error");
    assert_eq!(json["status"], 500);
    assert!(json["details"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn production_mode_hides_details(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());

    pool.close().await;
    let response = common::get(app, "/api/users").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = common::body_json(response).await;
    assert_eq!(json["error"], "Internal server error");
    assert!(json.get("details").is_none());
}

// ---------------------------------------------------------------------------
// Test: extractor rejections become 400 JSON bodies
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn malformed_json_returns_400(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = common::post_raw(app, "/api/users", "{\"name\": ").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = common::body_json(response).await;
    assert_eq!(json["status"], 400);
    assert!(json["error"].as_str().unwrap().starts_with("Invalid request body"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn wrong_json_type_returns_400(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = common::post_json(
        app,
        "/api/songs",
        serde_json::json!({"title": "X", "duration": "long", "artist_ids": [1]}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn non_numeric_id_returns_400(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/songs/abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = common::body_json(response).await;
    assert!(json["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid path parameter"));
}
