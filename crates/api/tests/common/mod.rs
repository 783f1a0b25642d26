#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use playlist_api::config::{CorsOrigins, Environment, LogFormat, ServerConfig};
use playlist_api::router::build_app_router;
use playlist_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        database_max_connections: 1,
        cors_origins: CorsOrigins::Any,
        environment: Environment::Production,
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: SqlitePool) -> Router {
    build_app_with_config(pool, test_config())
}

pub fn build_app_with_config(pool: SqlitePool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config),
    };
    build_app_router(state).unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn with_json(app: Router, method: Method, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    with_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    with_json(app, Method::PUT, uri, body).await
}

/// POST a raw, possibly malformed, JSON body.
pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// POST `body` to `uri`, assert 201 and return the new row's id.
pub async fn create(pool: &SqlitePool, uri: &str, body: serde_json::Value) -> i64 {
    let response = post_json(build_test_app(pool.clone()), uri, body).await;
    assert_eq!(response.status(), StatusCode::CREATED, "POST {uri} failed");
    body_json(response).await["id"].as_i64().unwrap()
}

pub async fn create_user(pool: &SqlitePool, name: &str, email: &str) -> i64 {
    create(
        pool,
        "/api/users",
        serde_json::json!({"name": name, "email": email}),
    )
    .await
}

pub async fn create_artist(pool: &SqlitePool, name: &str) -> i64 {
    create(pool, "/api/artists", serde_json::json!({"name": name})).await
}

pub async fn create_album(pool: &SqlitePool, title: &str, release_year: i64) -> i64 {
    create(
        pool,
        "/api/albums",
        serde_json::json!({"title": title, "release_year": release_year}),
    )
    .await
}

pub async fn create_song(pool: &SqlitePool, title: &str, artist_id: i64, album_id: Option<i64>) -> i64 {
    create(
        pool,
        "/api/songs",
        serde_json::json!({
            "title": title,
            "duration": 200,
            "artist_ids": [artist_id],
            "album_id": album_id,
        }),
    )
    .await
}

pub async fn create_playlist(pool: &SqlitePool, name: &str, user_id: i64) -> i64 {
    create(
        pool,
        "/api/playlists",
        serde_json::json!({"name": name, "user_id": user_id}),
    )
    .await
}
