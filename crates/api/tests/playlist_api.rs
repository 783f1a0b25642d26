//! HTTP-level integration tests for the `/api/playlists` endpoints,
//! including the ordered song list.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_artist, create_playlist, create_song, create_user, delete, get, post_json,
    put_json,
};
use playlist_core::ordering::POSITION_EXHAUSTED;
use sqlx::SqlitePool;

struct Fixture {
    playlist: i64,
    songs: Vec<i64>,
}

/// A user with one empty playlist and `song_count` songs by one artist.
async fn fixture(pool: &SqlitePool, song_count: usize) -> Fixture {
    let user = create_user(pool, "Alice", "alice@example.com").await;
    let playlist = create_playlist(pool, "Road Trip", user).await;
    let artist = create_artist(pool, "The Midnight").await;

    let mut songs = Vec::with_capacity(song_count);
    for n in 0..song_count {
        songs.push(create_song(pool, &format!("Track {n}"), artist, None).await);
    }
    Fixture { playlist, songs }
}

async fn add_song(pool: &SqlitePool, playlist: i64, body: serde_json::Value) -> axum::response::Response {
    let app = common::build_test_app(pool.clone());
    post_json(app, &format!("/api/playlists/{playlist}/songs"), body).await
}

async fn track_positions(pool: &SqlitePool, playlist: i64) -> Vec<(i64, i64)> {
    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/playlists/{playlist}")).await).await;
    json["songs"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| (t["id"].as_i64().unwrap(), t["position"].as_i64().unwrap()))
        .collect()
}

// ---------------------------------------------------------------------------
// Playlist CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_playlist_defaults_to_public(pool: SqlitePool) {
    let user = create_user(&pool, "Alice", "alice@example.com").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/playlists",
        serde_json::json!({"name": "Chill", "user_id": user}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Chill");
    assert_eq!(json["user_id"], user);
    assert_eq!(json["is_public"], true);
    assert!(json["description"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_playlist_for_missing_user_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/playlists",
        serde_json::json!({"name": "Orphan", "user_id": 42}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "User with id 42 not found");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_playlist_keeps_omitted_fields(pool: SqlitePool) {
    let user = create_user(&pool, "Alice", "alice@example.com").await;
    let playlist = create_playlist(&pool, "Focus", user).await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/playlists/{playlist}"),
        serde_json::json!({"is_public": false, "description": "Deep work"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Focus");
    assert_eq!(json["is_public"], false);
    assert_eq!(json["description"], "Deep work");
    assert_eq!(json["user_id"], user);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_playlists_by_user(pool: SqlitePool) {
    let alice = create_user(&pool, "Alice", "alice@example.com").await;
    let bob = create_user(&pool, "Bob", "bob@example.com").await;
    create_playlist(&pool, "Alice 1", alice).await;
    create_playlist(&pool, "Alice 2", alice).await;
    create_playlist(&pool, "Bob 1", bob).await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/playlists/user/{alice}")).await).await;
    let playlists = json.as_array().unwrap();
    assert_eq!(playlists.len(), 2);
    assert!(playlists.iter().all(|p| p["user_id"] == alice));

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/playlists/user/999").await).await;
    assert!(json.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_playlist_includes_owner(pool: SqlitePool) {
    let fx = fixture(&pool, 0).await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/playlists/{}", fx.playlist)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Road Trip");
    assert_eq!(json["user"]["name"], "Alice");
    assert!(json["songs"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_playlist(pool: SqlitePool) {
    let fx = fixture(&pool, 1).await;
    add_song(&pool, fx.playlist, serde_json::json!({"song_id": fx.songs[0]})).await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/playlists/{}", fx.playlist)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/playlists/{}", fx.playlist)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The song itself survives.
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/songs/{}", fx.songs[0])).await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Playlist songs
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_first_song_gets_position_one(pool: SqlitePool) {
    let fx = fixture(&pool, 1).await;

    let response = add_song(&pool, fx.playlist, serde_json::json!({"song_id": fx.songs[0]})).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["playlist_id"], fx.playlist);
    assert_eq!(json["song_id"], fx.songs[0]);
    assert_eq!(json["position"], 1);
    assert!(json["added_at"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_appended_song_goes_after_max_position(pool: SqlitePool) {
    let fx = fixture(&pool, 2).await;
    add_song(
        &pool,
        fx.playlist,
        serde_json::json!({"song_id": fx.songs[0], "position": 4}),
    )
    .await;

    let response = add_song(&pool, fx.playlist, serde_json::json!({"song_id": fx.songs[1]})).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["position"], 5);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_append_after_largest_position_returns_409(pool: SqlitePool) {
    let fx = fixture(&pool, 2).await;
    let response = add_song(
        &pool,
        fx.playlist,
        serde_json::json!({"song_id": fx.songs[0], "position": i64::MAX}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = add_song(&pool, fx.playlist, serde_json::json!({"song_id": fx.songs[1]})).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["error"], POSITION_EXHAUSTED);
    assert_eq!(
        track_positions(&pool, fx.playlist).await,
        vec![(fx.songs[0], i64::MAX)]
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_duplicate_song_returns_409(pool: SqlitePool) {
    let fx = fixture(&pool, 1).await;
    add_song(&pool, fx.playlist, serde_json::json!({"song_id": fx.songs[0]})).await;

    let response = add_song(&pool, fx.playlist, serde_json::json!({"song_id": fx.songs[0]})).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["error"], "Song already in playlist");
    assert_eq!(track_positions(&pool, fx.playlist).await, vec![(fx.songs[0], 1)]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_add_missing_song_or_playlist_returns_404(pool: SqlitePool) {
    let fx = fixture(&pool, 1).await;

    let response = add_song(&pool, fx.playlist, serde_json::json!({"song_id": 999})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = add_song(&pool, 999, serde_json::json!({"song_id": fx.songs[0]})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_add_song_rejects_non_positive_position(pool: SqlitePool) {
    let fx = fixture(&pool, 1).await;

    let response = add_song(
        &pool,
        fx.playlist,
        serde_json::json!({"song_id": fx.songs[0], "position": 0}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Validation failed: position: Position must be positive"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_remove_song_leaves_gap(pool: SqlitePool) {
    let fx = fixture(&pool, 3).await;
    for song in &fx.songs {
        add_song(&pool, fx.playlist, serde_json::json!({"song_id": song})).await;
    }

    let uri = format!("/api/playlists/{}/songs/{}", fx.playlist, fx.songs[1]);
    let app = common::build_test_app(pool.clone());
    let response = delete(app, &uri).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    assert_eq!(
        track_positions(&pool, fx.playlist).await,
        vec![(fx.songs[0], 1), (fx.songs[2], 3)]
    );

    let app = common::build_test_app(pool);
    let response = delete(app, &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_reorder_allows_shared_position(pool: SqlitePool) {
    let fx = fixture(&pool, 2).await;
    for song in &fx.songs {
        add_song(&pool, fx.playlist, serde_json::json!({"song_id": song})).await;
    }

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/playlists/{}/songs/{}/position", fx.playlist, fx.songs[1]),
        serde_json::json!({"new_position": 1}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["song_id"], fx.songs[1]);
    assert_eq!(json["position"], 1);

    let positions: Vec<i64> = track_positions(&pool, fx.playlist)
        .await
        .into_iter()
        .map(|(_, position)| position)
        .collect();
    assert_eq!(positions, vec![1, 1]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_reorder_song_not_in_playlist_returns_404(pool: SqlitePool) {
    let fx = fixture(&pool, 1).await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/playlists/{}/songs/{}/position", fx.playlist, fx.songs[0]),
        serde_json::json!({"new_position": 2}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_deleting_song_removes_it_from_playlist(pool: SqlitePool) {
    let fx = fixture(&pool, 2).await;
    for song in &fx.songs {
        add_song(&pool, fx.playlist, serde_json::json!({"song_id": song})).await;
    }

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/songs/{}", fx.songs[0])).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    assert_eq!(track_positions(&pool, fx.playlist).await, vec![(fx.songs[1], 2)]);
}
