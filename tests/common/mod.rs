// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use vitals_tracker::config::Config;
use vitals_tracker::db::JsonDb;
use vitals_tracker::routes::create_router;
use vitals_tracker::services::SnapshotService;
use vitals_tracker::AppState;

/// Create an app over an existing data directory.
#[allow(dead_code)]
pub async fn create_app_at(data_dir: &Path) -> (axum::Router, Arc<AppState>) {
    let db = JsonDb::open(data_dir)
        .await
        .expect("Failed to open test data store");

    let config = Config {
        data_dir: data_dir.to_path_buf(),
        ..Config::default()
    };
    let snapshot_service = SnapshotService::new(db.clone());

    let state = Arc::new(AppState {
        config,
        db,
        snapshot_service,
    });

    (create_router(state.clone()), state)
}

/// Create a test app backed by a throwaway data directory.
/// Returns the router, the shared state, and the directory guard;
/// the files are deleted when the guard drops.
#[allow(dead_code)]
pub async fn create_test_app() -> (axum::Router, Arc<AppState>, TempDir) {
    let data_dir = TempDir::new().expect("Failed to create temp data dir");
    let (app, state) = create_app_at(data_dir.path()).await;
    (app, state, data_dir)
}

/// Profile payload used by most tests: alice, 160 cm, 60 kg, light activity.
#[allow(dead_code)]
pub fn alice_payload() -> serde_json::Value {
    serde_json::json!({
        "user_id": "alice",
        "name": "Alice Example",
        "dob": "1990-05-20",
        "sex": "female",
        "height_cm": 160.0,
        "weight_kg": 60.0,
        "activity_level": "light"
    })
}

/// POST a JSON payload to the app and return the response.
#[allow(dead_code)]
pub async fn post_json(
    app: &axum::Router,
    uri: &str,
    payload: &serde_json::Value,
) -> axum::response::Response {
    use tower::ServiceExt;

    app.clone()
        .oneshot(
            axum::http::Request::builder()
                .method("POST")
                .uri(uri)
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

/// GET a URI from the app and return the response.
#[allow(dead_code)]
pub async fn get(app: &axum::Router, uri: &str) -> axum::response::Response {
    use tower::ServiceExt;

    app.clone()
        .oneshot(
            axum::http::Request::builder()
                .method("GET")
                .uri(uri)
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
