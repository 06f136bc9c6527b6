//! Wire-level tests for the REST surface.
//!
//! Tests cover:
//! - Success shapes (including the camelCase `stateId` field)
//! - 400 rejections: missing status, unknown state, unknown status value,
//!   unknown settings key, empty names
//! - Idempotent deletes over the wire
//! - The visited-states list and stats endpoints

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use statetrack::server::{config::Config, router, state::AppState};

async fn test_app() -> (Router, tempfile::TempDir) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let config = Config {
        port: 0,
        db_file: dir.path().join("api.db"),
        assets_dir: dir.path().to_path_buf(),
    };
    let app_state = AppState::new(config).await.expect("Failed to init state");
    (router(app_state), dir)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("request must not error");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body must collect")
        .to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body must be JSON")
    };
    (status, value)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_set_state_success_shape() {
    let (app, _dir) = test_app().await;

    let (status, body) = send(
        &app,
        post_json("/api/states/CA", json!({ "status": "together" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "success": true, "stateId": "CA", "status": "together" })
    );

    let (status, body) = send(&app, get("/api/states")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "CA": "together" }));
}

#[tokio::test]
async fn test_missing_status_is_rejected() {
    let (app, _dir) = test_app().await;

    let (status, body) = send(&app, post_json("/api/states/CA", json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Status is required");

    let (_, body) = send(&app, get("/api/states")).await;
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn test_unknown_state_and_status_are_rejected() {
    let (app, _dir) = test_app().await;

    let (status, body) = send(
        &app,
        post_json("/api/states/ZZ", json!({ "status": "ben" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Unknown state: ZZ");

    // "none" is expressed via DELETE, never stored as a status.
    let (status, body) = send(
        &app,
        post_json("/api/states/CA", json!({ "status": "none" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid status: none");
}

#[tokio::test]
async fn test_delete_is_idempotent_over_the_wire() {
    let (app, _dir) = test_app().await;

    send(&app, post_json("/api/states/WA", json!({ "status": "matt" }))).await;

    let (status, body) = send(&app, delete("/api/states/WA")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "stateId": "WA" }));

    // Absent row: still a success.
    let (status, _) = send(&app, delete("/api/states/WA")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, delete("/api/states/ZZ")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_settings_rejections_leave_store_untouched() {
    let (app, _dir) = test_app().await;

    let (status, body) = send(
        &app,
        post_json("/api/settings", json!({ "key": "theme", "value": {} })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Unknown settings key: theme");

    let (status, body) = send(
        &app,
        post_json(
            "/api/settings",
            json!({ "key": "names", "value": { "user1": "", "user2": "Y" } }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Names cannot be empty");

    // Whitespace-only trims to empty too.
    let (status, _) = send(
        &app,
        post_json(
            "/api/settings",
            json!({ "key": "names", "value": { "user1": "X", "user2": "   " } }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, get("/api/settings")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn test_settings_round_trip() {
    let (app, _dir) = test_app().await;

    let (status, body) = send(
        &app,
        post_json(
            "/api/settings",
            json!({ "key": "names", "value": { "user1": " Ben ", "user2": "Matt" } }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));

    let (_, body) = send(&app, get("/api/settings")).await;
    assert_eq!(body, json!({ "names": { "user1": "Ben", "user2": "Matt" } }));
}

#[tokio::test]
async fn test_list_endpoint_filters_and_sorts() {
    let (app, _dir) = test_app().await;

    send(&app, post_json("/api/states/CA", json!({ "status": "together" }))).await;
    send(&app, post_json("/api/states/TX", json!({ "status": "both" }))).await;
    send(&app, post_json("/api/states/NY", json!({ "status": "ben" }))).await;

    let (status, body) = send(&app, get("/api/list/user1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "id": "CA", "name": "California", "visitType": "Together" },
            { "id": "NY", "name": "New York", "visitType": "Individual" },
            { "id": "TX", "name": "Texas", "visitType": "Separately" },
        ])
    );

    // Visit-kind rank, then alphabetical within rank.
    let (_, body) = send(&app, get("/api/list/user1?sort=visitType")).await;
    let names: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["New York", "Texas", "California"]);

    // Exact-status categories carry no label.
    let (_, body) = send(&app, get("/api/list/both")).await;
    assert_eq!(body, json!([{ "id": "TX", "name": "Texas" }]));

    let (_, body) = send(&app, get("/api/list/together")).await;
    assert_eq!(body, json!([{ "id": "CA", "name": "California" }]));
}

#[tokio::test]
async fn test_list_endpoint_rejects_bad_input() {
    let (app, _dir) = test_app().await;

    let (status, body) = send(&app, get("/api/list/everyone")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Unknown category: everyone");

    let (status, body) = send(&app, get("/api/list/user1?sort=zigzag")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid sort order: zigzag");
}

#[tokio::test]
async fn test_stats_endpoint_uses_canonical_labels() {
    let (app, _dir) = test_app().await;

    let (status, body) = send(&app, get("/api/stats")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["counts"], json!({ "ben": 0, "matt": 0, "both": 0, "together": 0 }));
    assert_eq!(body["labels"]["ben"], "0/50 (0%)");

    send(&app, post_json("/api/states/CA", json!({ "status": "together" }))).await;
    send(&app, post_json("/api/states/NY", json!({ "status": "ben" }))).await;

    let (_, body) = send(&app, get("/api/stats")).await;
    assert_eq!(
        body["counts"],
        json!({ "ben": 2, "matt": 1, "both": 1, "together": 1 })
    );
    assert_eq!(body["labels"]["ben"], "2/50 (4%)");
    assert_eq!(body["labels"]["together"], "1/50 (2%)");
}

#[tokio::test]
async fn test_reset_clears_states_over_the_wire() {
    let (app, _dir) = test_app().await;

    send(&app, post_json("/api/states/MT", json!({ "status": "both" }))).await;

    let (status, body) = send(&app, post_json("/api/reset", json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));

    let (_, body) = send(&app, get("/api/states")).await;
    assert_eq!(body, json!({}));
}
