//! HTTP-level tests for the client REST surface
//!
//! Full round trips: JSON → HTTP request → handler → ClientService → HTTP
//! response → JSON, against the composed application shell.

use axum::http::StatusCode;
use axum_test::TestServer;
use clientele::prelude::*;
use serde_json::{Value, json};
use std::sync::Arc;

fn make_server() -> TestServer {
    let service = Arc::new(InMemoryClientService::new());
    let state = AppState::new(service);
    let router = AppShell::new()
        .with_group("/clients", build_client_routes(state))
        .build();
    TestServer::new(router)
}

fn sample_client() -> Value {
    json!({
        "client_id": "CL001",
        "client_name": "Acme",
        "bu": "RM",
        "billing_method": "Credit Card",
        "email_id": "a@b.com",
        "first_name": "A",
        "last_name": "B",
        "location": "Japan",
        "currency": "JPY"
    })
}

// ==============================================================
// Create
// ==============================================================

#[tokio::test]
async fn test_create_returns_created_record() {
    let server = make_server();

    let response = server.post("/clients").json(&sample_client()).await;
    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(body["client_id"], "CL001");
    assert_eq!(body["client_name"], "Acme");
    assert_eq!(body["currency"], "JPY");
}

#[tokio::test]
async fn test_create_assigns_sequential_ids_ignoring_payload_id() {
    let server = make_server();

    let mut first = sample_client();
    first["client_id"] = json!("CL900");
    let created: Value = server.post("/clients").json(&first).await.json();
    assert_eq!(created["client_id"], "CL001");

    let second: Value = server.post("/clients").json(&sample_client()).await.json();
    assert_eq!(second["client_id"], "CL002");
}

#[tokio::test]
async fn test_create_missing_required_fields_is_400() {
    let server = make_server();

    let response = server
        .post("/clients")
        .json(&json!({"client_name": "Acme"}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["code"], "VALIDATION_ERROR");
    let fields = body["details"]["fields"].as_array().unwrap();
    assert!(
        fields
            .iter()
            .any(|f| f["field"] == "email_id")
    );
}

#[tokio::test]
async fn test_create_rejects_malformed_email() {
    let server = make_server();

    let mut payload = sample_client();
    payload["email_id"] = json!("not-an-email");

    let response = server.post("/clients").json(&payload).await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

// ==============================================================
// List
// ==============================================================

#[tokio::test]
async fn test_list_starts_empty() {
    let server = make_server();

    let response = server.get("/clients").await;
    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_created_record_appears_in_list_exactly() {
    let server = make_server();

    let response = server.post("/clients").json(&sample_client()).await;
    assert!(response.status_code().is_success());

    let listed: Vec<Value> = server.get("/clients").await.json();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], sample_client());
}

// ==============================================================
// Update
// ==============================================================

#[tokio::test]
async fn test_update_overwrites_record() {
    let server = make_server();

    let created: Value = server.post("/clients").json(&sample_client()).await.json();
    let id = created["client_id"].as_str().unwrap();

    let mut changed = sample_client();
    changed["client_name"] = json!("Acme Corp");
    changed["billing_method"] = json!("Bank Transfer");

    let response = server.put(&format!("/clients/{}", id)).json(&changed).await;
    response.assert_status(StatusCode::OK);

    let listed: Vec<Value> = server.get("/clients").await.json();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["client_name"], "Acme Corp");
    assert_eq!(listed[0]["billing_method"], "Bank Transfer");
}

#[tokio::test]
async fn test_update_keeps_path_id_over_payload_id() {
    let server = make_server();

    let created: Value = server.post("/clients").json(&sample_client()).await.json();
    let id = created["client_id"].as_str().unwrap();

    let mut changed = sample_client();
    changed["client_id"] = json!("CL555");

    let updated: Value = server
        .put(&format!("/clients/{}", id))
        .json(&changed)
        .await
        .json();
    assert_eq!(updated["client_id"], id);
}

#[tokio::test]
async fn test_update_unknown_id_is_404() {
    let server = make_server();

    let response = server
        .put("/clients/CL042")
        .json(&sample_client())
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["code"], "CLIENT_NOT_FOUND");
    assert_eq!(body["details"]["client_id"], "CL042");
}

// ==============================================================
// Shell
// ==============================================================

#[tokio::test]
async fn test_health_check() {
    let server = make_server();

    let response = server.get("/health").await;
    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_unmatched_route_renders_generic_404() {
    let server = make_server();

    let response = server.get("/projects/none").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(body["message"], "resource not found");
}

#[tokio::test]
async fn test_static_dir_serves_assets() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("hello.txt"), "hi there").unwrap();

    let service = Arc::new(InMemoryClientService::new());
    let state = AppState::new(service);
    let router = AppShell::new()
        .with_group("/clients", build_client_routes(state))
        .with_static_dir(dir.path())
        .build();
    let server = TestServer::new(router);

    let response = server.get("/hello.txt").await;
    response.assert_status(StatusCode::OK);
    response.assert_text("hi there");

    // Unknown paths still fall through to the generic 404 body
    let missing = server.get("/nope.txt").await;
    missing.assert_status(StatusCode::NOT_FOUND);
}

// ==============================================================
// End to end (spec sample record)
// ==============================================================

#[tokio::test]
async fn test_post_then_list_round_trip() {
    let server = make_server();

    let record = json!({
        "client_id": "CL001",
        "client_name": "Acme",
        "bu": "RM",
        "billing_method": "Credit Card",
        "email_id": "a@b.com",
        "first_name": "A",
        "last_name": "B",
        "location": "Japan",
        "currency": "JPY"
    });

    let response = server.post("/clients").json(&record).await;
    response.assert_status(StatusCode::CREATED);

    let listed: Vec<Value> = server.get("/clients").await.json();
    assert!(listed.contains(&record));
}
