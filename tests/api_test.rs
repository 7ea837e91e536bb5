//! HTTP API tests driven through the router with `oneshot`

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use leadbook::adapters::memory::MemoryLeadStore;
use leadbook::api::{app_router, AppState};
use leadbook::config::ServerConfig;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn build_test_router() -> Router {
    let config = ServerConfig::default();
    let state = AppState::new(Arc::new(MemoryLeadStore::new()), &config);
    app_router(state, &config)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn jane() -> Value {
    json!({
        "first_name": "Jane",
        "last_name": "Doe",
        "email": "jane@example.com",
        "phone": "",
        "budget_min": 250000,
        "budget_max": null,
        "property_type": "condo"
    })
}

#[tokio::test]
async fn test_health_checks() {
    let app = build_test_router();

    let (status, body) = send(&app, Method::GET, "/healthz", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = send(&app, Method::GET, "/readyz", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["store"], "memory");
}

#[tokio::test]
async fn test_create_and_fetch_lead() {
    let app = build_test_router();

    let (status, created) = send(&app, Method::POST, "/api/leads", Some(jane())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "new");
    assert_eq!(created["phone"], Value::Null);
    assert_eq!(created["budget_min"], 250000);

    let id = created["id"].as_i64().unwrap();
    let (status, fetched) = send(&app, Method::GET, &format!("/api/leads/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["email"], "jane@example.com");
    assert_eq!(fetched["property_type"], "condo");
}

#[tokio::test]
async fn test_create_validation_messages() {
    let app = build_test_router();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/leads",
        Some(json!({ "first_name": "Jane", "email": "jane@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "First name, last name, and email are required");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/leads",
        Some(json!({ "first_name": "Jane", "last_name": "Doe", "email": "jane" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid email format");

    send(&app, Method::POST, "/api/leads", Some(jane())).await;
    let (status, body) = send(&app, Method::POST, "/api/leads", Some(jane())).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "A lead with this email already exists");
}

#[tokio::test]
async fn test_invalid_and_missing_ids() {
    let app = build_test_router();

    let (status, body) = send(&app, Method::GET, "/api/leads/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid lead ID");

    let (status, body) = send(&app, Method::GET, "/api/leads/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Lead not found");

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/leads/999",
        Some(json!({ "status": "contacted" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Lead not found");

    let (status, _) = send(&app, Method::DELETE, "/api/leads/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_and_delete() {
    let app = build_test_router();
    let (_, created) = send(&app, Method::POST, "/api/leads", Some(jane())).await;
    let uri = format!("/api/leads/{}", created["id"]);

    let (status, body) = send(&app, Method::PUT, &uri, Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No valid fields to update");

    let (status, updated) = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({ "status": "qualified", "budget_min": null, "notes": "Call Friday" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "qualified");
    assert_eq!(updated["budget_min"], Value::Null);
    assert_eq!(updated["notes"], "Call Friday");
    assert_eq!(updated["first_name"], "Jane");

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Lead deleted successfully");

    let (status, _) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_with_filters_and_pagination() {
    let app = build_test_router();
    for (first, email, status) in [
        ("Ann", "ann@example.com", "new"),
        ("Bob", "bob@example.com", "contacted"),
        ("Cat", "cat@example.com", "new"),
    ] {
        send(
            &app,
            Method::POST,
            "/api/leads",
            Some(json!({ "first_name": first, "last_name": "Lee", "email": email, "status": status })),
        )
        .await;
    }

    let (status, body) = send(&app, Method::GET, "/api/leads", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["leads"].as_array().unwrap().len(), 3);
    assert_eq!(
        body["pagination"],
        json!({ "page": 1, "limit": 20, "total": 3, "totalPages": 1 })
    );

    let (_, body) = send(&app, Method::GET, "/api/leads?status=new&limit=1&page=2", None).await;
    assert_eq!(body["leads"].as_array().unwrap().len(), 1);
    assert_eq!(
        body["pagination"],
        json!({ "page": 2, "limit": 1, "total": 2, "totalPages": 2 })
    );

    let (_, body) = send(&app, Method::GET, "/api/leads?search=BOB", None).await;
    assert_eq!(body["pagination"]["total"], 1);
    assert_eq!(body["leads"][0]["email"], "bob@example.com");

    let (status, body) = send(&app, Method::GET, "/api/leads?page=0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Page must be a positive integer");
}

#[tokio::test]
async fn test_import_endpoint() {
    let app = build_test_router();

    let csv = "First Name,Last Name,Email Address\nJane,Doe,jane@example.com\nBad,Row,nope";
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/leads/import",
        Some(json!({ "csvData": csv })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "imported": 1, "skipped": 1, "errors": ["Row 3: Invalid email format"] })
    );

    for payload in [json!({}), json!({ "csvData": 7 }), json!({ "csvData": "" })] {
        let (status, body) = send(&app, Method::POST, "/api/leads/import", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "CSV data is required");
    }

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/leads/import",
        Some(json!({ "csvData": "First Name,Last Name,Email" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "CSV must contain at least a header row and one data row"
    );
}

#[tokio::test]
async fn test_export_endpoint() {
    let app = build_test_router();
    send(&app, Method::POST, "/api/leads", Some(jane())).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/leads/export?property_type=condo")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/csv");
    let disposition = response.headers()[header::CONTENT_DISPOSITION]
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\"buyer-leads-"));
    assert!(disposition.ends_with(".csv\""));

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("ID,First Name,Last Name,Email"));
    assert!(lines[1].contains("\"jane@example.com\""));
}
