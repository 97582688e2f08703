use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use migration::MigratorTrait;
use sea_orm::Database;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn test_router() -> Router {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = engine::Engine::builder()
        .database(db)
        .build()
        .await
        .unwrap();

    server::router(server::ServerState {
        engine: Arc::new(engine),
    })
}

async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(payload) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, value)
}

fn bolts() -> Value {
    json!({
        "name": "Bulloni M8",
        "code": "BLT-M8",
        "quantity": 50,
        "unit_price_minor": 35,
        "location": "A-12",
        "category": "Fasteners",
        "min_stock": 10
    })
}

#[tokio::test]
async fn index_returns_welcome_message() {
    let router = test_router().await;

    let (status, body) = send(&router, "GET", "/api/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Scorta inventory API");
}

#[tokio::test]
async fn create_then_list_items() {
    let router = test_router().await;

    let (status, created) = send(&router, "POST", "/api/items", Some(bolts())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["name"], "Bulloni M8");
    assert_eq!(created["quantity"], 50);
    assert!(created["id"].is_string());

    let (status, listed) = send(&router, "GET", "/api/items", None).await;
    assert_eq!(status, StatusCode::OK);
    let items = listed.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], created["id"]);
}

#[tokio::test]
async fn create_applies_defaults() {
    let router = test_router().await;

    let (status, created) = send(
        &router,
        "POST",
        "/api/items",
        Some(json!({
            "name": "Viti",
            "code": "VT-1",
            "quantity": 3,
            "unit_price_minor": 10,
            "location": "B-1"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["category"], "General");
    assert_eq!(created["min_stock"], 10);
}

#[tokio::test]
async fn missing_item_returns_error_payload() {
    let router = test_router().await;

    for (method, body) in [
        ("GET", None),
        ("PUT", Some(json!({}))),
        ("DELETE", None),
    ] {
        let (status, payload) = send(&router, method, "/api/items/no-such-id", body).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(payload["error"], "Item not found");
    }
}

#[tokio::test]
async fn update_is_partial() {
    let router = test_router().await;
    let (_, created) = send(&router, "POST", "/api/items", Some(bolts())).await;
    let id = created["id"].as_str().unwrap();

    let (status, updated) = send(
        &router,
        "PUT",
        &format!("/api/items/{id}"),
        Some(json!({"quantity": 75, "name": "Bulloni M8 zincati"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["quantity"], 75);
    assert_eq!(updated["name"], "Bulloni M8 zincati");
    // Untouched fields survive.
    assert_eq!(updated["code"], "BLT-M8");
    assert_eq!(updated["location"], "A-12");
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let router = test_router().await;
    let (_, created) = send(&router, "POST", "/api/items", Some(bolts())).await;
    let id = created["id"].as_str().unwrap();

    let (status, deleted) = send(&router, "DELETE", &format!("/api/items/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["message"], "Item deleted successfully");

    let (status, body) = send(&router, "GET", &format!("/api/items/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Item not found");
}

fn movement(id: &str, kind: &str, quantity: i64) -> Value {
    json!({
        "item_id": id,
        "item_name": "Bulloni M8",
        "kind": kind,
        "quantity": quantity,
        "reason": "test",
        "actor": "tester"
    })
}

async fn item_quantity(router: &Router, id: &str) -> i64 {
    let (_, item) = send(router, "GET", &format!("/api/items/{id}"), None).await;
    item["quantity"].as_i64().unwrap()
}

#[tokio::test]
async fn movements_drive_item_quantity() {
    let router = test_router().await;
    let (_, created) = send(&router, "POST", "/api/items", Some(bolts())).await;
    let id = created["id"].as_str().unwrap();

    let (status, _) = send(
        &router,
        "POST",
        "/api/movements",
        Some(movement(id, "increase", 25)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(item_quantity(&router, id).await, 75);

    // Over-decrease floors at zero.
    let (status, _) = send(
        &router,
        "POST",
        "/api/movements",
        Some(movement(id, "decrease", 100)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(item_quantity(&router, id).await, 0);

    let (status, _) = send(
        &router,
        "POST",
        "/api/movements",
        Some(movement(id, "correction", 100)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(item_quantity(&router, id).await, 100);
}

#[tokio::test]
async fn unknown_movement_kind_is_rejected() {
    let router = test_router().await;
    let (_, created) = send(&router, "POST", "/api/items", Some(bolts())).await;
    let id = created["id"].as_str().unwrap();

    let (status, _) = send(
        &router,
        "POST",
        "/api/movements",
        Some(movement(id, "ajuste", 10)),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // Nothing moved.
    assert_eq!(item_quantity(&router, id).await, 50);
}

#[tokio::test]
async fn movement_against_missing_item_is_recorded() {
    let router = test_router().await;

    let (status, recorded) = send(
        &router,
        "POST",
        "/api/movements",
        Some(movement("no-such-id", "increase", 10)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, listed) = send(&router, "GET", "/api/movements", None).await;
    assert_eq!(status, StatusCode::OK);
    let movements = listed.as_array().unwrap();
    assert!(movements.iter().any(|m| m["id"] == recorded["id"]));
}

#[tokio::test]
async fn dashboard_stats_reflect_items() {
    let router = test_router().await;

    let mut low = bolts();
    low["quantity"] = json!(5);
    low["unit_price_minor"] = json!(2);
    send(&router, "POST", "/api/items", Some(low)).await;

    let mut high = bolts();
    high["quantity"] = json!(50);
    high["unit_price_minor"] = json!(1);
    high["category"] = json!("General");
    send(&router, "POST", "/api/items", Some(high)).await;

    let (status, stats) = send(&router, "GET", "/api/dashboard/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["total_items"], 2);
    assert_eq!(stats["total_quantity"], 55);
    assert_eq!(stats["total_value_minor"], 60);
    assert_eq!(stats["low_stock_items"], 1);
    assert_eq!(stats["categories"], 2);
}

#[tokio::test]
async fn register_and_login() {
    let router = test_router().await;

    let (status, user) = send(
        &router,
        "POST",
        "/api/users",
        Some(json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "s3cret"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    // The digest comes back, the plaintext never does.
    assert_ne!(user["password_digest"], "s3cret");
    assert!(user.get("password").is_none());

    let (status, logged) = send(
        &router,
        "POST",
        "/api/auth/login",
        Some(json!({"username": "alice", "password": "s3cret"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(logged["message"], "Login successful");
    assert_eq!(logged["user"]["username"], "alice");
    assert_eq!(logged["user"]["id"], user["id"]);

    let (status, rejected) = send(
        &router,
        "POST",
        "/api/auth/login",
        Some(json!({"username": "alice", "password": "wrong"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(rejected["error"], "Invalid credentials");
}
