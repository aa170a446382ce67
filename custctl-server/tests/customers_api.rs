//! Router-level tests for the customer endpoints
//!
//! Tests without a database use a lazy pool pointed at a closed port: input
//! validation must reject before any connection is attempted, and storage
//! failures must come back as ordinary 5xx responses.
//!
//! Database-backed tests run with: DATABASE_URL=postgres://... cargo test -p custctl-server -- --ignored

use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

use custctl_server::db::{create_lazy_pool, ensure_schema, PoolConfig};
use custctl_server::{build_router, ServerConfig};

fn unreachable_app() -> Router {
    let mut config = PoolConfig::new("postgres://custctl@127.0.0.1:1/custctl");
    config.acquire_timeout = Duration::from_millis(250);
    let pool = create_lazy_pool(&config).expect("lazy pool");
    build_router(pool, &ServerConfig::default())
}

async fn app_with_db(pool: PgPool) -> Router {
    ensure_schema(&pool).await.expect("schema");
    build_router(pool, &ServerConfig::default())
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.map(|b| Body::from(b.to_owned())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

// === Validation (no database) ===

#[tokio::test]
async fn non_integer_id_is_400() {
    let app = unreachable_app();

    for (method, body) in [
        ("GET", None),
        ("PUT", Some(r#"{"name":"Ann"}"#)),
        ("DELETE", None),
    ] {
        let (status, body) = send(&app, method, "/customers/abc", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{method}");
        assert_eq!(body["error"], "validation_error");
        assert_eq!(body["message"], "invalid id 'abc': must be an integer");
    }
}

#[tokio::test]
async fn malformed_body_is_400() {
    let app = unreachable_app();

    for body in [
        "",
        "{",
        r#"{"name": 42}"#,
        r#"["Ann"]"#,
        r#"["Ann","ann@x.com","active"]"#,
        r#""Ann""#,
        r#"{"name":"A\u0000B"}"#,
    ] {
        let (status, resp) = send(&app, "POST", "/customers", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "POST body {body:?}");
        assert_eq!(resp["error"], "validation_error");

        let (status, _) = send(&app, "PUT", "/customers/1", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "PUT body {body:?}");
    }
}

#[tokio::test]
async fn oversized_body_is_413() {
    let app = unreachable_app();
    let body = format!(r#"{{"name":"{}"}}"#, "a".repeat(3 * 1024 * 1024));

    let (status, resp) = send(&app, "POST", "/customers", Some(body.as_str())).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(resp["error"], "payload_too_large");

    let (status, _) = send(&app, "PUT", "/customers/1", Some(body.as_str())).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn put_reports_bad_id_before_bad_body() {
    let app = unreachable_app();

    let (status, body) = send(&app, "PUT", "/customers/1.5", Some("{")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "invalid id '1.5': must be an integer");
}

// === Storage failures stay request-scoped ===

#[tokio::test]
async fn unreachable_database_is_500_not_a_crash() {
    let app = unreachable_app();

    let (status, body) = send(&app, "GET", "/customers", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "internal_error");
    assert_eq!(body["message"], "an internal error occurred");

    // The router keeps serving afterwards
    let (status, _) = send(&app, "GET", "/customers/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_degraded_without_database() {
    let app = unreachable_app();

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["database"], "unavailable");
}

// === Database-backed ===

#[sqlx::test(migrations = false)]
#[ignore = "requires database"]
async fn customer_lifecycle(pool: PgPool) {
    let app = app_with_db(pool).await;

    let (status, created) = send(
        &app,
        "POST",
        "/customers",
        Some(r#"{"name":"Ann","email":"ann@x.com","status":"active"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        created,
        json!({"id": 1, "name": "Ann", "email": "ann@x.com", "status": "active"})
    );

    let (status, fetched) = send(&app, "GET", "/customers/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, updated) = send(
        &app,
        "PUT",
        "/customers/1",
        Some(r#"{"name":"Ann","email":"ann@x.com","status":"inactive"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        updated,
        json!({"id": 1, "name": "Ann", "email": "ann@x.com", "status": "inactive"})
    );

    let (status, deleted) = send(&app, "DELETE", "/customers/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, json!({"message": "customer deleted"}));

    let (status, body) = send(&app, "GET", "/customers/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}

#[sqlx::test(migrations = false)]
#[ignore = "requires database"]
async fn create_ignores_client_id(pool: PgPool) {
    let app = app_with_db(pool).await;

    let (status, created) = send(
        &app,
        "POST",
        "/customers",
        Some(r#"{"id":500,"name":"Bo","email":"bo@x.com","status":"new"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);
}

#[sqlx::test(migrations = false)]
#[ignore = "requires database"]
async fn update_path_id_wins_and_replaces_all_fields(pool: PgPool) {
    let app = app_with_db(pool).await;

    send(
        &app,
        "POST",
        "/customers",
        Some(r#"{"name":"Ann","email":"ann@x.com","status":"active"}"#),
    )
    .await;

    let (status, updated) = send(
        &app,
        "PUT",
        "/customers/1",
        Some(r#"{"id":77,"status":"inactive"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        updated,
        json!({"id": 1, "name": "", "email": "", "status": "inactive"})
    );
}

#[sqlx::test(migrations = false)]
#[ignore = "requires database"]
async fn missing_ids_are_404(pool: PgPool) {
    let app = app_with_db(pool).await;

    let (status, _) = send(&app, "GET", "/customers/9", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "PUT", "/customers/9", Some(r#"{"name":"x"}"#)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/customers/9", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "GET", "/customers/99999999999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = false)]
#[ignore = "requires database"]
async fn delete_twice_is_200_then_404(pool: PgPool) {
    let app = app_with_db(pool).await;

    send(&app, "POST", "/customers", Some(r#"{"name":"Ann"}"#)).await;

    let (status, _) = send(&app, "DELETE", "/customers/1", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, "DELETE", "/customers/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = false)]
#[ignore = "requires database"]
async fn list_after_creates_and_deletes(pool: PgPool) {
    let app = app_with_db(pool).await;

    let (status, body) = send(&app, "GET", "/customers", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let mut ids = Vec::new();
    for i in 0..6 {
        let (_, created) = send(
            &app,
            "POST",
            "/customers",
            Some(format!(r#"{{"name":"c{i}","email":"c{i}@x.com","status":"active"}}"#).as_str()),
        )
        .await;
        ids.push(created["id"].as_i64().unwrap());
    }
    assert!(ids.windows(2).all(|w| w[0] < w[1]), "ids not increasing: {ids:?}");

    for id in [ids[0], ids[4]] {
        let (status, _) = send(&app, "DELETE", &format!("/customers/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(&app, "GET", "/customers", None).await;
    assert_eq!(status, StatusCode::OK);
    let listed: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect();
    assert_eq!(listed, vec![ids[1], ids[2], ids[3], ids[5]]);
}

#[sqlx::test(migrations = false)]
#[ignore = "requires database"]
async fn health_ok_with_database(pool: PgPool) {
    let app = app_with_db(pool).await;

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
}
