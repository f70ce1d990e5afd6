use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use migration::MigratorTrait;
use serde_json::{json, Value};
use service::policy::notifier::{Notifier, NotifyError};
use service::users::repository::mock::MemoryUserRepository;
use service::users::UserService;
use tower::ServiceExt;

use server::startup::{build_app, build_state};
use server::state::ServerState;

fn memory_app() -> Router {
    let svc = UserService::new(Arc::new(MemoryUserRepository::default()));
    build_app(ServerState::new(Arc::new(svc)))
}

async fn sqlite_app(notifier: Arc<dyn Notifier>) -> anyhow::Result<Router> {
    let db = models::db::connect_in_memory().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(build_app(build_state(db, notifier)))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(v) => builder.header("content-type", "application/json").body(Body::from(serde_json::to_vec(&v)?))?,
        None => builder.body(Body::empty())?,
    };
    let resp = app.clone().oneshot(req).await?;
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, value))
}

async fn walkthrough(app: &Router) -> anyhow::Result<()> {
    let (status, body) = send(app, "POST", "/users", Some(json!({"name": "A", "email": "a@x"}))).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"id": 1, "name": "A", "email": "a@x"}));

    let (status, body) = send(app, "GET", "/users/1", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "name": "A", "email": "a@x"}));

    let (status, body) = send(app, "PUT", "/users/1", Some(json!({"name": "B", "email": "b@x"}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "name": "B", "email": "b@x"}));

    let (status, body) = send(app, "DELETE", "/users/1", None).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = send(app, "GET", "/users/1", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "User not found"}));
    Ok(())
}

#[tokio::test]
async fn crud_walkthrough_in_memory() -> anyhow::Result<()> {
    walkthrough(&memory_app()).await
}

#[tokio::test]
async fn crud_walkthrough_sqlite() -> anyhow::Result<()> {
    let app = sqlite_app(Arc::new(service::policy::notifier::NoopNotifier)).await?;
    walkthrough(&app).await
}

#[tokio::test]
async fn operation_named_routes() -> anyhow::Result<()> {
    let app = memory_app();
    let (status, body) = send(&app, "POST", "/create", Some(json!({"id": 99, "name": "A", "email": "a@x"}))).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1, "client-supplied id is ignored");

    let (status, body) = send(&app, "GET", "/get?id=1", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "A");

    let (status, body) = send(&app, "PUT", "/update?id=1", Some(json!({"name": "B", "email": "b@x"}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "name": "B", "email": "b@x"}));

    let (status, _) = send(&app, "DELETE", "/delete?id=1", None).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, "DELETE", "/delete?id=1", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn bad_requests() -> anyhow::Result<()> {
    let app = memory_app();

    let (status, body) = send(&app, "GET", "/users/abc", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid ID"}));

    let (status, _) = send(&app, "GET", "/get", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "GET", "/get?id=x1", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, "POST", "/users", Some(json!({"name": "A"}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid input"}));

    let req = Request::builder()
        .method("POST")
        .uri("/users")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))?;
    let resp = app.clone().oneshot(req).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "PUT", "/users/1", Some(json!({"name": 5, "email": "e"}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn unknown_ids_are_not_found() -> anyhow::Result<()> {
    let app = memory_app();
    for (method, uri, body) in [
        ("GET", "/users/7", None),
        ("PUT", "/users/7", Some(json!({"name": "n", "email": "e"}))),
        ("DELETE", "/users/7", None),
        ("GET", "/users/-1", None),
    ] {
        let (status, resp) = send(&app, method, uri, body).await?;
        assert_eq!(status, StatusCode::NOT_FOUND, "{method} {uri}");
        assert_eq!(resp, json!({"error": "User not found"}));
    }
    Ok(())
}

#[tokio::test]
async fn storage_failure_is_opaque_500() -> anyhow::Result<()> {
    // no schema: every statement fails inside the store
    let db = models::db::connect_in_memory().await?;
    let app = build_app(build_state(db, Arc::new(service::policy::notifier::NoopNotifier)));

    let (status, body) = send(&app, "POST", "/users", Some(json!({"name": "A", "email": "a@x"}))).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to create user"}));

    let (status, body) = send(&app, "GET", "/users/1", None).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to get user"}));
    Ok(())
}

struct CountingNotifier(std::sync::atomic::AtomicUsize);

impl Notifier for CountingNotifier {
    fn send(&self, _message: &str) -> Result<(), NotifyError> {
        self.0.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        Ok(())
    }
}

#[tokio::test]
async fn create_notifies_through_configured_channel() -> anyhow::Result<()> {
    let counter = Arc::new(CountingNotifier(Default::default()));
    let app = sqlite_app(counter.clone()).await?;
    send(&app, "POST", "/users", Some(json!({"name": "A", "email": "a@x"}))).await?;
    send(&app, "POST", "/users", Some(json!({"name": "B", "email": "b@x"}))).await?;
    send(&app, "PUT", "/users/1", Some(json!({"name": "C", "email": "c@x"}))).await?;
    assert_eq!(counter.0.load(std::sync::atomic::Ordering::SeqCst), 2);
    Ok(())
}

#[tokio::test]
async fn pricing_quote_per_tier() -> anyhow::Result<()> {
    let app = memory_app();
    for (tier, expected) in [("regular", 100.0), ("loyal", 90.0), ("vip", 80.0), ("new", 95.0)] {
        let (status, body) = send(&app, "POST", "/pricing/quote", Some(json!({"price": 100.0, "tier": tier}))).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tier"], tier);
        let got = body["final_price"].as_f64().unwrap();
        assert!((got - expected).abs() < 1e-9, "{tier}: {got}");
    }
    let (status, _) = send(&app, "POST", "/pricing/quote", Some(json!({"price": 100.0, "tier": "gold"}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn health_and_openapi() -> anyhow::Result<()> {
    let app = memory_app();
    let (status, body) = send(&app, "GET", "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = send(&app, "GET", "/api-docs/openapi.json", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/users/{id}"].is_object());
    Ok(())
}
