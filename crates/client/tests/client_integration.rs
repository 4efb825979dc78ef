//! End-to-end client behavior against an in-process HTTP server.
//!
//! Exercises the pieces that only show up on the wire: bearer-token
//! attachment, project-context injection into bodies and query
//! strings, local rejection of project-required calls, and the 401
//! session-teardown side effect.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{RawQuery, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use rankpilot_client::{AuthFailureHandler, ClientError, RankpilotClient};
use rankpilot_core::{MemoryStorage, ProjectId, ProjectRef, ProjectScope, SessionStore};

#[derive(Debug, Clone, Default)]
struct Recorded {
    authorization: Option<String>,
    query: Option<String>,
    body: Option<Value>,
}

type Log = Arc<Mutex<Vec<Recorded>>>;

fn record(log: &Log, headers: &HeaderMap, query: Option<String>, body: Option<Value>) {
    let authorization = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .map(String::from);
    log.lock().unwrap().push(Recorded {
        authorization,
        query,
        body,
    });
}

async fn health(State(log): State<Log>, headers: HeaderMap) -> Json<Value> {
    record(&log, &headers, None, None);
    Json(json!({"status": "ok", "version": "1.4.2"}))
}

async fn analyze(
    State(log): State<Log>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    record(&log, &headers, None, Some(body));
    Json(json!({
        "id": "00000000-0000-0000-0000-000000000001",
        "url": "https://example.com",
        "score": 88.5,
        "issues": [{"severity": "warning", "message": "Missing meta description"}],
        "created_at": "2026-01-01T00:00:00Z",
    }))
}

async fn analyses(
    State(log): State<Log>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Json<Value> {
    record(&log, &headers, query, None);
    Json(json!([]))
}

async fn industries(
    State(log): State<Log>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Json<Value> {
    record(&log, &headers, query, None);
    Json(json!([{"name": "E-commerce", "slug": "ecommerce"}]))
}

async fn me() -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"detail": "Token expired"})),
    )
}

async fn spawn_server() -> (SocketAddr, Log) {
    let log: Log = Arc::default();
    let app = Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/seo/analyze", post(analyze))
        .route("/api/v1/seo/analyses", get(analyses))
        .route("/api/v1/resources/industries", get(industries))
        .route("/api/v1/auth/me", get(me))
        .with_state(log.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, log)
}

fn client_for(addr: SocketAddr) -> RankpilotClient {
    let store = SessionStore::new(Arc::new(MemoryStorage::new()));
    RankpilotClient::new(format!("http://{}", addr), store)
}

fn last(log: &Log) -> Recorded {
    log.lock().unwrap().last().cloned().expect("request recorded")
}

#[derive(Default)]
struct CapturingHandler {
    fired: AtomicBool,
}

impl AuthFailureHandler for CapturingHandler {
    fn on_auth_failure(&self) {
        self.fired.store(true, Ordering::SeqCst);
    }
}

// ==================== Token Injection Tests ====================

#[tokio::test]
async fn test_bearer_token_attached_when_present() {
    let (addr, log) = spawn_server().await;
    let client = client_for(addr);
    client.store().set_token("tok-1");

    client.health().await.unwrap();

    assert_eq!(
        last(&log).authorization,
        Some("Bearer tok-1".to_string())
    );
}

#[tokio::test]
async fn test_no_authorization_header_without_token() {
    let (addr, log) = spawn_server().await;
    let client = client_for(addr);

    client.health().await.unwrap();

    assert_eq!(last(&log).authorization, None);
}

// ==================== Project Injection Tests ====================

#[tokio::test]
async fn test_body_injection_uses_current_project() {
    let (addr, log) = spawn_server().await;
    let client = client_for(addr);
    client
        .store()
        .set_current_project(Some(ProjectId::from("p1")));

    client
        .analyze_url("https://example.com", ProjectScope::Current)
        .await
        .unwrap();

    let body = last(&log).body.unwrap();
    assert_eq!(body["url"], "https://example.com");
    assert_eq!(body["project_id"], "p1");
}

#[tokio::test]
async fn test_body_injection_explicit_override() {
    let (addr, log) = spawn_server().await;
    let client = client_for(addr);
    client
        .store()
        .set_current_project(Some(ProjectId::from("p1")));

    client
        .analyze_url("https://example.com", ProjectScope::project("p2"))
        .await
        .unwrap();

    assert_eq!(last(&log).body.unwrap()["project_id"], "p2");
}

#[tokio::test]
async fn test_body_injection_unscoped_omits_key() {
    let (addr, log) = spawn_server().await;
    let client = client_for(addr);
    client
        .store()
        .set_current_project(Some(ProjectId::from("p1")));

    client
        .analyze_url("https://example.com", ProjectScope::Unscoped)
        .await
        .unwrap();

    let body = last(&log).body.unwrap();
    assert!(body.get("project_id").is_none());
}

#[tokio::test]
async fn test_query_injection_uses_current_project() {
    let (addr, log) = spawn_server().await;
    let client = client_for(addr);
    client
        .store()
        .set_current_project(Some(ProjectId::from("p1")));

    client.list_analyses(ProjectScope::Current).await.unwrap();

    let query = last(&log).query.unwrap_or_default();
    assert!(query.contains("project_id=p1"), "query was: {}", query);
}

#[tokio::test]
async fn test_required_project_rejected_locally() {
    let (addr, log) = spawn_server().await;
    let client = client_for(addr);

    let result = client.list_analyses(ProjectScope::Current).await;

    assert!(matches!(result, Err(ClientError::NoProjectSelected)));
    // Never reached the server.
    assert!(log.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_catalogue_endpoint_never_injects() {
    let (addr, log) = spawn_server().await;
    let client = client_for(addr);
    client
        .store()
        .set_current_project(Some(ProjectId::from("p1")));

    client.list_industries().await.unwrap();

    let recorded = last(&log);
    assert!(
        recorded.query.unwrap_or_default().is_empty(),
        "catalogue lookup must not carry project context"
    );
}

// ==================== Session Lifecycle Tests ====================

#[tokio::test]
async fn test_401_tears_down_session_and_fires_handler() {
    let (addr, _log) = spawn_server().await;
    let handler = Arc::new(CapturingHandler::default());
    let store = SessionStore::new(Arc::new(MemoryStorage::new()));
    let client = RankpilotClient::new(format!("http://{}", addr), store.clone())
        .with_auth_failure_handler(handler.clone());

    store.set_token("stale-token");
    store.set_available_projects(&[ProjectRef {
        id: ProjectId::from("p1"),
        name: "Site A".to_string(),
        url: None,
        industry: None,
    }]);

    let result = client.me().await;

    // The error still reaches the caller after the side effects.
    match result {
        Err(ClientError::Unauthorized { detail }) => assert_eq!(detail, "Token expired"),
        other => panic!("expected Unauthorized, got {:?}", other.map(|r| r.status)),
    }
    assert_eq!(store.token(), None);
    assert_eq!(store.current_project_id(), None);
    assert!(store.available_projects().is_empty());
    assert!(handler.fired.load(Ordering::SeqCst));
}

#[tokio::test]
async fn test_non_401_error_leaves_session_intact() {
    let (addr, _log) = spawn_server().await;
    let client = client_for(addr);
    client.store().set_token("tok-1");

    // No route registered: the server answers 404.
    let result = client
        .get_analysis("00000000-0000-0000-0000-000000000002".parse().unwrap())
        .await;

    assert!(matches!(result, Err(ClientError::Api { status: 404, .. })));
    assert_eq!(client.store().token(), Some("tok-1".to_string()));
}
