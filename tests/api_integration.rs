//! Integration tests for the local proxy surface.
//!
//! These use a scripted upstream client so no network is involved; the
//! wiremock-backed tests for the real HTTP client live in
//! `client_integration.rs`.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{make_state, ScriptedUpstream};
use foreman::api::create_router;
use serde_json::Value;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tower::Service;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_active_cases_served_and_cached() {
    let upstream = Arc::new(ScriptedUpstream::new());
    let state = make_state(Arc::clone(&upstream));
    let mut app = create_router(Arc::clone(&state));

    let response = app.call(get("/api/active-cases")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json[0]["ticket_id"], "SC001");

    // Second request within the staleness window: served from cache.
    let response = app.call(get("/api/active-cases")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(upstream.cases_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_first_case_becomes_default_selection() {
    let upstream = Arc::new(ScriptedUpstream::new());
    let state = make_state(upstream);
    let mut app = create_router(Arc::clone(&state));

    assert!(state.selection.selected().is_none());
    app.call(get("/api/active-cases")).await.unwrap();
    assert_eq!(state.selection.selected().unwrap().ticket_id, "SC001");

    // An explicit selection is not displaced by later loads.
    app.call(get("/api/active-cases")).await.unwrap();
    assert_eq!(state.selection.selected().unwrap().ticket_id, "SC001");
}

#[tokio::test]
async fn test_per_ticket_payloads_keyed_to_ticket() {
    let upstream = Arc::new(ScriptedUpstream::new());
    let state = make_state(Arc::clone(&upstream));
    let mut app = create_router(state);

    let (a, b) = tokio::join!(
        app.clone().call(get("/api/triage/SC001")),
        app.clone().call(get("/api/triage/SC002")),
    );

    let a = body_json(a.unwrap()).await;
    let b = body_json(b.unwrap()).await;
    assert_eq!(a["ticket_id"], "SC001");
    assert_eq!(b["ticket_id"], "SC002");

    // Distinct tickets are distinct cache keys: both fetched.
    assert_eq!(upstream.triage_calls.load(Ordering::SeqCst), 2);

    // Re-reading either ticket hits the cache.
    app.call(get("/api/triage/SC001")).await.unwrap();
    assert_eq!(upstream.triage_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_read_failure_maps_status_through() {
    let upstream = Arc::new(ScriptedUpstream {
        fail_reads: true,
        ..ScriptedUpstream::new()
    });
    let state = make_state(upstream);
    let mut app = create_router(state);

    let response = app.call(get("/api/cost/SC001")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"]["type"], "upstream_error");
    assert!(json["error"]["message"]
        .as_str()
        .unwrap()
        .contains("scripted failure"));
}

#[tokio::test]
async fn test_worker_matches_route() {
    let upstream = Arc::new(ScriptedUpstream::new());
    let state = make_state(upstream);
    let mut app = create_router(state);

    let response = app.call(get("/api/worker/SC001")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["recommended"]["worker_id"], "W1");
    assert_eq!(json["matches"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_assignment_passthrough() {
    let upstream = Arc::new(ScriptedUpstream::new());
    let state = make_state(Arc::clone(&upstream));
    let mut app = create_router(state);

    let response = app.call(post("/api/assign/SC001/W1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["assignment"]["worker_id"], "W1");
    assert_eq!(upstream.assign_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_refused_assignment_still_200_with_flag() {
    let upstream = Arc::new(ScriptedUpstream {
        refuse_assignment: true,
        ..ScriptedUpstream::new()
    });
    let state = make_state(upstream);
    let mut app = create_router(state);

    let response = app.call(post("/api/assign/SC001/W1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn test_issue_image_without_data_normalized() {
    let upstream = Arc::new(ScriptedUpstream::new());
    let state = make_state(upstream);
    let mut app = create_router(state);

    let response = app.call(get("/api/issue-image/SC001")).await.unwrap();
    // Error normalization: this route always answers 200.
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "no_image");
}

#[tokio::test]
async fn test_issue_image_with_data() {
    let upstream = Arc::new(ScriptedUpstream {
        image: Some("aGVsbG8=".to_string()),
        ..ScriptedUpstream::new()
    });
    let state = make_state(upstream);
    let mut app = create_router(state);

    let response = app.call(get("/api/issue-image/SC001")).await.unwrap();
    let json = body_json(response).await;
    assert_eq!(json["status"], "success");
    assert_eq!(json["image_base64"], "aGVsbG8=");
}

#[tokio::test]
async fn test_table_html_passthrough() {
    let upstream = Arc::new(ScriptedUpstream::new());
    let state = make_state(upstream);
    let mut app = create_router(state);

    let response = app.call(get("/api/table/service_calls")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/html"));

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("SC001"));
}

#[tokio::test]
async fn test_reset_flushes_caches() {
    let upstream = Arc::new(ScriptedUpstream::new());
    let state = make_state(Arc::clone(&upstream));
    let mut app = create_router(state);

    app.call(get("/api/active-cases")).await.unwrap();
    assert_eq!(upstream.cases_calls.load(Ordering::SeqCst), 1);

    let response = app.call(post("/api/reset-database")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(upstream.reset_calls.load(Ordering::SeqCst), 1);

    // Post-reset the case list is stale and refetches.
    app.call(get("/api/active-cases")).await.unwrap();
    assert_eq!(upstream.cases_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_health_route() {
    let upstream = Arc::new(ScriptedUpstream::new());
    let state = make_state(upstream);
    let mut app = create_router(state);

    let response = app.call(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["upstream_url"].as_str().unwrap().starts_with("http"));
}

#[tokio::test]
async fn test_unknown_route_404() {
    let upstream = Arc::new(ScriptedUpstream::new());
    let state = make_state(upstream);
    let mut app = create_router(state);

    let response = app.call(get("/unknown/path")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_servicecall_rejects_missing_metadata() {
    let upstream = Arc::new(ScriptedUpstream::new());
    let state = make_state(upstream);
    let mut app = create_router(state);

    let body = concat!(
        "--boundary\r\n",
        "Content-Disposition: form-data; name=\"unrelated\"\r\n\r\n",
        "x\r\n",
        "--boundary--\r\n"
    );
    let request = Request::builder()
        .method("POST")
        .uri("/api/servicecall")
        .header("content-type", "multipart/form-data; boundary=boundary")
        .body(Body::from(body))
        .unwrap();

    let response = app.call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_servicecall_accepts_metadata() {
    let upstream = Arc::new(ScriptedUpstream::new());
    let state = make_state(upstream);
    let mut app = create_router(state);

    let metadata = serde_json::json!({
        "category": "Electrical",
        "description": "Sparking outlet",
        "latitude": 47.6,
        "longitude": -122.3,
        "location": "Building B",
        "priority": "High"
    })
    .to_string();
    let body = format!(
        "--boundary\r\nContent-Disposition: form-data; name=\"service_call_input\"\r\n\r\n{}\r\n--boundary--\r\n",
        metadata
    );
    let request = Request::builder()
        .method("POST")
        .uri("/api/servicecall")
        .header("content-type", "multipart/form-data; boundary=boundary")
        .body(Body::from(body))
        .unwrap();

    let response = app.call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["ticket_id"], "SC099");
}
