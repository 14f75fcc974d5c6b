//! Tests for the ingest endpoint.

use axum::http::StatusCode;
use axum_test::TestServer;
use integration_tests::{fixtures, setup::TestContext};

fn server(ctx: &TestContext) -> TestServer {
    TestServer::new(ctx.router.clone()).expect("Failed to create test server")
}

#[tokio::test]
async fn page_view_is_stored_and_answers_201() {
    let ctx = TestContext::new();
    let server = server(&ctx);

    let response = server
        .post("/events")
        .json(&fixtures::page_view("s1", "https://example.com/", 100))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    assert!(body["eventId"].is_string());
    assert_eq!(ctx.store.len(), 1);
}

#[tokio::test]
async fn click_with_coordinates_is_stored() {
    let ctx = TestContext::new();
    let server = server(&ctx);

    let response = server
        .post("/events")
        .json(&fixtures::click("s1", "https://example.com/", 40, 900, 100))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(ctx.store.len(), 1);
}

#[tokio::test]
async fn click_without_coordinates_is_rejected() {
    let ctx = TestContext::new();
    let server = server(&ctx);

    let response = server
        .post("/events")
        .json(&serde_json::json!({
            "sessionId": "s1",
            "eventType": "click",
            "pageUrl": "https://example.com/"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());
    assert_eq!(ctx.store.len(), 0, "no partial write");
}

#[tokio::test]
async fn missing_session_id_is_rejected() {
    let ctx = TestContext::new();
    let server = server(&ctx);

    let response = server
        .post("/events")
        .json(&serde_json::json!({
            "eventType": "page_view",
            "pageUrl": "https://example.com/"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn empty_session_id_is_rejected() {
    let ctx = TestContext::new();
    let server = server(&ctx);

    let response = server
        .post("/events")
        .json(&fixtures::page_view("", "https://example.com/", 100))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn unknown_event_type_is_rejected() {
    let ctx = TestContext::new();
    let server = server(&ctx);

    let response = server
        .post("/events")
        .json(&serde_json::json!({
            "sessionId": "s1",
            "eventType": "scroll",
            "pageUrl": "https://example.com/"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unparsable_body_is_rejected_with_the_error_envelope() {
    let ctx = TestContext::new();
    let server = server(&ctx);

    let response = server
        .post("/events")
        .content_type("application/json")
        .bytes("not json at all".into())
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn timestamp_defaults_to_receive_time() {
    let ctx = TestContext::new();
    let server = server(&ctx);

    let response = server
        .post("/events")
        .json(&fixtures::bare_page_view("s1", "https://example.com/"))
        .await;
    response.assert_status(StatusCode::CREATED);

    let events = server.get("/sessions/s1").await.json::<serde_json::Value>();
    assert!(events["events"][0]["timestamp"].is_string());
}

#[tokio::test]
async fn health_reports_ok() {
    let ctx = TestContext::new();
    let server = server(&ctx);

    server
        .post("/events")
        .json(&fixtures::page_view("s1", "/", 1))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server.get("/health").await;
    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["eventsIngested"].as_u64().unwrap() >= 1);
}
