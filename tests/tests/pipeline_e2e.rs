//! End-to-end pipeline tests: tracker capture over real HTTP into the
//! store, then read back through the aggregation endpoints.

use std::net::SocketAddr;
use std::time::Duration;

use axum_test::TestServer;
use event_store::EventStore;
use integration_tests::setup::TestContext;
use tracker::{ClientEnv, Tracker, TrackerConfig};

async fn spawn_server(ctx: &TestContext) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().unwrap();
    let app = ctx.router.clone();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn tracker_for(addr: SocketAddr, initial_url: &str) -> Tracker {
    let config = TrackerConfig::new(format!("http://{}/events", addr), initial_url);
    let env = ClientEnv {
        user_agent: Some("Mozilla/5.0 (E2E)".into()),
        screen_width: Some(1440),
        screen_height: Some(900),
    };
    Tracker::new(config, env).expect("Failed to build tracker")
}

/// Delivery is fire-and-forget, so wait for the store to catch up.
async fn wait_for_events(ctx: &TestContext, n: usize) {
    for _ in 0..250 {
        if ctx.store.len() >= n {
            return;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("timed out waiting for {} events, have {}", n, ctx.store.len());
}

#[tokio::test]
async fn captured_events_land_in_the_store_with_one_session() {
    let ctx = TestContext::new();
    let addr = spawn_server(&ctx).await;
    let tracker = tracker_for(addr, "https://example.com/");

    let session_id = tracker.get_session_id();
    tracker.page_loaded();
    tracker.track_click(120, 480);
    tracker.observe_url("https://example.com/pricing");

    wait_for_events(&ctx, 3).await;

    let events = ctx.store.find_by_session(&session_id).await.unwrap();
    assert_eq!(events.len(), 3);
    assert!(events.iter().all(|e| e.event.session_id == session_id));
    assert!(events
        .iter()
        .all(|e| e.event.user_agent.as_deref() == Some("Mozilla/5.0 (E2E)")));
}

#[tokio::test]
async fn spa_navigation_shows_up_as_a_second_tracked_page() {
    let ctx = TestContext::new();
    let addr = spawn_server(&ctx).await;
    let tracker = tracker_for(addr, "https://example.com/");

    tracker.page_loaded();
    tracker.observe_url("https://example.com/docs");
    // Unrelated DOM mutations with no URL change fire nothing.
    tracker.observe_url("https://example.com/docs");
    tracker.observe_url("https://example.com/docs");

    wait_for_events(&ctx, 2).await;
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(ctx.store.len(), 2);

    let pages = ctx.store.distinct_page_urls().await.unwrap();
    assert_eq!(
        pages,
        vec!["https://example.com/", "https://example.com/docs"]
    );
}

#[tokio::test]
async fn tracked_clicks_feed_the_heatmap_endpoint() {
    let ctx = TestContext::new();
    let addr = spawn_server(&ctx).await;
    let tracker = tracker_for(addr, "https://example.com/signup");

    tracker.track_click(33, 44);
    tracker.track_click(55, 66);
    wait_for_events(&ctx, 2).await;

    let server = TestServer::new(ctx.router.clone()).unwrap();
    let body: serde_json::Value = server
        .get("/heatmap")
        .add_query_param("pageUrl", "https://example.com/signup")
        .await
        .json();

    assert_eq!(body["totalClicks"], 2);
}

#[tokio::test]
async fn delivery_failure_is_silent_when_no_backend_listens() {
    // Point the tracker at a port nothing listens on; capture must not
    // panic and the failure must stay internal.
    let tracker = tracker_for("127.0.0.1:1".parse().unwrap(), "https://example.com/");

    let failed_before = telemetry::metrics().deliveries_failed.get();
    tracker.page_loaded();
    tracker.track_click(1, 2);

    for _ in 0..250 {
        if telemetry::metrics().deliveries_failed.get() >= failed_before + 2 {
            return;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("delivery failures were not recorded in telemetry");
}
