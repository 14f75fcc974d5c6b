//! Test fixtures and event payload generators.

use chrono::{DateTime, TimeZone, Utc};

/// Instant `t` seconds after the epoch, as the collector would send it.
pub fn instant(t: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(t, 0).unwrap()
}

/// A page-view payload in collector wire format.
pub fn page_view(session_id: &str, page_url: &str, t: i64) -> serde_json::Value {
    serde_json::json!({
        "sessionId": session_id,
        "eventType": "page_view",
        "pageUrl": page_url,
        "timestamp": instant(t).to_rfc3339(),
        "userAgent": "Mozilla/5.0 (Test)",
        "screenWidth": 1920,
        "screenHeight": 1080
    })
}

/// A click payload in collector wire format.
pub fn click(session_id: &str, page_url: &str, x: i64, y: i64, t: i64) -> serde_json::Value {
    serde_json::json!({
        "sessionId": session_id,
        "eventType": "click",
        "pageUrl": page_url,
        "clickX": x,
        "clickY": y,
        "timestamp": instant(t).to_rfc3339(),
        "userAgent": "Mozilla/5.0 (Test)"
    })
}

/// A minimal payload without a timestamp (server assigns receive time).
pub fn bare_page_view(session_id: &str, page_url: &str) -> serde_json::Value {
    serde_json::json!({
        "sessionId": session_id,
        "eventType": "page_view",
        "pageUrl": page_url
    })
}
