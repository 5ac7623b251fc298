use axum::http::StatusCode;
use folio_core::config::Config;
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn app() -> axum::Router {
    folio_server::build_router(Config::default())
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let req = axum::http::Request::builder()
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

async fn post_json(
    app: axum::Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let req = axum::http::Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(axum::body::Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

fn complete_hire_record() -> serde_json::Value {
    json!({
        "intent": "internship",
        "location": "remote",
        "company": "Acme",
        "role": "SWE Intern",
        "timeline": "Summer 2026",
        "name": "Jane",
        "email": "jane@x.com"
    })
}

// ---------------------------------------------------------------------------
// Config and options
// ---------------------------------------------------------------------------

#[tokio::test]
async fn config_exposes_recipient() {
    let (status, json) = get(app(), "/api/config").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["recipient"], "work.adityabharti@gmail.com");
    assert_eq!(json["feedback_ms"], 2000);
    assert_eq!(json["web_compose_base"], "https://mail.google.com/mail/");
    assert_eq!(json["owner"], "Aditya");
}

#[tokio::test]
async fn options_list_both_tables() {
    let (status, json) = get(app(), "/api/options").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["intents"].as_array().unwrap().len(), 4);
    assert_eq!(json["locations"].as_array().unwrap().len(), 3);
    assert_eq!(json["intents"][1]["label"], "Full-time");
}

// ---------------------------------------------------------------------------
// Hire Me
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_hire_preview_starts_at_intent() {
    let (status, json) = post_json(app(), "/api/hire/preview", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["step"], "intent");
    assert_eq!(json["step_number"], 1);
    assert_eq!(json["can_go_back"], false);
    assert_eq!(json["can_continue"], false);
    assert_eq!(json["copied"], false);
}

#[tokio::test]
async fn continue_without_intent_is_reported() {
    let (status, json) = post_json(
        app(),
        "/api/hire/preview",
        json!({ "commands": [{ "type": "continue" }] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["step"], "intent");
    assert_eq!(json["outcomes"][0]["status"], "ignored");
    assert_eq!(json["outcomes"][0]["reason"]["missing_required"], "intent");
}

#[tokio::test]
async fn complete_record_reaches_preview() {
    let (status, json) = post_json(
        app(),
        "/api/hire/preview",
        json!({ "record": complete_hire_record(), "step": "preview" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["step"], "preview");
    assert_eq!(
        json["payload"]["subject"],
        "Internship Opportunity - SWE Intern at Acme"
    );
    assert!(json["preview"]
        .as_str()
        .unwrap()
        .starts_with("Subject: Internship Opportunity - SWE Intern at Acme\n\nHi Aditya,"));
    assert_eq!(json["deliveries"].as_array().unwrap().len(), 3);
    assert_eq!(json["deliveries"][1]["channel"], "mailto");
}

#[tokio::test]
async fn stored_step_cannot_skip_gates() {
    let (status, json) = post_json(
        app(),
        "/api/hire/preview",
        json!({ "record": { "intent": "fulltime" }, "step": "preview" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["step"], "location");
}

#[tokio::test]
async fn numeric_step_is_rejected() {
    let (status, _) = post_json(app(), "/api/hire/preview", json!({ "step": 4 })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn unknown_record_field_is_rejected() {
    let (status, _) = post_json(
        app(),
        "/api/hire/preview",
        json!({ "record": { "phone": "555" } }),
    )
    .await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn hire_mailto_channel() {
    let (status, json) = post_json(
        app(),
        "/api/hire/channels/mailto",
        json!({ "record": complete_hire_record(), "step": "preview" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let target = json["target"].as_str().unwrap();
    assert!(target.starts_with("mailto:work.adityabharti@gmail.com?subject=Internship%20Opportunity"));
    assert!(!target.contains("Subject%3A"));
}

#[tokio::test]
async fn unknown_channel_is_400() {
    let (status, json) = post_json(app(), "/api/hire/channels/fax", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("fax"));
}

// ---------------------------------------------------------------------------
// Contact
// ---------------------------------------------------------------------------

#[tokio::test]
async fn contact_preview_applies_commands() {
    let (status, json) = post_json(
        app(),
        "/api/contact/preview",
        json!({
            "record": { "name": "Sam" },
            "commands": [{ "type": "update", "field": "subject", "value": "Hello" }]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["payload"]["subject"], "Hello");
    assert_eq!(json["record"]["name"], "Sam");
    assert!(json["preview"]
        .as_str()
        .unwrap()
        .starts_with("To: work.adityabharti@gmail.com\nSubject: Hello\n\n"));
}

#[tokio::test]
async fn contact_web_channel_uses_configured_base() {
    let mut config = Config::default();
    config.delivery.web_compose_base = "https://mail.example.com/compose".to_string();
    let app = folio_server::build_router(config);
    let (status, json) = post_json(app, "/api/contact/channels/web", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["target"]
        .as_str()
        .unwrap()
        .starts_with("https://mail.example.com/compose?view=cm&fs=1&to="));
    assert_eq!(json["label"], "Open in Gmail (Web)");
}

#[tokio::test]
async fn contact_preview_echoes_seq_and_follows_submitted_record() {
    // Two keystrokes answered out of order: each response describes only
    // the record it was sent, tagged with its counter.
    let (_, late) = post_json(
        app(),
        "/api/contact/preview",
        json!({ "record": { "name": "a" }, "seq": 1 }),
    )
    .await;
    let (_, latest) = post_json(
        app(),
        "/api/contact/preview",
        json!({ "record": { "name": "ab", "email": "x" }, "seq": 2 }),
    )
    .await;
    assert_eq!(late["seq"], 1);
    assert_eq!(latest["seq"], 2);
    assert_eq!(latest["record"]["name"], "ab");
    assert_eq!(latest["record"]["email"], "x");
}

#[tokio::test]
async fn hire_preview_echoes_seq() {
    let (status, json) = post_json(app(), "/api/hire/preview", json!({ "seq": 42 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["seq"], 42);

    let (_, json) = post_json(app(), "/api/hire/preview", json!({})).await;
    assert!(json.get("seq").is_none());
}

// ---------------------------------------------------------------------------
// Static site
// ---------------------------------------------------------------------------

#[tokio::test]
async fn pages_are_served() {
    for uri in ["/", "/hire-me", "/contact", "/no-such-page"] {
        let req = axum::http::Request::builder()
            .uri(uri)
            .body(axum::body::Body::empty())
            .unwrap();
        let response = app().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        let ct = response
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(ct.starts_with("text/html"), "{uri}: {ct}");
    }
}

#[tokio::test]
async fn page_script_discards_stale_previews() {
    let req = axum::http::Request::builder()
        .uri("/app.js")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let script = String::from_utf8(body.to_vec()).unwrap();
    assert!(script.contains("snap.seq !== seq"));
    // The contact record is never overwritten from a response.
    assert!(!script.contains("record = snap.record"));
    // Hire requests are chained, not fired concurrently.
    assert!(script.contains("queue = queue.then("));
}
