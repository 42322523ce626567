mod common;

use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use common::{RecordingProvider, create_test_state, create_test_state_with, test_settings};
use contact_relay::routes::app_router;
use tower::ServiceExt;

async fn get_page(state: contact_relay::state::AppState, uri: &str) -> (StatusCode, String, String) {
    let response = app_router(state)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_contact_page_renders_form() {
    let state = create_test_state(Some(RecordingProvider::confirming("x")));

    let (status, content_type, html) = get_page(state, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/html"));
    assert!(html.contains(r#"name="name""#));
    assert!(html.contains(r#"name="email""#));
    assert!(html.contains(r#"name="message""#));
    assert!(html.contains(r#"maxlength="5000""#));
    assert!(html.contains("/api/send-email"));
    assert!(html.contains("application/json"));
}

#[tokio::test]
async fn test_honeypot_input_is_hidden_and_unfocusable() {
    let state = create_test_state(None);

    let (_, _, html) = get_page(state, "/").await;

    assert!(html.contains(r#"name="website""#));
    assert!(html.contains(r#"tabindex="-1""#));
    assert!(html.contains(r#"aria-hidden="true""#));
}

#[tokio::test]
async fn test_honeypot_field_name_follows_settings() {
    let mut settings = test_settings();
    settings.honeypot_field = "company_url".to_string();
    let state = create_test_state_with(None, settings);

    let (_, _, html) = get_page(state, "/").await;

    assert!(html.contains(r#"name="company_url""#));
    assert!(!html.contains(r#"name="website""#));
}

#[tokio::test]
async fn test_trailing_slash_is_normalized() {
    let state = create_test_state(None);

    let (status, _, body) = get_page(state, "/api/send-email/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("POST JSON { name, email, message }"));
}
