use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use serde_json::{Value, json};
use tower::ServiceExt;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use super::*;
use crate::crm::CrmClient;
use crate::crm::config::{CrmConfig, CrmTarget, CrmTimeouts};
use crate::crm::test_helpers::{short_timeouts, spawn_capture_server, stalled_crm, test_routing, test_timeouts};
use crate::routes::api_routes;
use crate::state::test_helpers::{RecordingCrm, test_app_state, test_app_state_with_crm};

fn john_smith() -> Value {
    json!({
        "firstName": "John",
        "lastName": "Smith",
        "email": "john@example.com",
        "phone": "6025551234",
        "serviceNeeded": "ac-repair",
        "preferredContact": "phone",
        "tcpaConsent": true
    })
}

async fn send(state: AppState, method: &str, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(leads::SUBMIT_FORM_PATH)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    let response = api_routes(state).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn post_json(state: AppState, body: &Value) -> (StatusCode, Value) {
    send(state, "POST", body.to_string()).await
}

// =============================================================================
// relay_error_to_status
// =============================================================================

#[test]
fn relay_error_to_status_maps_rejections_to_bad_request() {
    let err = RelayError::Rejected(LeadRejection::ConsentRequired);
    assert_eq!(relay_error_to_status(&err), StatusCode::BAD_REQUEST);
}

#[test]
fn relay_error_to_status_maps_server_failures_to_500() {
    assert_eq!(relay_error_to_status(&RelayError::NotConfigured), StatusCode::INTERNAL_SERVER_ERROR);
    let upstream = RelayError::Upstream(CrmError::ApiRequest("timeout".into()));
    assert_eq!(relay_error_to_status(&upstream), StatusCode::INTERNAL_SERVER_ERROR);
}

// =============================================================================
// POST /api/submit-form
// =============================================================================

#[tokio::test]
async fn valid_lead_is_forwarded_once_and_acknowledged() {
    let crm = Arc::new(RecordingCrm::default());
    let (status, body) = post_json(test_app_state_with_crm(crm.clone()), &john_smith()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));
    let calls = crm.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].first_name, "John");
    assert_eq!(calls[0].phone, "6025551234");
    assert!(calls[0].tcpa_consent);
    assert!(calls[0].consent_timestamp.ends_with('Z'));
}

#[tokio::test]
async fn missing_phone_returns_400_without_contacting_crm() {
    let crm = Arc::new(RecordingCrm::default());
    let mut lead = john_smith();
    lead.as_object_mut().unwrap().remove("phone");

    let (status, body) = post_json(test_app_state_with_crm(crm.clone()), &lead).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Missing required fields" }));
    assert!(crm.calls().is_empty());
}

#[tokio::test]
async fn consent_false_returns_400_without_contacting_crm() {
    let crm = Arc::new(RecordingCrm::default());
    let mut lead = john_smith();
    lead["tcpaConsent"] = json!(false);

    let (status, body) = post_json(test_app_state_with_crm(crm.clone()), &lead).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "TCPA consent required");
    assert!(crm.calls().is_empty());
}

#[tokio::test]
async fn invalid_email_returns_field_errors() {
    let crm = Arc::new(RecordingCrm::default());
    let mut lead = john_smith();
    lead["email"] = json!("john-at-example");

    let (status, body) = post_json(test_app_state_with_crm(crm.clone()), &lead).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid fields");
    assert_eq!(body["fields"]["email"], "Please enter a valid email address");
    assert!(crm.calls().is_empty());
}

#[tokio::test]
async fn upstream_failure_returns_generic_500() {
    let crm = Arc::new(RecordingCrm::failing(503));
    let (status, body) = post_json(test_app_state_with_crm(crm.clone()), &john_smith()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Submission failed" }));
    assert!(!body.to_string().contains("suspended"));
    assert_eq!(crm.calls().len(), 1);
}

#[tokio::test]
async fn unconfigured_crm_returns_generic_500() {
    let (status, body) = post_json(test_app_state(), &john_smith()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Submission failed" }));
}

#[tokio::test]
async fn malformed_json_returns_400() {
    let crm = Arc::new(RecordingCrm::default());
    let (status, body) = send(test_app_state_with_crm(crm.clone()), "POST", "{not json".into()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request body");
    assert!(crm.calls().is_empty());
}

#[tokio::test]
async fn wrong_field_type_returns_400() {
    let mut lead = john_smith();
    lead["tcpaConsent"] = json!("yes");
    let (status, body) = post_json(test_app_state(), &lead).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request body");
}

#[tokio::test]
async fn get_returns_405() {
    let crm = Arc::new(RecordingCrm::default());
    let (status, body) = send(test_app_state_with_crm(crm.clone()), "GET", String::new()).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["error"], "Method not allowed");
    assert!(crm.calls().is_empty());
}

#[tokio::test]
async fn identical_submissions_each_reach_the_crm() {
    let crm = Arc::new(RecordingCrm::default());
    let state = test_app_state_with_crm(crm.clone());
    let (first, _) = post_json(state.clone(), &john_smith()).await;
    let (second, _) = post_json(state, &john_smith()).await;
    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::OK);
    assert_eq!(crm.calls().len(), 2);
}

#[tokio::test]
async fn healthz_returns_ok() {
    let request = Request::builder().uri("/healthz").body(Body::empty()).unwrap();
    let response = api_routes(test_app_state()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// =============================================================================
// Relay against a live local CRM
// =============================================================================

fn live_crm_state(url: &str, timeouts: CrmTimeouts) -> AppState {
    let config = CrmConfig {
        target: CrmTarget::Rest { url: url.to_owned(), api_key: "test-key".into() },
        routing: test_routing(),
        timeouts,
    };
    test_app_state_with_crm(Arc::new(CrmClient::from_config(config).unwrap()))
}

fn assert_utc_timestamp(value: &Value) {
    let raw = value.as_str().unwrap();
    assert!(raw.ends_with('Z'), "{raw}");
    assert!(OffsetDateTime::parse(raw, &Rfc3339).is_ok(), "{raw}");
}

#[tokio::test]
async fn john_smith_reaches_live_crm_with_relay_timestamp() {
    let server = spawn_capture_server(StatusCode::OK, r#"{"contact":{"id":"c1"}}"#).await;
    let (status, body) = post_json(live_crm_state(&server.url, test_timeouts()), &john_smith()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));
    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    let sent = &requests[0].body;
    assert_eq!(sent["firstName"], "John");
    assert_eq!(sent["customField"]["tcpa_consent"], true);
    assert_utc_timestamp(&sent["consentTimestamp"]);
    assert_utc_timestamp(&sent["customField"]["consent_timestamp"]);
    assert_eq!(sent["consentTimestamp"], sent["customField"]["consent_timestamp"]);
}

#[tokio::test]
async fn live_crm_error_body_stays_server_side() {
    let server = spawn_capture_server(StatusCode::SERVICE_UNAVAILABLE, "secret upstream detail").await;
    let (status, body) = post_json(live_crm_state(&server.url, test_timeouts()), &john_smith()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Submission failed" }));
    assert!(!body.to_string().contains("secret"));
    assert_eq!(server.requests().len(), 1);
}

#[tokio::test]
async fn stalled_crm_returns_generic_500_after_one_attempt() {
    let server = stalled_crm().await;
    let (status, body) = post_json(live_crm_state(&server.url, short_timeouts()), &john_smith()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Submission failed" }));
    assert_eq!(server.requests().len(), 1);
}
