//! Local HTTP endpoints that stand in for the CRM during transport tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use serde_json::Value;

use super::config::{CrmRouting, CrmTimeouts};
use super::types::ForwardedLead;

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub authorization: Option<String>,
    pub body: Value,
}

pub struct CaptureServer {
    pub url: String,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl CaptureServer {
    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// Spawn a server on an ephemeral port that records every POST to `/contacts/`
/// and answers with `status` and `reply`.
pub async fn spawn_capture_server(status: StatusCode, reply: &'static str) -> CaptureServer {
    spawn_delayed_capture_server(status, reply, Duration::ZERO).await
}

/// Like [`spawn_capture_server`], but holds each response for `delay` after
/// recording the request.
pub async fn spawn_delayed_capture_server(status: StatusCode, reply: &'static str, delay: Duration) -> CaptureServer {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let captured = requests.clone();
    let app = Router::new().route(
        "/contacts/",
        post(move |headers: HeaderMap, Json(body): Json<Value>| {
            let captured = captured.clone();
            async move {
                let authorization = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string);
                captured.lock().unwrap().push(CapturedRequest { authorization, body });
                tokio::time::sleep(delay).await;
                (status, reply)
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    CaptureServer { url: format!("http://{addr}/contacts/"), requests }
}

/// A URL on a port nothing listens on.
pub async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/contacts/")
}

pub fn test_routing() -> CrmRouting {
    CrmRouting {
        location_id: "loc-test".into(),
        source: "Desert Cool Air Website".into(),
        tags: vec!["website-lead".into(), "hvac".into()],
    }
}

pub fn test_timeouts() -> CrmTimeouts {
    CrmTimeouts { request_secs: 5, connect_secs: 2 }
}

/// Request budget that [`stalled_crm`] always exceeds.
pub fn short_timeouts() -> CrmTimeouts {
    CrmTimeouts { request_secs: 1, connect_secs: 1 }
}

/// A CRM that accepts the connection but answers only after three seconds.
pub async fn stalled_crm() -> CaptureServer {
    spawn_delayed_capture_server(StatusCode::OK, "{}", Duration::from_secs(3)).await
}

pub fn sample_lead() -> ForwardedLead {
    ForwardedLead {
        first_name: "John".into(),
        last_name: "Smith".into(),
        email: "john@example.com".into(),
        phone: "6025551234".into(),
        address: None,
        service_needed: Some(leads::ServiceNeeded::AcRepair),
        preferred_contact: Some(leads::PreferredContact::Phone),
        message: Some("Unit is blowing warm air".into()),
        tcpa_consent: true,
        consent_timestamp: "2026-07-01T18:30:00.123Z".into(),
    }
}
