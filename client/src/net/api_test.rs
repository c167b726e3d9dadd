use super::*;

#[test]
fn submit_failed_message_includes_status_and_error() {
    assert_eq!(
        submit_failed_message(400, Some("Missing required fields")),
        "submit failed: 400 (Missing required fields)"
    );
}

#[test]
fn submit_failed_message_without_body() {
    assert_eq!(submit_failed_message(502, None), "submit failed: 502");
}

#[test]
fn submit_timeout_message_reports_seconds() {
    assert_eq!(submit_timeout_message(), "submit timed out after 15s");
}
