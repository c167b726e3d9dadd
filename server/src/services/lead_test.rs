use leads::{PreferredContact, ServiceNeeded};
use time::macros::datetime;

use super::*;
use crate::state::test_helpers::RecordingCrm;

fn john_smith() -> LeadSubmission {
    LeadSubmission {
        first_name: Some(" John ".into()),
        last_name: Some("Smith".into()),
        email: Some("john@example.com".into()),
        phone: Some("(602) 555-1234".into()),
        service_needed: Some("ac-repair".into()),
        preferred_contact: Some("call".into()),
        tcpa_consent: Some(true),
        ..LeadSubmission::default()
    }
}

// =============================================================================
// consent_timestamp
// =============================================================================

#[test]
fn consent_timestamp_is_iso_utc_with_millis() {
    let at = datetime!(2026-07-01 18:30:00.123456 UTC);
    assert_eq!(consent_timestamp(at).unwrap(), "2026-07-01T18:30:00.123Z");
}

#[test]
fn consent_timestamp_converts_offsets_to_utc() {
    let at = datetime!(2026-07-01 11:30:00 -7);
    assert_eq!(consent_timestamp(at).unwrap(), "2026-07-01T18:30:00.000Z");
}

// =============================================================================
// prepare_lead
// =============================================================================

#[test]
fn prepare_lead_normalizes_fields() {
    let lead = prepare_lead(&john_smith(), "2026-07-01T18:30:00.000Z".into()).unwrap();
    assert_eq!(lead.first_name, "John");
    assert_eq!(lead.phone, "6025551234");
    assert_eq!(lead.service_needed, Some(ServiceNeeded::AcRepair));
    assert_eq!(lead.preferred_contact, Some(PreferredContact::Phone));
    assert!(lead.tcpa_consent);
    assert_eq!(lead.address, None);
    assert_eq!(lead.consent_timestamp, "2026-07-01T18:30:00.000Z");
}

#[test]
fn prepare_lead_refuses_invalid_submission() {
    let mut submission = john_smith();
    submission.email = None;
    let err = prepare_lead(&submission, String::new()).unwrap_err();
    assert_eq!(err, LeadRejection::MissingFields(vec!["email"]));
}

// =============================================================================
// relay_lead
// =============================================================================

#[tokio::test]
async fn relay_forwards_valid_lead_once_with_fresh_timestamp() {
    let crm = RecordingCrm::default();
    let before = OffsetDateTime::now_utc();
    relay_lead(Some(&crm), &john_smith()).await.unwrap();

    let calls = crm.calls();
    assert_eq!(calls.len(), 1);
    let stamped = OffsetDateTime::parse(&calls[0].consent_timestamp, &time::format_description::well_known::Rfc3339)
        .unwrap();
    assert!(stamped >= before - time::Duration::milliseconds(1));
    assert!(stamped <= OffsetDateTime::now_utc());
}

#[tokio::test]
async fn relay_rejects_missing_phone_without_forwarding() {
    let crm = RecordingCrm::default();
    let mut submission = john_smith();
    submission.phone = None;

    let err = relay_lead(Some(&crm), &submission).await.unwrap_err();
    assert!(matches!(err, RelayError::Rejected(LeadRejection::MissingFields(ref f)) if f == &vec!["phone"]));
    assert!(crm.calls().is_empty());
}

#[tokio::test]
async fn relay_rejects_withheld_consent_without_forwarding() {
    let crm = RecordingCrm::default();
    let mut submission = john_smith();
    submission.tcpa_consent = Some(false);

    let err = relay_lead(Some(&crm), &submission).await.unwrap_err();
    assert!(matches!(err, RelayError::Rejected(LeadRejection::ConsentRequired)));
    assert!(crm.calls().is_empty());
}

#[tokio::test]
async fn relay_without_crm_is_not_configured() {
    let err = relay_lead(None, &john_smith()).await.unwrap_err();
    assert!(matches!(err, RelayError::NotConfigured));
}

#[tokio::test]
async fn relay_validates_before_checking_configuration() {
    let mut submission = john_smith();
    submission.first_name = None;
    let err = relay_lead(None, &submission).await.unwrap_err();
    assert!(matches!(err, RelayError::Rejected(_)));
}

#[tokio::test]
async fn relay_surfaces_upstream_failure() {
    let crm = RecordingCrm::failing(503);
    let err = relay_lead(Some(&crm), &john_smith()).await.unwrap_err();
    assert!(matches!(err, RelayError::Upstream(CrmError::ApiResponse { status: 503, .. })));
    assert_eq!(crm.calls().len(), 1);
}

#[tokio::test]
async fn identical_submissions_are_forwarded_independently() {
    let crm = RecordingCrm::default();
    relay_lead(Some(&crm), &john_smith()).await.unwrap();
    relay_lead(Some(&crm), &john_smith()).await.unwrap();
    assert_eq!(crm.calls().len(), 2);
}
