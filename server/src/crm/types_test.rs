use super::*;

fn routing() -> CrmRouting {
    CrmRouting {
        location_id: "loc-123".into(),
        source: "Desert Cool Air Website".into(),
        tags: vec!["website-lead".into(), "hvac".into(), "phoenix".into()],
    }
}

fn lead() -> ForwardedLead {
    ForwardedLead {
        first_name: "John".into(),
        last_name: "Smith".into(),
        email: "john@example.com".into(),
        phone: "6025551234".into(),
        address: None,
        service_needed: Some(ServiceNeeded::AcRepair),
        preferred_contact: Some(PreferredContact::Phone),
        message: None,
        tcpa_consent: true,
        consent_timestamp: "2026-07-01T18:30:00.123Z".into(),
    }
}

// =============================================================================
// CrmError::error_code
// =============================================================================

#[test]
fn error_codes_are_stable() {
    assert_eq!(CrmError::ConfigParse("x".into()).error_code(), "E_CONFIG_PARSE");
    assert_eq!(CrmError::MissingConfig { var: "X".into() }.error_code(), "E_MISSING_CONFIG");
    assert_eq!(CrmError::HttpClientBuild("tls".into()).error_code(), "E_HTTP_CLIENT_BUILD");
    assert_eq!(CrmError::ApiRequest("timeout".into()).error_code(), "E_API_REQUEST");
    assert_eq!(CrmError::ApiResponse { status: 503, body: "down".into() }.error_code(), "E_API_RESPONSE");
}

#[test]
fn api_response_display_omits_body() {
    let err = CrmError::ApiResponse { status: 422, body: "duplicate contact john@example.com".into() };
    let rendered = err.to_string();
    assert!(rendered.contains("422"));
    assert!(!rendered.contains("john@example.com"));
}

// =============================================================================
// CrmContact
// =============================================================================

#[test]
fn contact_payload_matches_crm_schema() {
    let lead = lead();
    let routing = routing();
    let value = serde_json::to_value(CrmContact::new(&lead, &routing)).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "firstName": "John",
            "lastName": "Smith",
            "email": "john@example.com",
            "phone": "6025551234",
            "locationId": "loc-123",
            "source": "Desert Cool Air Website",
            "tags": ["website-lead", "hvac", "phoenix"],
            "consentTimestamp": "2026-07-01T18:30:00.123Z",
            "customField": {
                "service_needed": "ac-repair",
                "preferred_contact": "phone",
                "tcpa_consent": true,
                "consent_timestamp": "2026-07-01T18:30:00.123Z"
            }
        })
    );
}

#[test]
fn contact_payload_includes_optional_fields_when_present() {
    let mut lead = lead();
    lead.address = Some("123 Main St, Phoenix".into());
    lead.message = Some("AC blowing warm".into());
    let routing = routing();
    let value = serde_json::to_value(CrmContact::new(&lead, &routing)).unwrap();
    assert_eq!(value["address1"], "123 Main St, Phoenix");
    assert_eq!(value["customField"]["message"], "AC blowing warm");
}
