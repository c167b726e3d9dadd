//! Shared CRM types: the forwarded lead, the outbound payload, errors, and the
//! [`LeadForward`] seam.

use leads::{PreferredContact, ServiceNeeded};
use serde::Serialize;

use super::config::CrmRouting;

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CrmError {
    #[error("config parse failed: {0}")]
    ConfigParse(String),
    #[error("missing CRM configuration: env var {var} not set")]
    MissingConfig { var: String },
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
    #[error("CRM request failed: {0}")]
    ApiRequest(String),
    #[error("CRM responded with status {status}")]
    ApiResponse { status: u16, body: String },
}

impl CrmError {
    /// Stable code attached to log lines.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigParse(_) => "E_CONFIG_PARSE",
            Self::MissingConfig { .. } => "E_MISSING_CONFIG",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
            Self::ApiRequest(_) => "E_API_REQUEST",
            Self::ApiResponse { .. } => "E_API_RESPONSE",
        }
    }
}

// =============================================================================
// FORWARDED LEAD
// =============================================================================

/// A lead that passed relay validation, normalized and consent-stamped.
///
/// This is the only shape the transports accept; building one is the
/// service layer's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardedLead {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Digits only.
    pub phone: String,
    pub address: Option<String>,
    pub service_needed: Option<ServiceNeeded>,
    pub preferred_contact: Option<PreferredContact>,
    pub message: Option<String>,
    pub tcpa_consent: bool,
    /// ISO-8601 UTC with millisecond precision.
    pub consent_timestamp: String,
}

// =============================================================================
// OUTBOUND PAYLOAD
// =============================================================================

/// Contact body posted to the CRM. Both transports send this exact shape.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrmContact<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<&'a str>,
    pub location_id: &'a str,
    pub source: &'a str,
    pub tags: &'a [String],
    pub consent_timestamp: &'a str,
    pub custom_field: CrmCustomFields<'a>,
}

/// CRM custom fields keep their snake_case keys.
#[derive(Debug, Serialize)]
pub struct CrmCustomFields<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_needed: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_contact: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'a str>,
    pub tcpa_consent: bool,
    pub consent_timestamp: &'a str,
}

impl<'a> CrmContact<'a> {
    pub fn new(lead: &'a ForwardedLead, routing: &'a CrmRouting) -> Self {
        Self {
            first_name: &lead.first_name,
            last_name: &lead.last_name,
            email: &lead.email,
            phone: &lead.phone,
            address1: lead.address.as_deref(),
            location_id: &routing.location_id,
            source: &routing.source,
            tags: &routing.tags,
            consent_timestamp: &lead.consent_timestamp,
            custom_field: CrmCustomFields {
                service_needed: lead.service_needed.map(ServiceNeeded::slug),
                preferred_contact: lead.preferred_contact.map(PreferredContact::slug),
                message: lead.message.as_deref(),
                tcpa_consent: lead.tcpa_consent,
                consent_timestamp: &lead.consent_timestamp,
            },
        }
    }
}

// =============================================================================
// LEAD FORWARD TRAIT
// =============================================================================

/// Transport-neutral async trait for delivering a lead. Enables mocking in tests.
#[async_trait::async_trait]
pub trait LeadForward: Send + Sync {
    /// Deliver one lead in a single attempt.
    async fn forward(&self, lead: &ForwardedLead) -> Result<(), CrmError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
