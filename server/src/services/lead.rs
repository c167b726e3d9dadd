//! Lead relay service: validate, stamp consent, forward once.
//!
//! DESIGN
//! ======
//! The relay is stateless. Each submission is checked with the shared rules
//! from the `leads` crate, normalized into a [`ForwardedLead`], stamped with
//! the server's UTC clock, and handed to the configured [`LeadForward`]
//! exactly once. Rejections never reach the CRM.

use leads::{LeadRejection, LeadSubmission, normalize_phone};
use time::OffsetDateTime;
use time::macros::format_description;

use crate::crm::LeadForward;
use crate::crm::types::{CrmError, ForwardedLead};

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("lead rejected: {0}")]
    Rejected(#[from] LeadRejection),
    #[error("CRM client not configured")]
    NotConfigured,
    #[error("consent timestamp formatting failed: {0}")]
    Timestamp(#[from] time::error::Format),
    #[error(transparent)]
    Upstream(#[from] CrmError),
}

// =============================================================================
// RELAY
// =============================================================================

/// Validate a submission and forward it to the CRM.
///
/// Validation runs before the configuration check so malformed input is
/// always a client error.
///
/// # Errors
///
/// Returns [`RelayError::Rejected`] for invalid input, [`RelayError::NotConfigured`]
/// when no forwarder is present, and [`RelayError::Upstream`] when the CRM call fails.
pub async fn relay_lead(crm: Option<&dyn LeadForward>, submission: &LeadSubmission) -> Result<(), RelayError> {
    leads::validate_for_relay(submission)?;
    let Some(crm) = crm else {
        return Err(RelayError::NotConfigured);
    };
    let lead = prepare_lead(submission, consent_timestamp(OffsetDateTime::now_utc())?)?;
    crm.forward(&lead).await?;
    Ok(())
}

/// Build the forwarded shape from a submission that passed relay validation.
///
/// # Errors
///
/// Re-runs the relay rules and returns the rejection if they fail.
pub fn prepare_lead(submission: &LeadSubmission, consent_timestamp: String) -> Result<ForwardedLead, LeadRejection> {
    leads::validate_for_relay(submission)?;
    let normalized = submission.normalized();
    let service_needed = normalized.service();
    let preferred_contact = normalized.contact_method();
    let required = |value: Option<String>, field: &'static str| {
        value.ok_or_else(|| LeadRejection::MissingFields(vec![field]))
    };

    Ok(ForwardedLead {
        first_name: required(normalized.first_name, "firstName")?,
        last_name: required(normalized.last_name, "lastName")?,
        email: required(normalized.email, "email")?,
        phone: normalize_phone(&required(normalized.phone, "phone")?),
        address: normalized.address,
        service_needed,
        preferred_contact,
        message: normalized.message,
        tcpa_consent: normalized.tcpa_consent == Some(true),
        consent_timestamp,
    })
}

/// ISO-8601 UTC timestamp with millisecond precision, e.g. `2026-07-01T18:30:00.123Z`.
///
/// # Errors
///
/// Propagates the formatter error; a UTC `OffsetDateTime` always has every component.
pub fn consent_timestamp(at: OffsetDateTime) -> Result<String, time::error::Format> {
    let format = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z");
    at.to_offset(time::UtcOffset::UTC).format(&format)
}

#[cfg(test)]
#[path = "lead_test.rs"]
mod tests;
