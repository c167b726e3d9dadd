//! Shared lead model and validation rules for the contact form and relay.
//!
//! This crate owns the wire representation posted by the browser form to
//! `/api/submit-form` and the structural rules both sides enforce. The form
//! runs [`validate_for_form`] before touching the network; the relay runs
//! [`validate_for_relay`] before contacting the CRM.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

// =============================================================================
// WIRE CONSTANTS
// =============================================================================

/// Same-origin relay endpoint the contact form posts to.
pub const SUBMIT_FORM_PATH: &str = "/api/submit-form";

pub const ERROR_MISSING_FIELDS: &str = "Missing required fields";
pub const ERROR_CONSENT_REQUIRED: &str = "TCPA consent required";
pub const ERROR_INVALID_FIELDS: &str = "Invalid fields";
pub const ERROR_INVALID_BODY: &str = "Invalid request body";
pub const ERROR_SUBMISSION_FAILED: &str = "Submission failed";
pub const ERROR_METHOD_NOT_ALLOWED: &str = "Method not allowed";

const MIN_PHONE_DIGITS: usize = 10;
const MAX_PHONE_DIGITS: usize = 20;
const PHONE_FORMATTING: &[char] = &[' ', '(', ')', '-', '.', '+'];

// =============================================================================
// CATALOGS
// =============================================================================

/// Service catalog offered in the form's "Service Needed" select.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceNeeded {
    AcRepair,
    AcInstallation,
    Maintenance,
    Heating,
    Emergency,
    AirQuality,
    Other,
}

impl ServiceNeeded {
    pub const ALL: [Self; 7] = [
        Self::AcRepair,
        Self::AcInstallation,
        Self::Maintenance,
        Self::Heating,
        Self::Emergency,
        Self::AirQuality,
        Self::Other,
    ];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::AcRepair => "ac-repair",
            Self::AcInstallation => "ac-installation",
            Self::Maintenance => "maintenance",
            Self::Heating => "heating",
            Self::Emergency => "emergency",
            Self::AirQuality => "air-quality",
            Self::Other => "other",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::AcRepair => "AC Repair",
            Self::AcInstallation => "AC Installation",
            Self::Maintenance => "Maintenance",
            Self::Heating => "Heating Services",
            Self::Emergency => "Emergency Service",
            Self::AirQuality => "Air Quality",
            Self::Other => "Other",
        }
    }

    #[must_use]
    pub fn from_slug(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.into_iter().find(|service| service.slug() == raw)
    }
}

/// How the customer wants to be reached back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferredContact {
    Phone,
    Text,
    Email,
}

impl PreferredContact {
    pub const ALL: [Self; 3] = [Self::Phone, Self::Text, Self::Email];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Text => "text",
            Self::Email => "email",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Phone => "Phone Call",
            Self::Text => "Text Message",
            Self::Email => "Email",
        }
    }

    /// Parse a contact method slug. `call` is accepted as an alias of `phone`.
    #[must_use]
    pub fn from_slug(raw: &str) -> Option<Self> {
        match raw.trim() {
            "phone" | "call" => Some(Self::Phone),
            "text" => Some(Self::Text),
            "email" => Some(Self::Email),
            _ => None,
        }
    }
}

// =============================================================================
// LEAD SUBMISSION
// =============================================================================

/// Lead payload as posted by the contact form.
///
/// Every field is optional on the wire so the relay can tell a missing field
/// apart from a malformed body. `consentTimestamp` is deliberately absent: the
/// relay stamps it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    #[validate(
        required(message = "First name is required"),
        length(min = 2, max = 50, message = "First name must be 2-50 characters")
    )]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[validate(
        required(message = "Last name is required"),
        length(min = 2, max = 50, message = "Last name must be 2-50 characters")
    )]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[validate(
        required(message = "Email is required"),
        email(message = "Please enter a valid email address"),
        length(max = 255, message = "Email must be at most 255 characters")
    )]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[validate(required(message = "Phone is required"), custom(function = "validate_phone"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[validate(length(max = 200, message = "Address must be at most 200 characters"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[validate(custom(function = "validate_service_needed"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_needed: Option<String>,

    #[validate(custom(function = "validate_preferred_contact"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_contact: Option<String>,

    #[validate(length(max = 1000, message = "Message must be at most 1000 characters"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tcpa_consent: Option<bool>,
}

impl LeadSubmission {
    /// Copy with every text field trimmed and blank values collapsed to `None`.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            first_name: trimmed(self.first_name.as_deref()),
            last_name: trimmed(self.last_name.as_deref()),
            email: trimmed(self.email.as_deref()),
            phone: trimmed(self.phone.as_deref()),
            address: trimmed(self.address.as_deref()),
            service_needed: trimmed(self.service_needed.as_deref()),
            preferred_contact: trimmed(self.preferred_contact.as_deref()),
            message: trimmed(self.message.as_deref()),
            tcpa_consent: self.tcpa_consent,
        }
    }

    /// Wire names of the relay-required fields that are absent or blank.
    #[must_use]
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        let normalized = self.normalized();
        let mut missing = Vec::new();
        if normalized.first_name.is_none() {
            missing.push("firstName");
        }
        if normalized.last_name.is_none() {
            missing.push("lastName");
        }
        if normalized.email.is_none() {
            missing.push("email");
        }
        if normalized.phone.is_none() {
            missing.push("phone");
        }
        if normalized.tcpa_consent.is_none() {
            missing.push("tcpaConsent");
        }
        missing
    }

    #[must_use]
    pub fn service(&self) -> Option<ServiceNeeded> {
        self.service_needed.as_deref().and_then(ServiceNeeded::from_slug)
    }

    #[must_use]
    pub fn contact_method(&self) -> Option<PreferredContact> {
        self.preferred_contact.as_deref().and_then(PreferredContact::from_slug)
    }
}

fn trimmed(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

/// Strip formatting characters and keep only the digits of a phone number.
#[must_use]
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let allowed = phone
        .chars()
        .all(|c| c.is_ascii_digit() || PHONE_FORMATTING.contains(&c));
    let digits = normalize_phone(phone).len();
    if allowed && (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits) {
        return Ok(());
    }
    Err(validation_error("phone", "Please enter a valid phone number"))
}

fn validate_service_needed(service: &str) -> Result<(), ValidationError> {
    if ServiceNeeded::from_slug(service).is_some() {
        return Ok(());
    }
    Err(validation_error("service_needed", "Please select a service"))
}

fn validate_preferred_contact(method: &str) -> Result<(), ValidationError> {
    if PreferredContact::from_slug(method).is_some() {
        return Ok(());
    }
    Err(validation_error("preferred_contact", "Please select preferred contact method"))
}

fn validation_error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError { code: Cow::from(code), message: Some(Cow::from(message)), params: HashMap::new() }
}

// =============================================================================
// FIELD ERRORS
// =============================================================================

/// First validation message per field, keyed by camelCase wire name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field` unless the field already has one.
    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_owned())
            .or_insert_with(|| message.into());
    }

    /// Drop the message for `field`, e.g. once the user edits it.
    pub fn remove(&mut self, field: &str) {
        self.0.remove(field);
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = Self::new();
        for (field, field_errors) in errors.field_errors() {
            let Some(first) = field_errors.first() else {
                continue;
            };
            let message = first
                .message
                .as_ref()
                .map_or_else(|| format!("Invalid {field}"), ToString::to_string);
            out.insert(&wire_name(&field), message);
        }
        out
    }
}

/// Convert a snake_case Rust field name to its camelCase wire name.
fn wire_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.push(c.to_ascii_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

// =============================================================================
// VALIDATION ENTRY POINTS
// =============================================================================

/// Why the relay refused to forward a submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeadRejection {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("tcpa consent not given")]
    ConsentRequired,
    #[error("invalid fields: {}", .0.fields().collect::<Vec<_>>().join(", "))]
    InvalidFields(FieldErrors),
}

impl LeadRejection {
    /// Public error string returned to the browser.
    #[must_use]
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::MissingFields(_) => ERROR_MISSING_FIELDS,
            Self::ConsentRequired => ERROR_CONSENT_REQUIRED,
            Self::InvalidFields(_) => ERROR_INVALID_FIELDS,
        }
    }
}

/// Relay-side gate: presence first, then consent, then structure.
///
/// # Errors
///
/// Returns the first [`LeadRejection`] that applies.
pub fn validate_for_relay(submission: &LeadSubmission) -> Result<(), LeadRejection> {
    let missing = submission.missing_required_fields();
    if !missing.is_empty() {
        return Err(LeadRejection::MissingFields(missing));
    }
    if submission.tcpa_consent != Some(true) {
        return Err(LeadRejection::ConsentRequired);
    }
    submission
        .normalized()
        .validate()
        .map_err(|errors| LeadRejection::InvalidFields(errors.into()))
}

/// Form-side gate: every relay rule plus the selects the form makes mandatory.
///
/// # Errors
///
/// Returns every failing field with its first message.
pub fn validate_for_form(submission: &LeadSubmission) -> Result<(), FieldErrors> {
    let normalized = submission.normalized();
    let mut errors = match normalized.validate() {
        Ok(()) => FieldErrors::new(),
        Err(errors) => errors.into(),
    };
    if normalized.service_needed.is_none() {
        errors.insert("serviceNeeded", "Please select a service");
    }
    if normalized.preferred_contact.is_none() {
        errors.insert("preferredContact", "Please select preferred contact method");
    }
    if normalized.tcpa_consent != Some(true) {
        errors.insert("tcpaConsent", "You must agree to receive communications");
    }
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

// =============================================================================
// RESPONSE BODIES
// =============================================================================

/// `200` body returned by the relay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitSuccess {
    pub success: bool,
}

/// Error body returned by the relay for `400` and `500` responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitError {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<FieldErrors>,
}

impl SubmitError {
    #[must_use]
    pub fn new(error: &str) -> Self {
        Self { error: error.to_owned(), fields: None }
    }

    #[must_use]
    pub fn with_fields(mut self, fields: FieldErrors) -> Self {
        self.fields = Some(fields);
        self
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
