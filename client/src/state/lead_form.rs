//! Lead form state: field values, inline errors, and the submit phase.
//!
//! DESIGN
//! ======
//! All transitions are pure so the form's behavior is testable without a
//! browser. The component owns the async call and feeds its result back
//! through [`LeadFormState::finish_submit`].

use leads::{FieldErrors, LeadSubmission};

use super::toast::ToastKind;

#[cfg(test)]
#[path = "lead_form_test.rs"]
mod lead_form_test;

pub const SUCCESS_TITLE: &str = "Request Submitted!";
pub const SUCCESS_DESCRIPTION: &str = "We'll be in touch within 24 hours.";
pub const FAILURE_TITLE: &str = "Something went wrong";
pub const FAILURE_DESCRIPTION: &str = "Please try again or call us directly at (602) 555-2665.";

/// Text inputs and selects on the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeadField {
    FirstName,
    LastName,
    Email,
    Phone,
    Address,
    ServiceNeeded,
    PreferredContact,
    Message,
}

impl LeadField {
    /// Key used for this field in [`FieldErrors`].
    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::ServiceNeeded => "serviceNeeded",
            Self::PreferredContact => "preferredContact",
            Self::Message => "message",
        }
    }
}

pub const CONSENT_FIELD: &str = "tcpaConsent";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub service_needed: String,
    pub preferred_contact: String,
    pub message: String,
    pub tcpa_consent: bool,
}

impl LeadFields {
    #[must_use]
    pub fn text(&self, field: LeadField) -> &str {
        match field {
            LeadField::FirstName => &self.first_name,
            LeadField::LastName => &self.last_name,
            LeadField::Email => &self.email,
            LeadField::Phone => &self.phone,
            LeadField::Address => &self.address,
            LeadField::ServiceNeeded => &self.service_needed,
            LeadField::PreferredContact => &self.preferred_contact,
            LeadField::Message => &self.message,
        }
    }

    pub fn set_text(&mut self, field: LeadField, value: String) {
        let slot = match field {
            LeadField::FirstName => &mut self.first_name,
            LeadField::LastName => &mut self.last_name,
            LeadField::Email => &mut self.email,
            LeadField::Phone => &mut self.phone,
            LeadField::Address => &mut self.address,
            LeadField::ServiceNeeded => &mut self.service_needed,
            LeadField::PreferredContact => &mut self.preferred_contact,
            LeadField::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Request body for the relay. Blank inputs are omitted.
    #[must_use]
    pub fn to_submission(&self) -> LeadSubmission {
        LeadSubmission {
            first_name: non_blank(&self.first_name),
            last_name: non_blank(&self.last_name),
            email: non_blank(&self.email),
            phone: non_blank(&self.phone),
            address: non_blank(&self.address),
            service_needed: non_blank(&self.service_needed),
            preferred_contact: non_blank(&self.preferred_contact),
            message: non_blank(&self.message),
            tcpa_consent: Some(self.tcpa_consent),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

/// Toast content produced when a submission settles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitNotice {
    pub kind: ToastKind,
    pub title: &'static str,
    pub description: &'static str,
}

impl SubmitNotice {
    pub const SUCCESS: Self = Self { kind: ToastKind::Success, title: SUCCESS_TITLE, description: SUCCESS_DESCRIPTION };
    pub const FAILURE: Self = Self { kind: ToastKind::Error, title: FAILURE_TITLE, description: FAILURE_DESCRIPTION };
}

#[derive(Clone, Debug, Default)]
pub struct LeadFormState {
    pub fields: LeadFields,
    pub errors: FieldErrors,
    pub phase: SubmitPhase,
}

impl LeadFormState {
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Update a text field and clear its inline error.
    pub fn edit(&mut self, field: LeadField, value: String) {
        self.fields.set_text(field, value);
        self.errors.remove(field.wire_name());
    }

    pub fn set_consent(&mut self, agreed: bool) {
        self.fields.tcpa_consent = agreed;
        self.errors.remove(CONSENT_FIELD);
    }

    #[must_use]
    pub fn error(&self, field: &str) -> Option<String> {
        self.errors.get(field).map(str::to_owned)
    }

    /// Validate and enter `Submitting`.
    ///
    /// Returns the body to send, or `None` when a submit is already in flight
    /// or validation failed (errors are recorded for inline display).
    pub fn begin_submit(&mut self) -> Option<LeadSubmission> {
        if self.is_submitting() {
            return None;
        }
        let submission = self.fields.to_submission();
        match leads::validate_for_form(&submission) {
            Ok(()) => {
                self.errors = FieldErrors::new();
                self.phase = SubmitPhase::Submitting;
                Some(submission)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// Leave `Submitting`. A successful submit clears the form.
    pub fn finish_submit<E>(&mut self, result: &Result<(), E>) -> SubmitNotice {
        self.phase = SubmitPhase::Idle;
        match result {
            Ok(()) => {
                self.fields = LeadFields::default();
                SubmitNotice::SUCCESS
            }
            Err(_) => SubmitNotice::FAILURE,
        }
    }
}
