//! `POST /api/submit-form` — browser-facing lead relay.
//!
//! Translates relay outcomes into the public response contract. Upstream
//! CRM details are logged here and never echoed to the browser.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use leads::{LeadRejection, LeadSubmission, SubmitError, SubmitSuccess};

use crate::crm::types::CrmError;
use crate::services::lead::{self as lead_svc, RelayError};
use crate::state::AppState;

/// Validate a lead and forward it to the CRM.
pub async fn submit_form(
    State(state): State<AppState>,
    payload: Result<Json<LeadSubmission>, JsonRejection>,
) -> Response {
    let Json(submission) = match payload {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!(error = %e, "rejected unparseable lead body");
            return error_response(StatusCode::BAD_REQUEST, SubmitError::new(leads::ERROR_INVALID_BODY));
        }
    };

    match lead_svc::relay_lead(state.crm.as_deref(), &submission).await {
        Ok(()) => {
            tracing::info!(
                service = submission.service_needed.as_deref().unwrap_or("unspecified"),
                "lead forwarded to CRM"
            );
            (StatusCode::OK, Json(SubmitSuccess { success: true })).into_response()
        }
        Err(e) => {
            log_relay_error(&e);
            error_response(relay_error_to_status(&e), relay_error_body(e))
        }
    }
}

/// Any method other than POST on the relay path.
pub async fn method_not_allowed() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, SubmitError::new(leads::ERROR_METHOD_NOT_ALLOWED))
}

pub(crate) fn relay_error_to_status(err: &RelayError) -> StatusCode {
    match err {
        RelayError::Rejected(_) => StatusCode::BAD_REQUEST,
        RelayError::NotConfigured | RelayError::Timestamp(_) | RelayError::Upstream(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn relay_error_body(err: RelayError) -> SubmitError {
    match err {
        RelayError::Rejected(LeadRejection::InvalidFields(fields)) => {
            SubmitError::new(leads::ERROR_INVALID_FIELDS).with_fields(fields)
        }
        RelayError::Rejected(rejection) => SubmitError::new(rejection.public_message()),
        RelayError::NotConfigured | RelayError::Timestamp(_) | RelayError::Upstream(_) => {
            SubmitError::new(leads::ERROR_SUBMISSION_FAILED)
        }
    }
}

fn log_relay_error(err: &RelayError) {
    match err {
        RelayError::Rejected(LeadRejection::InvalidFields(fields)) => {
            tracing::info!(fields = fields.len(), "lead rejected: invalid fields");
        }
        RelayError::Rejected(rejection) => tracing::info!(reason = %rejection, "lead rejected"),
        RelayError::NotConfigured => tracing::error!("lead dropped: CRM client not configured"),
        RelayError::Timestamp(e) => tracing::error!(error = %e, "consent timestamp failed"),
        RelayError::Upstream(CrmError::ApiResponse { status, body }) => {
            tracing::error!(status, body = %body, code = "E_API_RESPONSE", "CRM rejected lead");
        }
        RelayError::Upstream(e) => tracing::error!(error = %e, code = e.error_code(), "CRM forward failed"),
    }
}

fn error_response(status: StatusCode, body: SubmitError) -> Response {
    (status, Json(body)).into_response()
}

#[cfg(test)]
#[path = "submit_test.rs"]
mod tests;
