//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since the form only submits
//! from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<(), String>` instead of panics. The error string is
//! for the console log; the user only ever sees the generic failure toast.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use leads::LeadSubmission;

/// Give up on the relay after this long and surface a failure.
pub const SUBMIT_TIMEOUT_MS: u32 = 15_000;

#[cfg(any(test, feature = "hydrate"))]
fn submit_failed_message(status: u16, error: Option<&str>) -> String {
    match error {
        Some(error) => format!("submit failed: {status} ({error})"),
        None => format!("submit failed: {status}"),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn submit_timeout_message() -> String {
    format!("submit timed out after {}s", SUBMIT_TIMEOUT_MS / 1000)
}

/// Post a lead to `POST /api/submit-form`.
///
/// # Errors
///
/// Returns an error string on network failure, timeout, or any non-success
/// response.
pub async fn submit_lead(submission: &LeadSubmission) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        use futures::FutureExt;

        let request = gloo_net::http::Request::post(leads::SUBMIT_FORM_PATH)
            .json(submission)
            .map_err(|e| e.to_string())?;
        let send = request.send().fuse();
        let timeout = gloo_timers::future::TimeoutFuture::new(SUBMIT_TIMEOUT_MS).fuse();
        futures::pin_mut!(send, timeout);

        let resp = futures::select! {
            resp = send => resp.map_err(|e| e.to_string())?,
            () = timeout => return Err(submit_timeout_message()),
        };
        if !resp.ok() {
            let body = resp.json::<leads::SubmitError>().await.ok();
            return Err(submit_failed_message(resp.status(), body.as_ref().map(|b| b.error.as_str())));
        }
        let body: leads::SubmitSuccess = resp.json().await.map_err(|e| e.to_string())?;
        if body.success { Ok(()) } else { Err(submit_failed_message(resp.status(), None)) }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = submission;
        Err("not available on server".to_owned())
    }
}
