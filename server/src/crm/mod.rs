//! CRM — outbound lead delivery.
//!
//! DESIGN
//! ======
//! Configuration comes from environment variables. The `CrmClient` enum
//! dispatches to the contacts REST API or an inbound webhook based on
//! `CRM_MODE`. Both transports post the same [`types::CrmContact`] body and
//! make exactly one attempt per lead.

pub mod config;
pub mod rest;
pub mod types;
pub mod webhook;

#[cfg(test)]
pub mod test_helpers;

use std::time::Duration;

use config::{CrmConfig, CrmMode, CrmTarget, CrmTimeouts};
pub use types::LeadForward;
use types::{CrmError, ForwardedLead};

// =============================================================================
// CLIENT DISPATCH
// =============================================================================

/// Concrete CRM client that dispatches to the REST or webhook transport.
///
/// Configured from environment variables by [`CrmClient::from_env`].
pub struct CrmClient {
    mode: CrmMode,
    inner: CrmTransport,
}

enum CrmTransport {
    Rest(rest::RestContactsClient),
    Webhook(webhook::WebhookClient),
}

impl CrmClient {
    /// Build a CRM client from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required variables are missing or the HTTP client fails.
    pub fn from_env() -> Result<Self, CrmError> {
        let config = CrmConfig::from_env()?;
        Self::from_config(config)
    }

    /// Build a CRM client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: CrmConfig) -> Result<Self, CrmError> {
        let mode = config.mode();
        let inner = match config.target {
            CrmTarget::Rest { url, api_key } => CrmTransport::Rest(rest::RestContactsClient::new(
                url,
                api_key,
                config.routing,
                config.timeouts,
            )?),
            CrmTarget::Webhook { url } => {
                CrmTransport::Webhook(webhook::WebhookClient::new(url, config.routing, config.timeouts)?)
            }
        };
        Ok(Self { mode, inner })
    }

    #[must_use]
    pub fn mode(&self) -> CrmMode {
        self.mode
    }
}

#[async_trait::async_trait]
impl LeadForward for CrmClient {
    async fn forward(&self, lead: &ForwardedLead) -> Result<(), CrmError> {
        match &self.inner {
            CrmTransport::Rest(c) => c.create_contact(lead).await,
            CrmTransport::Webhook(c) => c.deliver(lead).await,
        }
    }
}

// =============================================================================
// SHARED HTTP
// =============================================================================

fn build_http(timeouts: CrmTimeouts) -> Result<reqwest::Client, CrmError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeouts.request_secs))
        .connect_timeout(Duration::from_secs(timeouts.connect_secs))
        .build()
        .map_err(|e| CrmError::HttpClientBuild(e.to_string()))
}

/// Any 2xx is accepted; everything else carries the upstream body back for logging.
async fn check_response(response: reqwest::Response) -> Result<(), CrmError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let body = response.text().await.unwrap_or_default();
    Err(CrmError::ApiResponse { status: status.as_u16(), body })
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
