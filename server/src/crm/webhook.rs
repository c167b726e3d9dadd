//! Inbound-webhook client. The URL is the credential, so no auth header is sent.

use super::config::{CrmRouting, CrmTimeouts};
use super::types::{CrmContact, CrmError, ForwardedLead};

pub struct WebhookClient {
    http: reqwest::Client,
    url: String,
    routing: CrmRouting,
}

impl WebhookClient {
    pub fn new(url: String, routing: CrmRouting, timeouts: CrmTimeouts) -> Result<Self, CrmError> {
        let http = super::build_http(timeouts)?;
        Ok(Self { http, url, routing })
    }

    pub async fn deliver(&self, lead: &ForwardedLead) -> Result<(), CrmError> {
        let body = CrmContact::new(lead, &self.routing);

        let response = self
            .http
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| CrmError::ApiRequest(e.without_url().to_string()))?;

        super::check_response(response).await
    }
}

#[cfg(test)]
#[path = "webhook_test.rs"]
mod tests;
