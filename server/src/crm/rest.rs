//! Contacts REST API client.
//!
//! Posts one contact per lead with a bearer API key.

use super::config::{CrmRouting, CrmTimeouts};
use super::types::{CrmContact, CrmError, ForwardedLead};

pub struct RestContactsClient {
    http: reqwest::Client,
    url: String,
    api_key: String,
    routing: CrmRouting,
}

impl RestContactsClient {
    pub fn new(url: String, api_key: String, routing: CrmRouting, timeouts: CrmTimeouts) -> Result<Self, CrmError> {
        let http = super::build_http(timeouts)?;
        Ok(Self { http, url, api_key, routing })
    }

    pub async fn create_contact(&self, lead: &ForwardedLead) -> Result<(), CrmError> {
        let body = CrmContact::new(lead, &self.routing);

        let response = self
            .http
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| CrmError::ApiRequest(e.to_string()))?;

        super::check_response(response).await
    }
}

#[cfg(test)]
#[path = "rest_test.rs"]
mod tests;
