//! CRM configuration parsed from environment variables.

use std::fmt;

use super::types::CrmError;

pub const DEFAULT_CRM_REST_URL: &str = "https://rest.gohighlevel.com/v1/contacts/";
pub const DEFAULT_LEAD_SOURCE: &str = "Desert Cool Air Website";
pub const DEFAULT_LEAD_TAGS: &str = "website-lead,hvac,phoenix";
pub const DEFAULT_CRM_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CRM_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrmMode {
    Rest,
    Webhook,
}

impl CrmMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rest => "rest",
            Self::Webhook => "webhook",
        }
    }
}

/// Where leads go and how the request is authorized.
#[derive(Clone, PartialEq, Eq)]
pub enum CrmTarget {
    Rest { url: String, api_key: String },
    Webhook { url: String },
}

impl fmt::Debug for CrmTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rest { url, .. } => f
                .debug_struct("Rest")
                .field("url", url)
                .field("api_key", &"<redacted>")
                .finish(),
            Self::Webhook { .. } => f.debug_struct("Webhook").field("url", &"<redacted>").finish(),
        }
    }
}

/// Identifiers attached to every forwarded lead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrmRouting {
    pub location_id: String,
    pub source: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrmTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrmConfig {
    pub target: CrmTarget,
    pub routing: CrmRouting,
    pub timeouts: CrmTimeouts,
}

impl CrmConfig {
    /// Build typed CRM config from environment variables.
    ///
    /// Required:
    /// - `CRM_LOCATION_ID`
    /// - `CRM_API_KEY` when `CRM_MODE=rest`
    /// - `CRM_WEBHOOK_URL` when `CRM_MODE=webhook`
    ///
    /// Optional:
    /// - `CRM_MODE`: `rest` (default) or `webhook`
    /// - `CRM_REST_URL`: GoHighLevel contacts endpoint by default
    /// - `LEAD_SOURCE`, `LEAD_TAGS` (comma-separated)
    /// - `CRM_REQUEST_TIMEOUT_SECS`: default 10
    /// - `CRM_CONNECT_TIMEOUT_SECS`: default 5
    pub fn from_env() -> Result<Self, CrmError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`CrmConfig::from_env`] with an injectable key lookup.
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CrmError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let require = |key: &str| get(key).ok_or_else(|| CrmError::MissingConfig { var: key.into() });

        let mode = parse_mode(get("CRM_MODE").as_deref())?;
        let target = match mode {
            CrmMode::Rest => CrmTarget::Rest {
                url: get("CRM_REST_URL").unwrap_or_else(|| DEFAULT_CRM_REST_URL.to_string()),
                api_key: require("CRM_API_KEY")?,
            },
            CrmMode::Webhook => CrmTarget::Webhook { url: require("CRM_WEBHOOK_URL")? },
        };
        let routing = CrmRouting {
            location_id: require("CRM_LOCATION_ID")?,
            source: get("LEAD_SOURCE").unwrap_or_else(|| DEFAULT_LEAD_SOURCE.to_string()),
            tags: parse_tags(get("LEAD_TAGS").as_deref().unwrap_or(DEFAULT_LEAD_TAGS)),
        };
        let timeouts = CrmTimeouts {
            request_secs: parse_u64(get("CRM_REQUEST_TIMEOUT_SECS"), DEFAULT_CRM_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_u64(get("CRM_CONNECT_TIMEOUT_SECS"), DEFAULT_CRM_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { target, routing, timeouts })
    }

    #[must_use]
    pub fn mode(&self) -> CrmMode {
        match self.target {
            CrmTarget::Rest { .. } => CrmMode::Rest,
            CrmTarget::Webhook { .. } => CrmMode::Webhook,
        }
    }
}

fn parse_u64(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|v| v.parse::<u64>().ok()).unwrap_or(default)
}

fn parse_mode(raw: Option<&str>) -> Result<CrmMode, CrmError> {
    match raw.unwrap_or("rest") {
        "rest" => Ok(CrmMode::Rest),
        "webhook" => Ok(CrmMode::Webhook),
        other => Err(CrmError::ConfigParse(format!(
            "unsupported CRM_MODE '{other}' (expected 'rest' or 'webhook')"
        ))),
    }
}

fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
