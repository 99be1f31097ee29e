use std::time::Duration;

use crate::error::GatewayError;
use crate::gateway::{select_source, Source};

const DEFAULT_BASE_URL: &str = "http://localhost:4000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Content gateway configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Base URL of the CMS REST API (without the `/api` suffix).
    pub rest_base_url: String,
    /// Bearer token attached to REST requests when set.
    pub api_token: Option<String>,
    /// Capability flag: this deployment can run the direct client.
    pub direct_client: bool,
    /// CMS secret; its presence gates the direct client.
    pub cms_secret: Option<String>,
    /// Connection string of the direct document store.
    pub database_url: Option<String>,
    /// Upper bound for a single REST request.
    pub request_timeout_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            rest_base_url: DEFAULT_BASE_URL.to_string(),
            api_token: None,
            direct_client: false,
            cms_secret: None,
            database_url: None,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl GatewayConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                 |
    /// |----------------------------|-------------------------|
    /// | `CMS_BASE_URL`             | `http://localhost:4000` |
    /// | `CMS_API_TOKEN`            | unset                   |
    /// | `CMS_DIRECT_CLIENT`        | `false`                 |
    /// | `PAYLOAD_SECRET`           | unset                   |
    /// | `DATABASE_URL`             | unset                   |
    /// | `CMS_REQUEST_TIMEOUT_SECS` | `10`                    |
    pub fn from_env() -> Result<Self, GatewayError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, GatewayError> {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let rest_base_url = non_empty("CMS_BASE_URL")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let direct_client = match non_empty("CMS_DIRECT_CLIENT") {
            None => false,
            Some(raw) => parse_flag(&raw).ok_or_else(|| {
                GatewayError::Config(format!("CMS_DIRECT_CLIENT must be a boolean, got '{raw}'"))
            })?,
        };

        let request_timeout_secs = match non_empty("CMS_REQUEST_TIMEOUT_SECS") {
            None => DEFAULT_TIMEOUT_SECS,
            Some(raw) => raw.parse::<u64>().ok().filter(|secs| *secs > 0).ok_or_else(|| {
                GatewayError::Config(format!(
                    "CMS_REQUEST_TIMEOUT_SECS must be a positive integer, got '{raw}'"
                ))
            })?,
        };

        Ok(Self {
            rest_base_url,
            api_token: non_empty("CMS_API_TOKEN"),
            direct_client,
            cms_secret: non_empty("PAYLOAD_SECRET"),
            database_url: non_empty("DATABASE_URL"),
            request_timeout_secs,
        })
    }

    /// Whether the direct client may be used: the deployment is capable
    /// and the CMS secret is configured.
    pub fn direct_enabled(&self) -> bool {
        select_source(self.direct_client, self.cms_secret.is_some()) == Source::Direct
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
