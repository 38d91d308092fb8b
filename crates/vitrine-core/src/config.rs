//! Configuration module
//!
//! Environment-driven configuration for the portal collaborator clients.
//! Only the portal base URL is required; everything else carries a default.

use std::env;

use anyhow::Context;

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
const DEFAULT_STRUCTURE_KEY: &str = "TIKARAWMETADATA";

/// Portal connection and formatting configuration
#[derive(Clone, Debug)]
pub struct PortalConfig {
    /// Base URL of the portal, without a trailing slash
    pub base_url: String,
    /// Request timeout for portal HTTP calls, in seconds
    pub request_timeout_secs: u64,
    /// Key of the metadata structure holding extracted image metadata
    pub structure_key: String,
}

impl PortalConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            request_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            structure_key: DEFAULT_STRUCTURE_KEY.to_string(),
        }
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        let base_url = env::var("VITRINE_PORTAL_URL")
            .context("VITRINE_PORTAL_URL must be set")?
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            base_url,
            request_timeout_secs: env::var("VITRINE_HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|_| DEFAULT_HTTP_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS),
            structure_key: env::var("VITRINE_STRUCTURE_KEY")
                .unwrap_or_else(|_| DEFAULT_STRUCTURE_KEY.to_string()),
        })
    }
}
