//! Runtime configuration passed in by the host page
//!
//! The page hands a JSON object to `start_app`; every field is optional.

use anyhow::Context;
use billed_core::session::{TOKEN_KEY, USER_KEY};
use billed_types::DEFAULT_PCT;
use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Base URL of the bills API
    pub api_base_url: String,
    /// localStorage key holding the signed-in user
    pub session_key: String,
    /// localStorage key holding the bearer token
    pub token_key: String,
    /// VAT percentage used when the form leaves it empty
    pub default_pct: u32,
    /// Serve the bundled fixtures from memory instead of calling the API
    pub demo: bool,
    /// Most verbose level forwarded to the console
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5678".to_string(),
            session_key: USER_KEY.to_string(),
            token_key: TOKEN_KEY.to_string(),
            default_pct: DEFAULT_PCT,
            demo: false,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse configuration from a JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, a field has the wrong type,
    /// or the log level is unknown.
    pub fn from_json(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig =
            serde_json::from_str(s).context("Failed to parse app configuration")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        self.level()
            .with_context(|| format!("Unknown log level: {:?}", self.log_level))?;
        anyhow::ensure!(
            !self.api_base_url.trim().is_empty() || self.demo,
            "apiBaseUrl is required unless demo mode is on"
        );
        Ok(())
    }

    pub fn level(&self) -> Option<tracing::Level> {
        self.log_level.parse().ok()
    }

    /// Base URL without its trailing slash
    pub fn api_base(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}
