//! Application configuration.
//!
//! Handles loading and validating `shopdesk.toml`. There is exactly one
//! config source per client session — no cascade, no overrides — and every
//! option has a stock default, so the file is optional and sparse:
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! api_base_url = "/api"     # Prefix for all transport-layer requests
//!
//! # Category options offered in the product form. The dashboard's category
//! # filter derives its own options from fetched data instead.
//! categories = ["mobile", "electronics", "fashion", "home", "books", "other"]
//!
//! request_timeout_secs = 30 # Per-request deadline for the transport layer
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Client configuration loaded from `shopdesk.toml`.
///
/// All fields have sensible defaults. A config file need only specify the
/// values it wants to override. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Prefix the transport layer puts in front of every request path.
    pub api_base_url: String,
    /// Category options offered in the product form's selector.
    pub categories: Vec<String>,
    /// Per-request deadline handed to the transport layer.
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            api_base_url: "/api".to_string(),
            categories: stock_categories(),
            request_timeout_secs: 30,
        }
    }
}

fn stock_categories() -> Vec<String> {
    ["mobile", "electronics", "fashion", "home", "books", "other"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl AppConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base_url.is_empty() {
            return Err(ConfigError::Validation(
                "api_base_url must not be empty".into(),
            ));
        }
        if self.categories.is_empty() {
            return Err(ConfigError::Validation(
                "categories must list at least one option".into(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "request_timeout_secs must be non-zero".into(),
            ));
        }
        Ok(())
    }
}

/// Load `shopdesk.toml` from `dir`, falling back to stock defaults when the
/// file doesn't exist. A file that exists but fails to parse or validate is
/// an error — silent fallback would mask typos.
pub fn load_config(dir: &Path) -> Result<AppConfig, ConfigError> {
    let path = dir.join("shopdesk.toml");
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let content = fs::read_to_string(&path)?;
    let config: AppConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// A documented stock config, suitable for writing out as a starting point.
pub fn stock_config_toml() -> String {
    let defaults = AppConfig::default();
    format!(
        r#"# shopdesk configuration
# All options are optional - defaults shown below.

# Prefix for all transport-layer requests
api_base_url = "{base}"

# Category options offered in the product form. The dashboard's category
# filter derives its own options from fetched data instead.
categories = [{categories}]

# Per-request deadline for the transport layer
request_timeout_secs = {timeout}
"#,
        base = defaults.api_base_url,
        categories = defaults
            .categories
            .iter()
            .map(|c| format!("\"{c}\""))
            .collect::<Vec<_>>()
            .join(", "),
        timeout = defaults.request_timeout_secs,
    )
}
