mod defaults;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::LingoError;
use defaults::*;

/// Top-level Lingo configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub lingo: LingoConfig,
    #[serde(default)]
    pub language: LanguageConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LingoConfig {
    /// Application name reported with feedback submissions.
    #[serde(default = "default_app_name")]
    pub app_name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for LingoConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            log_level: default_log_level(),
        }
    }
}

/// Localization settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    /// Persisted language setting code. Absent = follow the device.
    #[serde(default)]
    pub setting: Option<i64>,
    /// Catalog slice used when the active language lacks a key.
    #[serde(default = "default_tag")]
    pub default_tag: String,
    /// JSON string catalog. Missing file = built-in catalog.
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,
    /// Prepended to every translated string. Empty in production.
    #[serde(default)]
    pub display_prefix: String,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            setting: None,
            default_tag: default_tag(),
            catalog_path: default_catalog_path(),
            display_prefix: String::new(),
        }
    }
}

/// Analytics and feedback backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default)]
    pub enabled: bool,
    /// POST target for analytic events. Empty = analytics disabled.
    #[serde(default)]
    pub analytics_endpoint: String,
    /// Cloud project hosting the feedback function.
    #[serde(default)]
    pub project_id: String,
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(default = "default_feedback_function")]
    pub feedback_function: String,
    /// App attestation token sent with every request. Empty = not sent.
    #[serde(default)]
    pub app_check_token: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            analytics_endpoint: String::new(),
            project_id: String::new(),
            region: default_region(),
            feedback_function: default_feedback_function(),
            app_check_token: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl TelemetryConfig {
    /// URL of the callable feedback function, or `None` without a project.
    pub fn feedback_url(&self) -> Option<String> {
        if self.project_id.is_empty() {
            return None;
        }
        Some(format!(
            "https://{}-{}.cloudfunctions.net/{}",
            self.region, self.project_id, self.feedback_function
        ))
    }
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, LingoError> {
    let expanded = shellexpand(path);
    let path = Path::new(&expanded);
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| LingoError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    parse(&content)
}

/// Parse configuration from TOML text.
pub fn parse(content: &str) -> Result<Config, LingoError> {
    toml::from_str(content).map_err(|e| LingoError::Config(format!("failed to parse config: {e}")))
}
