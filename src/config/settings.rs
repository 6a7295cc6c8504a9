//! User settings for Wealth Architect
//!
//! Manages the generative-text service endpoint, form defaults, and logging
//! preferences. The API key is deliberately not a setting: only the name of
//! the environment variable holding it is stored.

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use super::paths::WealthPaths;
use crate::error::WealthError;

/// User settings for Wealth Architect
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Generative model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the generative-text REST API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Name of the environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Whole-request timeout for the affirmation call, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Horizon pre-filled in the form
    #[serde(default = "default_years")]
    pub default_years: u32,

    /// Annual rate pre-filled in the form
    #[serde(default = "default_rate_percent")]
    pub default_rate_percent: f64,

    /// Log level for the file logger (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_api_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_request_timeout_secs() -> u64 {
    120
}

fn default_years() -> u32 {
    10
}

fn default_rate_percent() -> f64 {
    10.0
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            model: default_model(),
            api_base_url: default_api_base_url(),
            api_key_env: default_api_key_env(),
            request_timeout_secs: default_request_timeout_secs(),
            default_years: default_years(),
            default_rate_percent: default_rate_percent(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &WealthPaths) -> Result<Self, WealthError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| WealthError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                WealthError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &WealthPaths) -> Result<(), WealthError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| WealthError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| WealthError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Read the API key from the configured environment variable
    pub fn api_key(&self) -> Result<Zeroizing<String>, WealthError> {
        match std::env::var(&self.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Ok(Zeroizing::new(key)),
            _ => Err(WealthError::Config(format!(
                "environment variable {} is not set",
                self.api_key_env
            ))),
        }
    }

    /// Whether the API key variable is present, without exposing it
    pub fn has_api_key(&self) -> bool {
        self.api_key().is_ok()
    }
}
