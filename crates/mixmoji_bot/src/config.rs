//! Plugin configuration.

use mixmoji_error::{ConfigError, MixmojiResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Public metadata feed describing the known emoji combinations.
const DEFAULT_METADATA_URL: &str =
    "https://raw.githubusercontent.com/xsalazar2/emoji-kitchen-backend/main/app/metadata.json";

/// Floor for the background refresh interval.
const MIN_UPDATE_INTERVAL_SECS: u64 = 3_600;

/// Floor for the request timeout.
const MIN_TIMEOUT_MS: u64 = 1_000;

/// Configuration for the Mixmoji plugin.
#[derive(
    Debug,
    Clone,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
    derive_builder::Builder,
)]
#[setters(prefix = "with_")]
#[builder(default)]
pub struct PluginConfig {
    /// Whether to refresh the metadata on a background interval
    #[serde(default = "default_auto_update")]
    auto_update: bool,

    /// Seconds between background refreshes
    #[serde(default = "default_update_interval_secs")]
    update_interval_secs: u64,

    /// Upstream metadata document URL
    #[serde(default = "default_metadata_url")]
    metadata_url: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    timeout_ms: u64,

    /// Plugin-private data directory; platform data dir when unset
    #[serde(default)]
    data_dir: Option<PathBuf>,
}

fn default_auto_update() -> bool {
    true
}

fn default_update_interval_secs() -> u64 {
    86_400
}

fn default_metadata_url() -> String {
    DEFAULT_METADATA_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    30_000
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            auto_update: default_auto_update(),
            update_interval_secs: default_update_interval_secs(),
            metadata_url: default_metadata_url(),
            timeout_ms: default_timeout_ms(),
            data_dir: None,
        }
    }
}

impl PluginConfig {
    /// Load plugin configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> MixmojiResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)).into())
    }

    /// Apply the documented floors to interval and timeout.
    ///
    /// Sub-minimum values are clamped rather than rejected.
    pub fn normalized(mut self) -> Self {
        if self.update_interval_secs < MIN_UPDATE_INTERVAL_SECS {
            tracing::warn!(
                configured = self.update_interval_secs,
                floor = MIN_UPDATE_INTERVAL_SECS,
                "Update interval below floor, clamping"
            );
            self.update_interval_secs = MIN_UPDATE_INTERVAL_SECS;
        }
        if self.timeout_ms < MIN_TIMEOUT_MS {
            tracing::warn!(
                configured = self.timeout_ms,
                floor = MIN_TIMEOUT_MS,
                "Timeout below floor, clamping"
            );
            self.timeout_ms = MIN_TIMEOUT_MS;
        }
        self
    }

    /// The background refresh interval as a `Duration`.
    pub fn update_interval(&self) -> Duration {
        Duration::from_secs(self.update_interval_secs)
    }

    /// The request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// The data directory, falling back to the platform data dir.
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("mixmoji")
        })
    }
}
