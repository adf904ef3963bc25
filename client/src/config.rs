//! Backend client configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Production backend.
pub const DEFAULT_BASE_URL: &str = "https://ekyc-core-1019050071398.us-central1.run.app";

/// Configuration for a [`BackendClient`](crate::BackendClient).
///
/// Fixed at construction; the client never mutates it. Can be loaded from a
/// TOML file via [`ClientConfig::from_toml_file`] or built programmatically.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Scheme and host of the verification backend, optionally with a path
    /// prefix. Endpoint paths are appended verbatim.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Key sent as `x-api-key` when creating sessions.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Delay between result polls while the backend reports `in_progress`.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    /// Per-request timeout.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_poll_interval_secs() -> u64 {
    5
}

fn default_request_timeout_secs() -> u64 {
    60
}

fn default_connect_timeout_secs() -> u64 {
    10
}

// ── Impl ───────────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ClientConfig {
    /// Config pointing at `base_url` with the given API key and defaults
    /// for everything else.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key,
            ..Default::default()
        }
    }

    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// The API key, treating an empty or blank value as absent.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            poll_interval_secs: default_poll_interval_secs(),
            request_timeout_secs: default_request_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_toml_yields_defaults() {
        let config = ClientConfig::from_toml_str("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.poll_interval(), Duration::from_secs(5));
        assert_eq!(config.request_timeout(), Duration::from_secs(60));
        assert_eq!(config.api_key(), None);
    }

    #[test]
    fn partial_toml_overrides_fields() {
        let config = ClientConfig::from_toml_str(
            r#"
            base_url = "http://localhost:8080"
            api_key = "secret"
            poll_interval_secs = 1
            "#,
        )
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.api_key(), Some("secret"));
        assert_eq!(config.poll_interval_secs, 1);
        assert_eq!(config.connect_timeout_secs, 10);
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let config = ClientConfig::new("http://localhost", Some("   ".into()));
        assert_eq!(config.api_key(), None);
    }

    #[test]
    fn toml_roundtrip() {
        let config = ClientConfig::new("http://localhost:9000", Some("k".into()));
        let text = config.to_toml_string().unwrap();
        assert_eq!(ClientConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_key = \"from-file\"").unwrap();
        let config = ClientConfig::from_toml_file(file.path()).unwrap();
        assert_eq!(config.api_key(), Some("from-file"));
    }

    #[test]
    fn invalid_toml_is_rejected() {
        assert!(matches!(
            ClientConfig::from_toml_str("poll_interval_secs = \"soon\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            ClientConfig::from_toml_file("/nonexistent/bkyc.toml"),
            Err(ConfigError::Io(_))
        ));
    }
}
