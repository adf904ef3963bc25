//! Demo configuration: an optional TOML file overlaid by CLI flags and env vars.

use std::path::Path;

use anyhow::Context;
use bkyc_client::ClientConfig;
use bkyc_utils::LogFormat;
use serde::{Deserialize, Serialize};

/// Everything the demo binary needs before it can talk to the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default)]
    pub log_format: LogFormat,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub backend: ClientConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::default(),
            log_level: default_log_level(),
            backend: ClientConfig::default(),
        }
    }
}

/// Values supplied on the command line or through the environment.
/// `None` leaves the file (or default) value in place.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub poll_interval_secs: Option<u64>,
    pub log_format: Option<LogFormat>,
    pub log_level: Option<String>,
}

impl DemoConfig {
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("invalid config")
    }

    /// Load `path` if given, otherwise start from defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => {
                let contents = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read config file {}", path.display()))?;
                Self::from_toml_str(&contents)
                    .with_context(|| format!("failed to parse config file {}", path.display()))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(base_url) = overrides.base_url {
            self.backend.base_url = base_url;
        }
        if let Some(api_key) = overrides.api_key {
            self.backend.api_key = Some(api_key);
        }
        if let Some(secs) = overrides.poll_interval_secs {
            self.backend.poll_interval_secs = secs;
        }
        if let Some(format) = overrides.log_format {
            self.log_format = format;
        }
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
        self
    }
}
