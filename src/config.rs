// src/config.rs - Suite configuration loaded from environment variables

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::error::{ProbeError, Result};

/// Default base host of the item service under test.
pub const DEFAULT_BASE_URL: &str = "https://qa-internship.avito.com";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the item service under test
    pub base_url: String,
    /// Per-request timeout in seconds (HTTP client default behavior otherwise)
    pub timeout_seconds: u64,
    /// Whether tests that hit the live service are enabled
    pub live: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: 30,
            live: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Recognized variables: `ITEMPROBE_BASE_URL`, `ITEMPROBE_TIMEOUT_SECONDS`,
    /// `ITEMPROBE_LIVE`. Unset variables fall back to defaults.
    pub fn from_env() -> Result<Self> {
        let mut config = Config::default();
        let mut parse_errors = Vec::new();

        debug!("🔧 Loading configuration from environment variables");

        if let Ok(base_url) = std::env::var("ITEMPROBE_BASE_URL") {
            debug!("Found ITEMPROBE_BASE_URL: {}", base_url);
            config.base_url = base_url;
        }

        if let Ok(timeout) = std::env::var("ITEMPROBE_TIMEOUT_SECONDS") {
            match timeout.parse() {
                Ok(t) => {
                    debug!("Found ITEMPROBE_TIMEOUT_SECONDS: {}", t);
                    config.timeout_seconds = t;
                }
                Err(e) => {
                    parse_errors.push(format!(
                        "Invalid ITEMPROBE_TIMEOUT_SECONDS '{}': {}",
                        timeout, e
                    ));
                }
            }
        }

        if let Ok(live) = std::env::var("ITEMPROBE_LIVE") {
            config.live = live == "1" || live.eq_ignore_ascii_case("true");
            debug!("Found ITEMPROBE_LIVE: {}", config.live);
        }

        if !parse_errors.is_empty() {
            warn!("⚠️ Configuration parse errors: {:?}", parse_errors);
            return Err(ProbeError::Configuration(parse_errors.join("; ")));
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| ProbeError::Configuration(format!("Invalid base URL: {}", e)))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ProbeError::Configuration(format!(
                "Base URL must be http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.timeout_seconds == 0 {
            return Err(ProbeError::Configuration(
                "Timeout must be at least 1 second".to_string(),
            ));
        }

        Ok(())
    }

    /// Base URL parsed into a `Url`. Valid after `validate()`.
    pub fn base_url(&self) -> Result<Url> {
        Ok(Url::parse(&self.base_url)?)
    }
}
