//! Client configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::data::provider::QuoteError;

/// Configuration for the HTTP quote client.
///
/// `Default` reproduces the provider's known-good constants; a TOML file can
/// override any subset of fields. Retries are opt-in: the default is a
/// single best-effort attempt per fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Endpoint serving historical quotes.
    pub base_url: String,

    /// Hard cap on a single request, connect plus read.
    pub timeout_secs: u64,

    /// Extra attempts after the first failure. 0 means no retry.
    pub max_retries: u32,

    /// Backoff starts here and doubles per retry.
    pub retry_base_delay_ms: u64,

    /// User agent presented to the provider.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://q.stock.sohu.com/hisHq".into(),
            timeout_secs: 30,
            max_retries: 0,
            retry_base_delay_ms: 500,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/144.0.0.0 Safari/537.36"
                .into(),
        }
    }
}

impl ClientConfig {
    /// Load a config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, QuoteError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            QuoteError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        toml::from_str(&text).map_err(|e| {
            QuoteError::Config(format!("failed to parse {}: {e}", path.display()))
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn retry_base_delay(&self) -> Duration {
        Duration::from_millis(self.retry_base_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults_for_the_rest() {
        let config: ClientConfig = toml::from_str("max_retries = 3\ntimeout_secs = 5").unwrap();
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.base_url, ClientConfig::default().base_url);
    }

    #[test]
    fn default_is_single_attempt() {
        assert_eq!(ClientConfig::default().max_retries, 0);
    }
}
