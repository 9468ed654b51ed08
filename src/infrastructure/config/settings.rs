//! Application configuration loading and validation.
//!
//! Configuration is read from `~/.walletctl/config.toml` (or `--config`).
//! Every section is optional and a missing file yields the defaults.
//! Signing secrets never live in the file; they come from the environment
//! (see [`KeyMaterial`](crate::adapter::outbound::chain::KeyMaterial)).
//!
//! # Example
//!
//! ```no_run
//! use walletctl::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging(0);
//!     Ok(())
//! }
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use super::logging::LoggingConfig;
use super::network::NetworksConfig;
use crate::application::PollSettings;
use crate::domain::NetworkProfiles;
use crate::error::{ConfigError, Result};

/// `[verification]`: poll loop bounds.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VerificationConfig {
    /// Maximum status requests per job.
    pub max_retries: u32,
    /// Delay after each status request.
    pub retry_delay_ms: u64,
    /// Per-request HTTP timeout for the explorer API.
    pub http_timeout_secs: u64,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            max_retries: 10,
            retry_delay_ms: 4000,
            http_timeout_secs: 30,
        }
    }
}

/// `[transfer]`: receipt wait.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TransferConfig {
    /// Give up waiting for a receipt after this many seconds. Unset waits
    /// indefinitely.
    pub confirmation_timeout_secs: Option<u64>,
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging and tracing configuration.
    pub logging: LoggingConfig,

    /// Endpoint overrides for the built-in networks.
    pub networks: NetworksConfig,

    pub verification: VerificationConfig,

    pub transfer: TransferConfig,

    /// Wallet store location. `--wallet-store` takes precedence.
    pub wallet_store: Option<PathBuf>,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or a value fails validation.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        Self::parse_at(content, Path::new("config.toml"))
    }

    /// Load configuration from a TOML file. A missing file yields defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_at(&content, path)
    }

    fn parse_at(content: &str, path: &Path) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            content: content.to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        self.networks.validate()?;
        if self.transfer.confirmation_timeout_secs == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "confirmation_timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.verification.http_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "http_timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize tracing from `[logging]`, raised by `verbosity` steps.
    pub fn init_logging(&self, verbosity: u8) {
        self.logging.init(verbosity);
    }

    #[must_use]
    pub fn profiles(&self) -> NetworkProfiles {
        self.networks.profiles()
    }

    #[must_use]
    pub fn poll_settings(&self) -> PollSettings {
        PollSettings {
            max_retries: self.verification.max_retries,
            retry_delay: Duration::from_millis(self.verification.retry_delay_ms),
        }
    }

    #[must_use]
    pub fn explorer_timeout(&self) -> Duration {
        Duration::from_secs(self.verification.http_timeout_secs)
    }

    #[must_use]
    pub fn confirmation_timeout(&self) -> Option<Duration> {
        self.transfer
            .confirmation_timeout_secs
            .map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Network;
    use crate::error::Error;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::parse_toml("").unwrap();
        assert_eq!(config.logging.level, "warn");
        let poll = config.poll_settings();
        assert_eq!(poll.max_retries, 10);
        assert_eq!(poll.retry_delay, Duration::from_millis(4000));
        assert_eq!(config.confirmation_timeout(), None);
        assert!(config.wallet_store.is_none());
    }

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path().join("config.toml")).unwrap();
        assert_eq!(config.verification.max_retries, 10);
    }

    #[test]
    fn sections_are_read() {
        let config = Config::parse_toml(
            r#"
            wallet_store = "/tmp/wallets.json"

            [logging]
            level = "debug"
            format = "json"

            [networks.testnet]
            api_base_url = "http://127.0.0.1:8080"

            [verification]
            max_retries = 3
            retry_delay_ms = 0

            [transfer]
            confirmation_timeout_secs = 120
            "#,
        )
        .unwrap();

        assert_eq!(config.logging.format, "json");
        assert_eq!(
            config.wallet_store.as_deref(),
            Some(Path::new("/tmp/wallets.json"))
        );
        assert_eq!(
            config.profiles().get(Network::Testnet).api_base_url,
            "http://127.0.0.1:8080"
        );
        assert_eq!(config.poll_settings().max_retries, 3);
        assert_eq!(config.poll_settings().retry_delay, Duration::ZERO);
        assert_eq!(
            config.confirmation_timeout(),
            Some(Duration::from_secs(120))
        );
    }

    #[test]
    fn malformed_toml_keeps_source_for_diagnostics() {
        let err = Config::parse_toml("[verification\nmax_retries = 3").unwrap_err();
        match err {
            Error::Config(ConfigError::Parse { content, .. }) => {
                assert!(content.contains("max_retries"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn zero_confirmation_timeout_is_rejected() {
        let err = Config::parse_toml("[transfer]\nconfirmation_timeout_secs = 0").unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue {
                field: "confirmation_timeout_secs",
                ..
            })
        ));
    }
}
