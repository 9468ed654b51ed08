//! Logging configuration and initialization.

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

/// Levels in the order `-v` steps through them.
const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    /// Filter directive after applying `verbosity` extra `-v` steps.
    ///
    /// A level that is not a plain level name (e.g. `walletctl=debug`) is
    /// used as-is.
    #[must_use]
    pub fn effective_level(&self, verbosity: u8) -> String {
        let base = self.level.trim().to_ascii_lowercase();
        match LEVELS.iter().position(|level| *level == base) {
            Some(index) => {
                let raised = (index + usize::from(verbosity)).min(LEVELS.len() - 1);
                LEVELS[raised].to_string()
            }
            None => self.level.clone(),
        }
    }

    /// Initialize the tracing subscriber. Logs are written to stderr.
    ///
    /// `RUST_LOG` takes precedence over the configured level.
    pub fn init(&self, verbosity: u8) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.effective_level(verbosity)));

        // A subscriber may already be installed (tests); keep it.
        let _ = match self.format.as_str() {
            "json" => fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
            _ => fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
        };
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: "pretty".into(),
        }
    }
}
