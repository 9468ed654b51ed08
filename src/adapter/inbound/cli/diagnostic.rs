//! Miette-based diagnostics for configuration file errors.
//!
//! Renders the config file with a labeled span pointing at the offending
//! TOML, plus an optional help line.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::error::{ConfigError, Error};

/// Configuration error with source location context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(walletctl::config))]
pub struct ConfigDiagnostic {
    pub message: String,

    #[source_code]
    pub src: miette::NamedSource<String>,

    #[label("here")]
    pub span: SourceSpan,

    #[help]
    pub help: Option<String>,
}

impl ConfigDiagnostic {
    /// Build a diagnostic for a TOML parse failure, or `None` for any other
    /// error or a parse error without a location.
    #[must_use]
    pub fn from_error(error: &Error) -> Option<Self> {
        let Error::Config(ConfigError::Parse {
            path,
            content,
            source,
        }) = error
        else {
            return None;
        };
        let span = source.span()?;
        let len = span.end.saturating_sub(span.start).max(1);

        Some(Self {
            message: format!("invalid configuration: {}", source.message()),
            src: miette::NamedSource::new(path.display().to_string(), content.clone()),
            span: (span.start, len).into(),
            help: Some("see `[logging]`, `[networks.*]`, `[verification]` and `[transfer]`".into()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::Config;

    #[test]
    fn parse_errors_become_diagnostics() {
        let err = Config::parse_toml("[verification]\nmax_retries = \"ten\"\n").unwrap_err();
        let diagnostic = ConfigDiagnostic::from_error(&err).unwrap();
        assert!(diagnostic.message.starts_with("invalid configuration"));
        assert!(diagnostic.span.offset() > 0);
    }

    #[test]
    fn other_errors_are_ignored() {
        let err = Error::Config(ConfigError::MissingField { field: "x" });
        assert!(ConfigDiagnostic::from_error(&err).is_none());
    }
}
