//! Contract verification artifact and request body.
//!
//! The artifact is a Hardhat-style build-info document: the compiler's JSON
//! Standard Input under `input`, plus the full compiler version under
//! `solcLongVersion`. Its contents are forwarded to the explorer untouched.

use alloy_primitives::Address;
use serde::Serialize;
use serde_json::Value;

use crate::error::ValidationError;

const VERIFIER_MODULE: &str = "contractVerifier";
const VERIFY_ACTION: &str = "verify";

/// Fields extracted from a JSON Standard Input artifact.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationArtifact {
    pub compiler_version: String,
    pub language: Option<Value>,
    pub sources: Option<Value>,
    pub settings: Option<Value>,
}

impl VerificationArtifact {
    /// Validate a parsed artifact and pull out the fields sent for verification.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ArtifactMissingField`] when `solcLongVersion`
    /// or `input` is absent, and [`ValidationError::ArtifactInvalidField`] when
    /// either has the wrong JSON type.
    pub fn from_json(document: &Value) -> Result<Self, ValidationError> {
        let version = document
            .get("solcLongVersion")
            .ok_or(ValidationError::ArtifactMissingField {
                field: "solcLongVersion",
            })?;
        let input = document
            .get("input")
            .ok_or(ValidationError::ArtifactMissingField { field: "input" })?;

        let compiler_version = version
            .as_str()
            .ok_or_else(|| ValidationError::ArtifactInvalidField {
                field: "solcLongVersion",
                reason: "expected a string".to_string(),
            })?
            .to_string();
        let input = input
            .as_object()
            .ok_or_else(|| ValidationError::ArtifactInvalidField {
                field: "input",
                reason: "expected an object".to_string(),
            })?;

        Ok(Self {
            compiler_version,
            language: input.get("language").cloned(),
            sources: input.get("sources").cloned(),
            settings: input.get("settings").cloned(),
        })
    }
}

/// Body of `POST {base}/api` submitting a verification job.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRequestBody {
    pub module: &'static str,
    pub action: &'static str,
    pub get_delayed: bool,
    pub params: VerificationParams,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerificationParams {
    pub request: VerificationRequest,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRequest {
    pub address: String,
    pub name: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constructor_arguments: Option<Vec<String>>,
}

impl VerificationRequestBody {
    /// Build the request body. Constructor arguments are attached only when
    /// at least one is given.
    #[must_use]
    pub fn new(
        address: Address,
        name: &str,
        artifact: VerificationArtifact,
        constructor_args: &[String],
    ) -> Self {
        Self {
            module: VERIFIER_MODULE,
            action: VERIFY_ACTION,
            get_delayed: true,
            params: VerificationParams {
                request: VerificationRequest {
                    address: lowercase_address(address),
                    name: name.to_string(),
                    version: artifact.compiler_version,
                    language: artifact.language,
                    sources: artifact.sources,
                    settings: artifact.settings,
                    constructor_arguments: (!constructor_args.is_empty())
                        .then(|| constructor_args.to_vec()),
                },
            },
        }
    }
}

/// `0x`-prefixed lowercase hex, the form the explorer indexes addresses by.
#[must_use]
pub fn lowercase_address(address: Address) -> String {
    address.to_string().to_lowercase()
}

/// How a verification ended when no error was raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// The explorer already had verified source for the address.
    AlreadyVerified,
    /// The job reported a match.
    Verified { explorer_url: String },
    /// The job reported no match, or never answered within the retry budget.
    NotMatched,
}

impl VerificationOutcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        !matches!(self, Self::NotMatched)
    }
}
