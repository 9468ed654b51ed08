use std::path::PathBuf;

use thiserror::Error;

use crate::domain::error::DomainError;

/// Conditions that must hold before a command touches the network.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreconditionError {
    #[error("no saved wallet found at {}; create a wallet first", path.display())]
    WalletStoreMissing { path: PathBuf },

    #[error("failed to read wallet store {}: {reason}", path.display())]
    WalletStoreUnreadable { path: PathBuf, reason: String },

    #[error("no valid wallet found; create or import a wallet first")]
    NoActiveWallet,

    #[error("active wallet '{name}' is not present in the wallet store")]
    UnknownWallet { name: String },

    #[error("no valid address found in saved wallet '{name}'")]
    MissingAddress { name: String },

    #[error("invalid address '{address}' in saved wallet '{name}'")]
    InvalidAddress { name: String, address: String },

    #[error("failed to retrieve the signing account for wallet '{name}'; make sure the wallet is set up correctly")]
    SignerUnavailable { name: String },

    #[error("signing key for wallet '{name}' belongs to {actual}, expected {expected}")]
    SignerMismatch {
        name: String,
        expected: String,
        actual: String,
    },

    #[error("RPC endpoint reports chain id {actual}, expected {expected}")]
    ChainMismatch { expected: u64, actual: u64 },
}

/// User-supplied input that cannot be acted on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid amount {amount}: {reason}")]
    InvalidAmount { amount: String, reason: String },

    #[error("failed to read JSON Standard Input file {}: {reason}", path.display())]
    ArtifactUnreadable { path: PathBuf, reason: String },

    #[error("JSON Standard Input is missing the `{field}` field")]
    ArtifactMissingField { field: &'static str },

    #[error("JSON Standard Input field `{field}` is invalid: {reason}")]
    ArtifactInvalidField { field: &'static str, reason: String },
}

/// Failures talking to the RPC endpoint or the explorer API.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: String, status: u16 },

    #[error("request to {endpoint} failed: {source}")]
    Request {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected response from {endpoint}: {reason}")]
    MalformedResponse { endpoint: String, reason: String },

    #[error("RPC call {method} failed: {reason}")]
    Rpc { method: &'static str, reason: String },
}

impl NetworkError {
    /// Whether a retry of the same request could reasonably succeed.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Status { .. } | Self::Request { .. })
    }
}

/// Failures reported by the chain itself after a transaction was built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OnChainError {
    #[error("transaction rejected: {0}")]
    Rejected(String),

    #[error("transaction {tx_hash} not confirmed after {seconds}s")]
    ConfirmationTimeout { tx_hash: String, seconds: u64 },
}

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config {}: {}", path.display(), source.message())]
    Parse {
        path: PathBuf,
        content: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Coarse classification used by the CLI to pick a message and exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Precondition,
    Validation,
    Network,
    OnChain,
    Config,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Precondition(#[from] PreconditionError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    OnChain(#[from] OnChainError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl Error {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Precondition(_) => ErrorKind::Precondition,
            Self::Validation(_) | Self::Domain(_) => ErrorKind::Validation,
            Self::Network(_) => ErrorKind::Network,
            Self::OnChain(_) => ErrorKind::OnChain,
            Self::Config(_) => ErrorKind::Config,
        }
    }

    /// Transient failures are absorbed by the verification poll loop.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Network(e) if e.is_transient())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
