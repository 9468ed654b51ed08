//! Signing key resolution for wallet records.
//!
//! Key material is looked up in this order:
//! 1. `WALLETCTL_PRIVATE_KEY` environment variable
//! 2. the record's `privateKey` field
//! 3. the record's `keystorePath`, decrypted with `WALLETCTL_KEYSTORE_PASSWORD`
//!    (or the contents of `WALLETCTL_KEYSTORE_PASSWORD_FILE`)
//!
//! A record with none of these has no signer.

use std::fs;
use std::str::FromStr;

use alloy_signer_local::PrivateKeySigner;

use crate::domain::WalletRecord;
use crate::error::{ConfigError, Result};

pub const PRIVATE_KEY_ENV: &str = "WALLETCTL_PRIVATE_KEY";
pub const KEYSTORE_PASSWORD_ENV: &str = "WALLETCTL_KEYSTORE_PASSWORD";
pub const KEYSTORE_PASSWORD_FILE_ENV: &str = "WALLETCTL_KEYSTORE_PASSWORD_FILE";

/// Key material taken from the environment at startup.
#[derive(Clone, Default)]
pub struct KeyMaterial {
    private_key: Option<String>,
    keystore_password: Option<String>,
}

impl std::fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .field(
                "keystore_password",
                &self.keystore_password.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

impl KeyMaterial {
    #[must_use]
    pub fn new(private_key: Option<String>, keystore_password: Option<String>) -> Self {
        Self {
            private_key: private_key.filter(|key| !key.trim().is_empty()),
            keystore_password,
        }
    }

    /// Read key material from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the password file is set but unreadable or empty.
    pub fn from_env() -> Result<Self> {
        let private_key = std::env::var(PRIVATE_KEY_ENV).ok();
        let keystore_password = read_keystore_password()?;
        Ok(Self::new(private_key, keystore_password))
    }

    /// Resolve the signer for `record`, or `None` if it has no key material.
    ///
    /// # Errors
    ///
    /// Returns an error if key material exists but is malformed, or a
    /// keystore cannot be decrypted.
    pub fn resolve(&self, record: &WalletRecord) -> Result<Option<PrivateKeySigner>> {
        if let Some(key) = &self.private_key {
            return parse_private_key(key, PRIVATE_KEY_ENV).map(Some);
        }

        if let Some(key) = record.private_key.as_deref().filter(|k| !k.trim().is_empty()) {
            return parse_private_key(key, "privateKey").map(Some);
        }

        if let Some(path) = &record.keystore_path {
            let password = self
                .keystore_password
                .as_deref()
                .ok_or(ConfigError::MissingField {
                    field: KEYSTORE_PASSWORD_ENV,
                })?;
            let signer = PrivateKeySigner::decrypt_keystore(path, password).map_err(|e| {
                ConfigError::InvalidValue {
                    field: "keystorePath",
                    reason: e.to_string(),
                }
            })?;
            return Ok(Some(signer));
        }

        Ok(None)
    }
}

fn parse_private_key(key: &str, field: &'static str) -> Result<PrivateKeySigner> {
    PrivateKeySigner::from_str(key.trim()).map_err(|e| {
        ConfigError::InvalidValue {
            field,
            reason: e.to_string(),
        }
        .into()
    })
}

fn read_keystore_password() -> Result<Option<String>> {
    if let Ok(password) = std::env::var(KEYSTORE_PASSWORD_ENV) {
        return Ok(Some(password));
    }
    if let Ok(path) = std::env::var(KEYSTORE_PASSWORD_FILE_ENV) {
        let contents = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let password = contents.trim().to_string();
        if password.is_empty() {
            return Err(ConfigError::MissingField {
                field: KEYSTORE_PASSWORD_FILE_ENV,
            }
            .into());
        }
        return Ok(Some(password));
    }
    Ok(None)
}
