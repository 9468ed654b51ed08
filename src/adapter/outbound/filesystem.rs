//! Local file readers: the wallet store and compiled-contract artifacts.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::domain::WalletStore;
use crate::error::{PreconditionError, Result, ValidationError};
use crate::port::ArtifactSource;

/// Read and parse the wallet store at `path`.
///
/// The store is only ever read; wallets are created by other tooling.
///
/// # Errors
///
/// [`PreconditionError::WalletStoreMissing`] when the file does not exist,
/// [`PreconditionError::WalletStoreUnreadable`] when it cannot be read or
/// is not a valid store document.
pub fn load_wallet_store(path: &Path) -> Result<WalletStore> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => PreconditionError::WalletStoreMissing {
            path: path.to_path_buf(),
        },
        _ => PreconditionError::WalletStoreUnreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        },
    })?;

    let store = serde_json::from_str(&content).map_err(|e| {
        PreconditionError::WalletStoreUnreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
    })?;
    debug!(path = %path.display(), "Loaded wallet store");
    Ok(store)
}

/// Reads artifacts from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsArtifactSource;

impl ArtifactSource for FsArtifactSource {
    fn load(&self, path: &Path) -> Result<Value> {
        let unreadable = |reason: String| ValidationError::ArtifactUnreadable {
            path: PathBuf::from(path),
            reason,
        };
        let content = fs::read_to_string(path).map_err(|e| unreadable(e.to_string()))?;
        let document = serde_json::from_str(&content).map_err(|e| unreadable(e.to_string()))?;
        Ok(document)
    }
}
