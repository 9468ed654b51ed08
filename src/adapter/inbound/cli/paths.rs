//! Path utilities for walletctl.
//!
//! All data lives under `~/.walletctl/`:
//! - `~/.walletctl/config.toml` - configuration
//! - `~/.walletctl/wallets.json` - wallet store (read-only here)

use std::path::PathBuf;

/// Returns the walletctl home directory (`~/.walletctl/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".walletctl")
}

/// Returns the default config file path (`~/.walletctl/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

/// Returns the default wallet store path (`~/.walletctl/wallets.json`).
pub fn default_wallet_store() -> PathBuf {
    home_dir().join("wallets.json")
}
