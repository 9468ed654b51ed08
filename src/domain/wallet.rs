//! Wallet store model.
//!
//! The store is a JSON document holding named wallet records and the name of
//! the active one:
//!
//! ```json
//! { "currentWallet": "main", "wallets": { "main": { "address": "0x..." } } }
//! ```
//!
//! Both top-level fields are optional at parse time so that a malformed store
//! is reported as a precondition failure instead of a parse error.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::str::FromStr;

use alloy_primitives::Address;
use serde::Deserialize;

use crate::error::PreconditionError;

/// Persisted wallet store.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletStore {
    #[serde(default)]
    pub current_wallet: Option<String>,
    #[serde(default)]
    pub wallets: Option<BTreeMap<String, WalletRecord>>,
}

/// A single named wallet.
///
/// Unknown fields are ignored; only the address and the optional key
/// material locations are read.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletRecord {
    #[serde(default)]
    pub address: Option<String>,
    /// Hex-encoded private key stored alongside the record.
    #[serde(default)]
    pub private_key: Option<String>,
    /// Encrypted JSON keystore holding the key for this record.
    #[serde(default)]
    pub keystore_path: Option<PathBuf>,
}

/// The wallet selected by `currentWallet`, with its address parsed.
#[derive(Debug, Clone, Copy)]
pub struct ActiveWallet<'a> {
    pub name: &'a str,
    pub record: &'a WalletRecord,
    pub address: Address,
}

impl WalletStore {
    /// Resolve the active wallet.
    ///
    /// # Errors
    ///
    /// - [`PreconditionError::NoActiveWallet`] when `currentWallet` or
    ///   `wallets` is absent or empty
    /// - [`PreconditionError::UnknownWallet`] when `currentWallet` names no record
    /// - [`PreconditionError::MissingAddress`] when the record has no address
    /// - [`PreconditionError::InvalidAddress`] when the address is not 20-byte hex
    pub fn active(&self) -> Result<ActiveWallet<'_>, PreconditionError> {
        let name = self
            .current_wallet
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or(PreconditionError::NoActiveWallet)?;
        let wallets = self
            .wallets
            .as_ref()
            .ok_or(PreconditionError::NoActiveWallet)?;

        let record = wallets
            .get(name)
            .ok_or_else(|| PreconditionError::UnknownWallet {
                name: name.to_string(),
            })?;

        let raw = record
            .address
            .as_deref()
            .map(str::trim)
            .filter(|address| !address.is_empty())
            .ok_or_else(|| PreconditionError::MissingAddress {
                name: name.to_string(),
            })?;

        let address = Address::from_str(raw).map_err(|_| PreconditionError::InvalidAddress {
            name: name.to_string(),
            address: raw.to_string(),
        })?;

        Ok(ActiveWallet {
            name,
            record,
            address,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "0x00000000000000000000000000000000000000aB";

    fn parse(json: &str) -> WalletStore {
        serde_json::from_str(json).expect("parse wallet store")
    }

    #[test]
    fn resolves_current_wallet() {
        let store = parse(&format!(
            r#"{{"currentWallet":"a","wallets":{{"a":{{"address":"{ADDRESS}","extra":1}}}}}}"#
        ));
        let active = store.active().unwrap();
        assert_eq!(active.name, "a");
        assert_eq!(active.address, Address::from_str(ADDRESS).unwrap());
    }

    #[test]
    fn missing_current_wallet_is_rejected() {
        let store = parse(r#"{"wallets":{}}"#);
        assert_eq!(store.active().unwrap_err(), PreconditionError::NoActiveWallet);
    }

    #[test]
    fn missing_wallets_map_is_rejected() {
        let store = parse(r#"{"currentWallet":"a"}"#);
        assert_eq!(store.active().unwrap_err(), PreconditionError::NoActiveWallet);
    }

    #[test]
    fn empty_current_wallet_is_rejected() {
        let store = parse(r#"{"currentWallet":"","wallets":{"":{"address":"0x1"}}}"#);
        assert_eq!(store.active().unwrap_err(), PreconditionError::NoActiveWallet);
    }

    #[test]
    fn dangling_current_wallet_is_rejected() {
        let store = parse(r#"{"currentWallet":"b","wallets":{"a":{}}}"#);
        assert_eq!(
            store.active().unwrap_err(),
            PreconditionError::UnknownWallet { name: "b".into() }
        );
    }

    #[test]
    fn blank_address_is_rejected() {
        let store = parse(r#"{"currentWallet":"a","wallets":{"a":{"address":"  "}}}"#);
        assert_eq!(
            store.active().unwrap_err(),
            PreconditionError::MissingAddress { name: "a".into() }
        );
    }

    #[test]
    fn malformed_address_is_rejected() {
        let store = parse(r#"{"currentWallet":"a","wallets":{"a":{"address":"0xabc"}}}"#);
        assert!(matches!(
            store.active().unwrap_err(),
            PreconditionError::InvalidAddress { .. }
        ));
    }
}
