//! Builders for wallet stores, artifacts and amounts.

use std::collections::BTreeMap;
use std::str::FromStr;

use alloy_primitives::{Address, U256};
use serde_json::{json, Value};

use crate::domain::{WalletRecord, WalletStore};

/// Address used as the active wallet in fixtures.
pub const WALLET_ADDRESS: &str = "0x00000000000000000000000000000000000000aa";

/// Address used as the transfer recipient in fixtures.
pub const RECIPIENT_ADDRESS: &str = "0x00000000000000000000000000000000000000bb";

/// Address used as the deployed contract in fixtures.
pub const CONTRACT_ADDRESS: &str = "0xC0FFEE000000000000000000000000000000C0DE";

pub fn address(hex: &str) -> Address {
    Address::from_str(hex).expect("fixture address")
}

pub fn wallet_address() -> Address {
    address(WALLET_ADDRESS)
}

pub fn recipient_address() -> Address {
    address(RECIPIENT_ADDRESS)
}

pub fn contract_address() -> Address {
    address(CONTRACT_ADDRESS)
}

/// Whole ether expressed in wei.
pub fn ether(amount: u64) -> U256 {
    U256::from(amount) * U256::from(10u64).pow(U256::from(18u8))
}

/// Store whose active wallet `name` has `address`.
pub fn wallet_store(name: &str, address: &str) -> WalletStore {
    let mut wallets = BTreeMap::new();
    wallets.insert(
        name.to_string(),
        WalletRecord {
            address: Some(address.to_string()),
            ..WalletRecord::default()
        },
    );
    WalletStore {
        current_wallet: Some(name.to_string()),
        wallets: Some(wallets),
    }
}

/// Store with a single active wallet at [`WALLET_ADDRESS`].
pub fn default_wallet_store() -> WalletStore {
    wallet_store("a", WALLET_ADDRESS)
}

/// Minimal build-info artifact with a JSON Standard Input.
pub fn artifact() -> Value {
    json!({
        "_format": "hh-sol-build-info-1",
        "solcVersion": "0.8.24",
        "solcLongVersion": "0.8.24+commit.e11b9ed9",
        "input": {
            "language": "Solidity",
            "sources": {
                "contracts/Counter.sol": {
                    "content": "pragma solidity ^0.8.24; contract Counter { uint256 public n; }"
                }
            },
            "settings": {
                "optimizer": { "enabled": false, "runs": 200 },
                "outputSelection": { "*": { "*": ["abi", "evm.bytecode"] } }
            }
        }
    })
}
