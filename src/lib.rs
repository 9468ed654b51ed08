//! walletctl - native currency transfers and block-explorer contract
//! verification for EVM wallets.
//!
//! # Architecture
//!
//! Hexagonal layout:
//!
//! - [`domain`] - network profiles, wei/ether units, the wallet store model,
//!   transfer requests and verification payloads
//! - [`port`] - traits the use cases depend on (chain RPC, explorer API,
//!   artifact source, clock, progress)
//! - [`application`] - the `transfer` and `verify` use cases and the bounded
//!   verification poll
//! - [`adapter`] - alloy and reqwest clients, file loaders, and the clap CLI
//! - [`infrastructure`] - TOML configuration and logging setup
//!
//! # Features
//!
//! - `testkit` - in-memory fakes for every outbound port, for integration tests
//!
//! # Example
//!
//! ```no_run
//! use std::str::FromStr;
//! use alloy_primitives::Address;
//! use rust_decimal_macros::dec;
//! use walletctl::domain::{Network, TransferRequest};
//!
//! let recipient = Address::from_str("0x00000000000000000000000000000000000000bb").unwrap();
//! let request = TransferRequest::try_new(Network::Testnet, recipient, dec!(0.25)).unwrap();
//! assert_eq!(request.value().to_string(), "250000000000000000");
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
