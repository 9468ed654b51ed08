//! Chain access ports for native currency transfers.
//!
//! Reading (balance, chain id, receipts) and signing (value transfers) are
//! split so that a command can be refused before any signing-capable client
//! exists.

use std::time::Duration;

use alloy_primitives::{Address, TxHash, U256};
use async_trait::async_trait;

use crate::domain::{NetworkProfile, TransferReceipt, WalletRecord};
use crate::error::Result;

/// Read-only view of a chain.
///
/// # Errors
///
/// Methods return [`Result`] for RPC transport and response failures.
#[async_trait]
pub trait ChainReader: Send + Sync {
    /// Chain id reported by the RPC endpoint.
    async fn chain_id(&self) -> Result<u64>;

    /// Balance of `address` in wei.
    async fn balance(&self, address: Address) -> Result<U256>;

    /// Block until the transaction is mined and return its receipt.
    ///
    /// # Arguments
    ///
    /// * `tx_hash` - Hash returned at submission.
    /// * `timeout` - Give up after this long; `None` waits indefinitely.
    async fn wait_for_receipt(
        &self,
        tx_hash: TxHash,
        timeout: Option<Duration>,
    ) -> Result<TransferReceipt>;
}

/// Signing-capable client bound to one account.
#[async_trait]
pub trait ChainSigner: Send + Sync {
    /// Address of the signing account.
    fn account(&self) -> Address;

    /// Sign and submit a plain value transfer, returning its hash without
    /// waiting for confirmation.
    ///
    /// # Errors
    ///
    /// Returns an error if the node rejects the transaction.
    async fn send_value(&self, to: Address, value: U256, chain_id: u64) -> Result<TxHash>;
}

/// Factory for chain clients scoped to a network profile.
///
/// Construction is local: neither method may perform network I/O.
pub trait ChainConnector: Send + Sync {
    /// Build a read-only client.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile's RPC URL is invalid.
    fn reader(&self, profile: &NetworkProfile) -> Result<Box<dyn ChainReader>>;

    /// Build a signing client for `wallet`, or `None` when no signing key can
    /// be resolved for it.
    ///
    /// # Errors
    ///
    /// Returns an error if key material exists but cannot be loaded.
    fn signer(
        &self,
        profile: &NetworkProfile,
        wallet: &WalletRecord,
    ) -> Result<Option<Box<dyn ChainSigner>>>;
}
