//! Alloy-backed chain clients.
//!
//! Read calls go through a plain HTTP provider. Transfers go through a
//! provider with an [`EthereumWallet`] attached, which fills nonce and gas
//! and signs locally before submitting.

use std::time::Duration;

use alloy_primitives::{Address, TxHash, U256};
use alloy_provider::network::{EthereumWallet, ReceiptResponse, TransactionBuilder};
use alloy_provider::{DynProvider, Provider, ProviderBuilder};
use alloy_rpc_types_eth::{TransactionReceipt, TransactionRequest};
use async_trait::async_trait;
use tracing::debug;

use super::keys::KeyMaterial;
use crate::domain::{NetworkProfile, TransferReceipt, WalletRecord};
use crate::error::{ConfigError, NetworkError, OnChainError, Result};
use crate::port::{ChainConnector, ChainReader, ChainSigner};

/// Default interval between receipt lookups.
const RECEIPT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Builds alloy providers for a network profile.
#[derive(Debug, Clone)]
pub struct AlloyConnector {
    keys: KeyMaterial,
    receipt_poll_interval: Duration,
}

impl AlloyConnector {
    #[must_use]
    pub fn new(keys: KeyMaterial) -> Self {
        Self {
            keys,
            receipt_poll_interval: RECEIPT_POLL_INTERVAL,
        }
    }

    #[must_use]
    pub fn with_receipt_poll_interval(mut self, interval: Duration) -> Self {
        self.receipt_poll_interval = interval;
        self
    }
}

fn rpc_url(profile: &NetworkProfile) -> Result<url::Url> {
    profile.rpc_url.parse().map_err(|e: url::ParseError| {
        ConfigError::InvalidValue {
            field: "rpc_url",
            reason: e.to_string(),
        }
        .into()
    })
}

impl ChainConnector for AlloyConnector {
    fn reader(&self, profile: &NetworkProfile) -> Result<Box<dyn ChainReader>> {
        let provider = ProviderBuilder::new()
            .connect_http(rpc_url(profile)?)
            .erased();
        Ok(Box::new(AlloyReader {
            provider,
            poll_interval: self.receipt_poll_interval,
        }))
    }

    fn signer(
        &self,
        profile: &NetworkProfile,
        wallet: &WalletRecord,
    ) -> Result<Option<Box<dyn ChainSigner>>> {
        let Some(signer) = self.keys.resolve(wallet)? else {
            return Ok(None);
        };
        let account = signer.address();

        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect_http(rpc_url(profile)?)
            .erased();
        Ok(Some(Box::new(AlloySigner { provider, account })))
    }
}

fn rpc_error(method: &'static str, error: impl std::fmt::Display) -> NetworkError {
    NetworkError::Rpc {
        method,
        reason: error.to_string(),
    }
}

struct AlloyReader {
    provider: DynProvider,
    poll_interval: Duration,
}

impl AlloyReader {
    async fn poll_receipt(&self, tx_hash: TxHash) -> Result<TransactionReceipt> {
        loop {
            let receipt = self
                .provider
                .get_transaction_receipt(tx_hash)
                .await
                .map_err(|e| rpc_error("eth_getTransactionReceipt", e))?;
            if let Some(receipt) = receipt {
                return Ok(receipt);
            }
            debug!(tx_hash = %tx_hash, "Receipt not available yet");
            tokio::time::sleep(self.poll_interval).await;
        }
    }
}

#[async_trait]
impl ChainReader for AlloyReader {
    async fn chain_id(&self) -> Result<u64> {
        Ok(self
            .provider
            .get_chain_id()
            .await
            .map_err(|e| rpc_error("eth_chainId", e))?)
    }

    async fn balance(&self, address: Address) -> Result<U256> {
        Ok(self
            .provider
            .get_balance(address)
            .await
            .map_err(|e| rpc_error("eth_getBalance", e))?)
    }

    async fn wait_for_receipt(
        &self,
        tx_hash: TxHash,
        timeout: Option<Duration>,
    ) -> Result<TransferReceipt> {
        let receipt = match timeout {
            Some(limit) => tokio::time::timeout(limit, self.poll_receipt(tx_hash))
                .await
                .map_err(|_| OnChainError::ConfirmationTimeout {
                    tx_hash: tx_hash.to_string(),
                    seconds: limit.as_secs(),
                })??,
            None => self.poll_receipt(tx_hash).await?,
        };

        Ok(TransferReceipt {
            tx_hash,
            success: ReceiptResponse::status(&receipt),
            block_number: ReceiptResponse::block_number(&receipt),
            gas_used: ReceiptResponse::gas_used(&receipt),
        })
    }
}

struct AlloySigner {
    provider: DynProvider,
    account: Address,
}

#[async_trait]
impl ChainSigner for AlloySigner {
    fn account(&self) -> Address {
        self.account
    }

    async fn send_value(&self, to: Address, value: U256, chain_id: u64) -> Result<TxHash> {
        let tx = TransactionRequest::default()
            .with_from(self.account)
            .with_to(to)
            .with_value(value)
            .with_chain_id(chain_id);

        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| OnChainError::Rejected(e.to_string()))?;
        Ok(*pending.tx_hash())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Network;

    #[test]
    fn invalid_rpc_url_is_a_config_error() {
        let mut profile = NetworkProfile::builtin(Network::Testnet);
        profile.rpc_url = "not a url".into();
        let connector = AlloyConnector::new(KeyMaterial::default());
        assert!(connector.reader(&profile).is_err());
    }

    #[test]
    fn wallet_without_keys_has_no_signer() {
        let profile = NetworkProfile::builtin(Network::Testnet);
        let connector = AlloyConnector::new(KeyMaterial::default());
        let signer = connector
            .signer(&profile, &WalletRecord::default())
            .unwrap();
        assert!(signer.is_none());
    }

    #[test]
    fn signer_account_comes_from_key() {
        let profile = NetworkProfile::builtin(Network::Mainnet);
        let keys = KeyMaterial::new(
            Some("0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80".into()),
            None,
        );
        let signer = AlloyConnector::new(keys)
            .signer(&profile, &WalletRecord::default())
            .unwrap()
            .unwrap();
        assert_eq!(
            signer.account().to_string(),
            "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
        );
    }
}
