//! In-memory chain for transfer tests.
//!
//! [`FakeChain`] implements [`ChainConnector`] and hands out readers and
//! signers that share one state, so a test can script the balance, chain id
//! and receipt, then assert on every RPC call and submitted transfer.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use alloy_primitives::{Address, TxHash, U256};
use async_trait::async_trait;

use crate::domain::network::SEPOLIA_CHAIN_ID;
use crate::domain::{NetworkProfile, TransferReceipt, WalletRecord};
use crate::error::{OnChainError, Result};
use crate::port::{ChainConnector, ChainReader, ChainSigner};

/// A transfer handed to [`ChainSigner::send_value`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentTransfer {
    pub from: Address,
    pub to: Address,
    pub value: U256,
    pub chain_id: u64,
}

#[derive(Debug)]
struct State {
    balance: U256,
    chain_id: u64,
    signer: Option<Address>,
    reject_with: Option<String>,
    receipt_success: bool,
    block_number: Option<u64>,
    gas_used: u64,
    rpc_calls: Vec<&'static str>,
    signer_requests: usize,
    sent: Vec<SentTransfer>,
    receipt_timeouts: Vec<Option<Duration>>,
}

/// Scriptable chain shared by every client it creates.
#[derive(Debug, Clone)]
pub struct FakeChain {
    state: Arc<Mutex<State>>,
}

impl Default for FakeChain {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeChain {
    /// Empty Sepolia chain with no signer and successful receipts.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                balance: U256::ZERO,
                chain_id: SEPOLIA_CHAIN_ID,
                signer: None,
                reject_with: None,
                receipt_success: true,
                block_number: Some(1),
                gas_used: 21_000,
                rpc_calls: Vec::new(),
                signer_requests: 0,
                sent: Vec::new(),
                receipt_timeouts: Vec::new(),
            })),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().expect("fake chain lock poisoned")
    }

    pub fn with_balance(self, wei: U256) -> Self {
        self.lock().balance = wei;
        self
    }

    pub fn with_chain_id(self, chain_id: u64) -> Self {
        self.lock().chain_id = chain_id;
        self
    }

    /// Resolve a signer for any wallet, bound to `account`.
    pub fn with_signer(self, account: Address) -> Self {
        self.lock().signer = Some(account);
        self
    }

    pub fn with_receipt(self, success: bool, block_number: Option<u64>, gas_used: u64) -> Self {
        {
            let mut state = self.lock();
            state.receipt_success = success;
            state.block_number = block_number;
            state.gas_used = gas_used;
        }
        self
    }

    /// Make the node reject submissions.
    pub fn with_rejection(self, reason: &str) -> Self {
        self.lock().reject_with = Some(reason.to_string());
        self
    }

    /// Names of the RPC calls made so far, in order.
    pub fn rpc_calls(&self) -> Vec<&'static str> {
        self.lock().rpc_calls.clone()
    }

    pub fn signer_requests(&self) -> usize {
        self.lock().signer_requests
    }

    pub fn sent(&self) -> Vec<SentTransfer> {
        self.lock().sent.clone()
    }

    pub fn receipt_timeouts(&self) -> Vec<Option<Duration>> {
        self.lock().receipt_timeouts.clone()
    }
}

impl ChainConnector for FakeChain {
    fn reader(&self, _profile: &NetworkProfile) -> Result<Box<dyn ChainReader>> {
        Ok(Box::new(self.clone()))
    }

    fn signer(
        &self,
        _profile: &NetworkProfile,
        _wallet: &WalletRecord,
    ) -> Result<Option<Box<dyn ChainSigner>>> {
        let mut state = self.lock();
        state.signer_requests += 1;
        Ok(state.signer.map(|account| {
            Box::new(FakeSigner {
                chain: self.clone(),
                account,
            }) as Box<dyn ChainSigner>
        }))
    }
}

#[async_trait]
impl ChainReader for FakeChain {
    async fn chain_id(&self) -> Result<u64> {
        let mut state = self.lock();
        state.rpc_calls.push("eth_chainId");
        Ok(state.chain_id)
    }

    async fn balance(&self, _address: Address) -> Result<U256> {
        let mut state = self.lock();
        state.rpc_calls.push("eth_getBalance");
        Ok(state.balance)
    }

    async fn wait_for_receipt(
        &self,
        tx_hash: TxHash,
        timeout: Option<Duration>,
    ) -> Result<TransferReceipt> {
        let mut state = self.lock();
        state.rpc_calls.push("eth_getTransactionReceipt");
        state.receipt_timeouts.push(timeout);
        Ok(TransferReceipt {
            tx_hash,
            success: state.receipt_success,
            block_number: state.block_number,
            gas_used: state.gas_used,
        })
    }
}

struct FakeSigner {
    chain: FakeChain,
    account: Address,
}

#[async_trait]
impl ChainSigner for FakeSigner {
    fn account(&self) -> Address {
        self.account
    }

    async fn send_value(&self, to: Address, value: U256, chain_id: u64) -> Result<TxHash> {
        let mut state = self.chain.lock();
        state.rpc_calls.push("eth_sendRawTransaction");
        if let Some(reason) = &state.reject_with {
            return Err(OnChainError::Rejected(reason.clone()).into());
        }
        state.sent.push(SentTransfer {
            from: self.account,
            to,
            value,
            chain_id,
        });
        let nonce = u8::try_from(state.sent.len()).unwrap_or(u8::MAX);
        Ok(TxHash::with_last_byte(nonce))
    }
}
