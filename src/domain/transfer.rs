//! Native currency transfer request, receipt and outcome.

use alloy_primitives::{Address, TxHash, U256};
use rust_decimal::Decimal;

use super::error::DomainError;
use super::network::Network;
use super::units;

/// A validated request to move `amount` ether to `recipient`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    network: Network,
    recipient: Address,
    amount: Decimal,
    value: U256,
}

impl TransferRequest {
    /// Build a request, checking that the amount is a positive whole number of wei.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if the amount is not positive or is finer
    /// than one wei.
    pub fn try_new(
        network: Network,
        recipient: Address,
        amount: Decimal,
    ) -> Result<Self, DomainError> {
        let value = units::ether_to_wei(amount)?;
        Ok(Self {
            network,
            recipient,
            amount: amount.normalize(),
            value,
        })
    }

    #[must_use]
    pub const fn network(&self) -> Network {
        self.network
    }

    #[must_use]
    pub const fn recipient(&self) -> Address {
        self.recipient
    }

    /// Amount in ether.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Amount in wei.
    #[must_use]
    pub const fn value(&self) -> U256 {
        self.value
    }
}

/// Receipt fields the transfer flow reports on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferReceipt {
    pub tx_hash: TxHash,
    pub success: bool,
    pub block_number: Option<u64>,
    pub gas_used: u64,
}

/// How a transfer ended when no error was raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferOutcome {
    /// Transaction mined with a success status.
    Confirmed {
        tx_hash: TxHash,
        block_number: Option<u64>,
        gas_used: u64,
        explorer_url: String,
    },
    /// Transaction mined but reverted.
    Reverted { tx_hash: TxHash },
    /// Balance did not cover the requested amount; nothing was submitted.
    InsufficientBalance { balance: Decimal, requested: Decimal },
}

impl TransferOutcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Confirmed { .. })
    }
}
