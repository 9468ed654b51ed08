//! Native currency transfer use case.
//!
//! Moves ether from the active wallet of a [`WalletStore`] to a recipient.
//! Every precondition is checked before the first RPC call, and the balance
//! gate runs before anything is signed.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::domain::{units, NetworkProfiles, TransferOutcome, TransferRequest, WalletStore};
use crate::error::{PreconditionError, Result};
use crate::port::{ChainConnector, ProgressEvent, ProgressSink};

/// Transfer service.
///
/// Holds the chain connector and network profiles. The wallet store is
/// passed into each call, so there is no ambient "current wallet" state.
pub struct TransferService {
    connector: Arc<dyn ChainConnector>,
    progress: Arc<dyn ProgressSink>,
    profiles: NetworkProfiles,
    confirmation_timeout: Option<Duration>,
}

impl TransferService {
    pub fn new(
        connector: Arc<dyn ChainConnector>,
        progress: Arc<dyn ProgressSink>,
        profiles: NetworkProfiles,
    ) -> Self {
        Self {
            connector,
            progress,
            profiles,
            confirmation_timeout: None,
        }
    }

    /// Stop waiting for the receipt after `timeout`.
    #[must_use]
    pub fn with_confirmation_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.confirmation_timeout = timeout;
        self
    }

    /// Transfer `request.amount()` ether from the store's active wallet.
    ///
    /// Returns [`TransferOutcome::InsufficientBalance`] without submitting
    /// anything when the balance is below the amount, and
    /// [`TransferOutcome::Reverted`] when the transaction is mined with a
    /// failure status.
    ///
    /// # Errors
    ///
    /// - precondition errors for an unusable wallet store, a missing signing
    ///   key, or an RPC endpoint on the wrong chain
    /// - network errors from the RPC endpoint
    /// - on-chain errors when the node rejects the transaction or the
    ///   confirmation timeout elapses
    pub async fn execute(
        &self,
        store: &WalletStore,
        request: &TransferRequest,
    ) -> Result<TransferOutcome> {
        let profile = self.profiles.get(request.network());
        let wallet = store.active()?;

        let signer = self
            .connector
            .signer(profile, wallet.record)?
            .ok_or_else(|| PreconditionError::SignerUnavailable {
                name: wallet.name.to_string(),
            })?;
        if signer.account() != wallet.address {
            return Err(PreconditionError::SignerMismatch {
                name: wallet.name.to_string(),
                expected: wallet.address.to_string(),
                actual: signer.account().to_string(),
            }
            .into());
        }
        let reader = self.connector.reader(profile)?;

        let balance = units::wei_to_ether(reader.balance(wallet.address).await?)?;
        self.progress.emit(ProgressEvent::TransferSummary {
            wallet: wallet.address,
            recipient: request.recipient(),
            amount: request.amount(),
            balance,
        });

        if balance < request.amount() {
            warn!(
                wallet = %wallet.address,
                balance = %balance,
                requested = %request.amount(),
                "Insufficient balance"
            );
            return Ok(TransferOutcome::InsufficientBalance {
                balance,
                requested: request.amount(),
            });
        }

        let chain_id = reader.chain_id().await?;
        if chain_id != profile.chain_id {
            return Err(PreconditionError::ChainMismatch {
                expected: profile.chain_id,
                actual: chain_id,
            }
            .into());
        }

        let tx_hash = signer
            .send_value(request.recipient(), request.value(), profile.chain_id)
            .await?;
        info!(
            tx_hash = %tx_hash,
            network = %profile.network,
            value = %request.value(),
            "Transfer submitted"
        );
        self.progress
            .emit(ProgressEvent::TransferSubmitted { tx_hash });
        self.progress.emit(ProgressEvent::AwaitingConfirmation);

        let receipt = reader
            .wait_for_receipt(tx_hash, self.confirmation_timeout)
            .await?;
        if !receipt.success {
            warn!(tx_hash = %tx_hash, "Transfer reverted");
            return Ok(TransferOutcome::Reverted { tx_hash });
        }

        info!(
            tx_hash = %tx_hash,
            block = ?receipt.block_number,
            gas_used = receipt.gas_used,
            "Transfer confirmed"
        );
        Ok(TransferOutcome::Confirmed {
            tx_hash,
            block_number: receipt.block_number,
            gas_used: receipt.gas_used,
            explorer_url: profile.tx_url(tx_hash),
        })
    }
}
