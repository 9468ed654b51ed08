//! Progress port for command status updates.
//!
//! Use cases report intermediate steps through a [`ProgressSink`] instead of
//! printing, so the terminal adapter owns all presentation and tests can
//! record what was reported.

use std::path::PathBuf;

use alloy_primitives::{Address, TxHash};
use rust_decimal::Decimal;

use crate::domain::Network;

/// Intermediate steps of the transfer and verify flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// Balance fetched; shown before the balance gate.
    TransferSummary {
        wallet: Address,
        recipient: Address,
        amount: Decimal,
        balance: Decimal,
    },
    /// Transaction accepted by the node, not yet mined.
    TransferSubmitted { tx_hash: TxHash },
    /// Waiting for the receipt.
    AwaitingConfirmation,
    /// Verification flow started.
    VerificationStarted { network: Network },
    /// Reading the JSON Standard Input artifact.
    ReadingArtifact { path: PathBuf },
    /// Artifact parsed; the request is about to be built.
    VerifyingContract { name: String, address: Address },
    /// Constructor arguments attached to the request.
    ConstructorArguments { args: Vec<String> },
    /// Verification job accepted.
    VerificationSubmitted { job_id: String },
    /// A status poll failed and will be retried.
    PollAttemptFailed { attempt: u32, reason: String },
    /// The poll budget ran out without a decision.
    PollRetriesExhausted { attempts: u32 },
}

/// Receiver of progress events.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: ProgressEvent);
}
