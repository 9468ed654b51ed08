//! Network-agnostic domain types for transfers and contract verification.

pub mod error;
pub mod network;
pub mod transfer;
pub mod units;
pub mod verification;
pub mod wallet;

pub use network::{Network, NetworkProfile, NetworkProfiles};
pub use transfer::{TransferOutcome, TransferReceipt, TransferRequest};
pub use verification::{VerificationArtifact, VerificationOutcome, VerificationRequestBody};
pub use wallet::{ActiveWallet, WalletRecord, WalletStore};
