//! Application services (use cases).
//!
//! These services orchestrate domain logic and coordinate adapters
//! to implement the application's use cases.

pub mod transfer;
pub mod verification;

pub use transfer::TransferService;
pub use verification::{PollSettings, VerifyRequest, VerifyService};
