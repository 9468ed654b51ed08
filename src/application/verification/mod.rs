//! Contract source verification against a block explorer.

pub mod poll;
mod service;

pub use poll::{poll_verification_result, PollSettings};
pub use service::{VerifyRequest, VerifyService};
