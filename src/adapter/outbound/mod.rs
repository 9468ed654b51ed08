//! Outbound adapters (driven side).

pub mod chain;
pub mod clock;
pub mod explorer;
pub mod filesystem;
