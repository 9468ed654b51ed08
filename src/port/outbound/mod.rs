//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe infrastructure dependencies: the chain RPC, the
//! explorer verification API, artifact files, time, and progress reporting.

pub mod artifact;
pub mod chain;
pub mod clock;
pub mod explorer;
pub mod progress;
