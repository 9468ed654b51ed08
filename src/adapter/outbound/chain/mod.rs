//! EVM chain adapter (alloy).

mod client;
pub mod keys;

pub use client::AlloyConnector;
pub use keys::KeyMaterial;
