//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`chain`]: `FakeChain`, a scriptable [`ChainConnector`](crate::port::ChainConnector).
//! - [`explorer`]: `ScriptedExplorer`, a scripted [`ExplorerApi`](crate::port::ExplorerApi).
//! - [`clock`]: `InstantClock`, records sleeps without waiting.
//! - [`progress`]: `RecordingProgress`, collects progress events.
//! - [`artifact`]: `InMemoryArtifacts`, serves artifacts by path.
//! - [`fixtures`]: wallet stores, addresses and artifacts.

pub mod artifact;
pub mod chain;
pub mod clock;
pub mod explorer;
pub mod fixtures;
pub mod progress;
