//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!                    │  transfer · verify      │
//!                    └────────────┬────────────┘
//!          ┌──────────────┬───────┴──────┬──────────────┐
//!          ▼              ▼              ▼              ▼
//!     ┌─────────┐   ┌──────────┐   ┌──────────┐   ┌──────────┐
//!     │  Chain  │   │ Explorer │   │ Artifact │   │ Progress │
//!     │ Adapter │   │ Adapter  │   │  Source  │   │   Sink   │
//!     └─────────┘   └──────────┘   └──────────┘   └──────────┘
//! ```

pub mod outbound;

pub use outbound::artifact::ArtifactSource;
pub use outbound::chain::{ChainConnector, ChainReader, ChainSigner};
pub use outbound::clock::Clock;
pub use outbound::explorer::ExplorerApi;
pub use outbound::progress::{ProgressEvent, ProgressSink};
