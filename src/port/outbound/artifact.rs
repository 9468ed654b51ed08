//! Source of compiled-contract JSON artifacts.

use std::path::Path;

use serde_json::Value;

use crate::error::Result;

/// Loads and parses a JSON artifact.
pub trait ArtifactSource: Send + Sync {
    /// Read `path` and parse it as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ArtifactUnreadable`](crate::error::ValidationError::ArtifactUnreadable)
    /// when the file cannot be read or is not valid JSON.
    fn load(&self, path: &Path) -> Result<Value>;
}
