//! In-memory artifact source.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};

use serde_json::Value;

use crate::error::{Result, ValidationError};
use crate::port::ArtifactSource;

/// Serves pre-parsed documents by path; unknown paths are unreadable.
#[derive(Default)]
pub struct InMemoryArtifacts {
    documents: HashMap<PathBuf, Value>,
    loads: AtomicU32,
}

impl InMemoryArtifacts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, path: impl Into<PathBuf>, document: Value) -> Self {
        self.documents.insert(path.into(), document);
        self
    }

    pub fn loads(&self) -> u32 {
        self.loads.load(Ordering::SeqCst)
    }
}

impl ArtifactSource for InMemoryArtifacts {
    fn load(&self, path: &Path) -> Result<Value> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.documents.get(path).cloned().ok_or_else(|| {
            ValidationError::ArtifactUnreadable {
                path: path.to_path_buf(),
                reason: "no such file".to_string(),
            }
            .into()
        })
    }
}
