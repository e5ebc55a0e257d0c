//! Persistence collaborators.
//!
//! The core never decides when to save. Hosts hold a [`DocumentStore`] and
//! call it whenever their own policy says so (e.g. debounced after every
//! revision change).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::document::DocumentSnapshot;
use crate::serialization::DocumentFile;

/// Somewhere a document can be loaded from and saved to.
pub trait DocumentStore {
    /// The stored document, or `None` when nothing was saved yet.
    fn load(&self) -> Result<Option<DocumentSnapshot>>;

    fn save(&mut self, snapshot: &DocumentSnapshot) -> Result<()>;
}

/// Stores the document as a JSON file in the import/export format.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentStore for JsonFileStore {
    fn load(&self) -> Result<Option<DocumentSnapshot>> {
        if !self.path.exists() {
            debug!("No stored document at {}", self.path.display());
            return Ok(None);
        }
        let file = DocumentFile::load_from_file(&self.path)?;
        let snapshot = file
            .into_snapshot()
            .with_context(|| format!("Invalid document in {}", self.path.display()))?;
        Ok(Some(snapshot))
    }

    fn save(&mut self, snapshot: &DocumentSnapshot) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        DocumentFile::from_snapshot(snapshot).save_to_file(&self.path)?;
        debug!("Stored document at {}", self.path.display());
        Ok(())
    }
}

/// Keeps the last saved snapshot in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    saved: Option<DocumentSnapshot>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times [`DocumentStore::save`] was called.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self) -> Result<Option<DocumentSnapshot>> {
        Ok(self.saved.clone())
    }

    fn save(&mut self, snapshot: &DocumentSnapshot) -> Result<()> {
        self.saved = Some(snapshot.clone());
        self.saves += 1;
        Ok(())
    }
}
