//! File I/O and JSON import/export for documents.

use std::path::Path;

use gridborder_core::DocumentError;
use tracing::{debug, info};

use super::Document;
use crate::serialization::{self, DocumentFile};

impl Document {
    /// Save document to file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        DocumentFile::from_snapshot(&self.snapshot()).save_to_file(&path)?;
        info!("Saved document to {}", path.as_ref().display());
        Ok(())
    }

    /// Load document from file.
    pub fn load_from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file = DocumentFile::load_from_file(&path)?;
        let document = Document::from(file.into_snapshot()?);
        info!(
            "Loaded {}x{} document with {} lines from {}",
            document.width,
            document.height,
            document.lines.len(),
            path.as_ref().display()
        );
        Ok(document)
    }

    /// Replaces the content with an imported document. On failure the
    /// document is left as it was.
    pub fn import_json(&mut self, text: &str) -> Result<(), DocumentError> {
        let snapshot = serialization::import_json(text)?;
        debug!("Imported document");
        self.restore(snapshot);
        Ok(())
    }

    pub fn export_json(&self) -> gridborder_core::Result<String> {
        serialization::export_json(&self.snapshot())
    }
}
