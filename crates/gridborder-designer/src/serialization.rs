//! Serialization and deserialization for grid border documents.
//!
//! The import/export format is JSON:
//!
//! ```json
//! {
//!   "version": 1,
//!   "width": 20,
//!   "height": 20,
//!   "lines": { "3,4,h": { "x": 3, "y": 4, "type": "horizontal", "color": "#000000" } },
//!   "highlights": [ { "type": "row", "index": 2, "color": "#ff0000", "timestamp": 1700000000000 } ],
//!   "currentColor": "#000000"
//! }
//! ```
//!
//! Import validates before anything is accepted. Lines and highlights that
//! fall outside the grid are dropped with a warning.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize, Serializer};
use tracing::warn;

use gridborder_core::constants::DOCUMENT_VERSION;
use gridborder_core::{Color, DocumentError};

use crate::document::DocumentSnapshot;
use crate::model::{Highlight, HighlightKind, HighlightList, Line, LineKey, LineSet, Orientation};

/// Complete document file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentFile {
    pub version: i64,
    pub width: i32,
    pub height: i32,
    pub lines: BTreeMap<String, LineRecord>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    #[serde(default)]
    pub current_color: Color,
}

/// Serialized border segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRecord {
    pub x: i32,
    pub y: i32,
    #[serde(rename = "type")]
    pub orientation: Orientation,
    pub color: Color,
}

impl LineRecord {
    fn key(&self) -> LineKey {
        LineKey::new(self.x, self.y, self.orientation)
    }
}

/// First pass over imported text. Only the shape needed to validate.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDocument {
    #[serde(default = "default_version")]
    version: i64,
    width: i64,
    height: i64,
    lines: serde_json::Value,
    #[serde(default)]
    highlights: Vec<serde_json::Value>,
    #[serde(default)]
    current_color: Option<String>,
}

fn default_version() -> i64 {
    DOCUMENT_VERSION
}

impl DocumentFile {
    pub fn from_snapshot(snapshot: &DocumentSnapshot) -> Self {
        let lines = snapshot
            .lines()
            .iter()
            .map(|line| {
                (
                    line.key.to_key_string(),
                    LineRecord {
                        x: line.x(),
                        y: line.y(),
                        orientation: line.orientation(),
                        color: line.color,
                    },
                )
            })
            .collect();

        Self {
            version: DOCUMENT_VERSION,
            width: snapshot.width(),
            height: snapshot.height(),
            lines,
            highlights: snapshot.highlights().iter().copied().collect(),
            current_color: snapshot.active_color(),
        }
    }

    /// Builds a snapshot, dropping anything outside the grid.
    pub fn into_snapshot(self) -> std::result::Result<DocumentSnapshot, DocumentError> {
        if self.version > DOCUMENT_VERSION {
            return Err(DocumentError::UnsupportedVersion {
                version: self.version,
            });
        }
        if self.width < 1 || self.height < 1 {
            return Err(DocumentError::invalid(format!(
                "grid must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        let (width, height) = (self.width, self.height);

        let mut lines = Vec::with_capacity(self.lines.len());
        for (key_text, record) in self.lines {
            let key = record.key();
            if key.to_key_string() != key_text {
                warn!("Line entry '{}' describes {}, using the record", key_text, key);
            }
            if key.in_bounds(width, height) {
                lines.push(Line::new(key, record.color));
            } else {
                warn!("Dropping out-of-bounds line {}", key);
            }
        }

        let highlights = self.highlights.into_iter().filter(|h| {
            let keep = match h.kind {
                HighlightKind::Row => (0..height).contains(&h.index),
                HighlightKind::Col => (0..width).contains(&h.index),
            };
            if !keep {
                warn!("Dropping out-of-bounds {:?} highlight {}", h.kind, h.index);
            }
            keep
        });

        Ok(DocumentSnapshot {
            width,
            height,
            lines: lines.into_iter().collect::<LineSet>(),
            highlights: HighlightList::from_entries(highlights),
            active_color: self.current_color,
        })
    }

    /// Save document to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize document")?;

        std::fs::write(path.as_ref(), json).context("Failed to write document file")?;

        Ok(())
    }

    /// Load document from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read document file")?;

        let document = parse(&content).context("Failed to parse document file")?;

        Ok(document)
    }
}

/// Parses and validates imported JSON.
pub fn parse(text: &str) -> std::result::Result<DocumentFile, DocumentError> {
    let raw: RawDocument =
        serde_json::from_str(text).map_err(|e| DocumentError::invalid(e.to_string()))?;

    if raw.version > DOCUMENT_VERSION {
        return Err(DocumentError::UnsupportedVersion {
            version: raw.version,
        });
    }
    if raw.version < 1 {
        return Err(DocumentError::invalid(format!(
            "version must be >= 1, got {}",
            raw.version
        )));
    }
    if raw.width < 1 {
        return Err(DocumentError::invalid("width must be >= 1"));
    }
    if raw.height < 1 {
        return Err(DocumentError::invalid("height must be >= 1"));
    }
    let width = i32::try_from(raw.width)
        .map_err(|_| DocumentError::invalid(format!("width {} is too large", raw.width)))?;
    let height = i32::try_from(raw.height)
        .map_err(|_| DocumentError::invalid(format!("height {} is too large", raw.height)))?;

    let serde_json::Value::Object(entries) = raw.lines else {
        return Err(DocumentError::invalid("lines must be an object"));
    };
    let mut lines = BTreeMap::new();
    for (key, value) in entries {
        let record: LineRecord = serde_json::from_value(value)
            .map_err(|e| DocumentError::invalid(format!("line '{key}': {e}")))?;
        lines.insert(key, record);
    }

    let highlights = raw
        .highlights
        .into_iter()
        .enumerate()
        .map(|(i, value)| {
            serde_json::from_value::<Highlight>(value)
                .map_err(|e| DocumentError::invalid(format!("highlight {i}: {e}")))
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let current_color = match raw.current_color {
        Some(text) => text
            .parse::<Color>()
            .map_err(|_| DocumentError::InvalidColor { value: text })?,
        None => Color::default(),
    };

    Ok(DocumentFile {
        version: raw.version,
        width,
        height,
        lines,
        highlights,
        current_color,
    })
}

/// Parses, validates and converts imported JSON into a snapshot.
pub fn import_json(text: &str) -> std::result::Result<DocumentSnapshot, DocumentError> {
    parse(text)?.into_snapshot()
}

/// Pretty-printed export of `snapshot`.
pub fn export_json(snapshot: &DocumentSnapshot) -> gridborder_core::Result<String> {
    Ok(serde_json::to_string_pretty(&DocumentFile::from_snapshot(
        snapshot,
    ))?)
}

impl Serialize for DocumentSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        DocumentFile::from_snapshot(self).serialize(serializer)
    }
}
