//! Error handling for GridBorder
//!
//! Provides error types for every layer of the core:
//! - Grid errors (flood fill, extension, bounds and dimension checks)
//! - Document errors (import/export validation)
//!
//! All error types use `thiserror` for ergonomic error handling. Every
//! error here is local and recoverable: an operation that fails leaves
//! the document exactly as it was.

use thiserror::Error;

/// Grid error type
///
/// Raised by edit operations on the line set: flood fill, directional
/// extension and resizing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Flood fill reached the outer edge of the grid through a side that
    /// has no sealing segment.
    #[error("Contour is open at cell ({x}, {y})")]
    ContourOpen {
        /// Column of the cell that touched the open edge.
        x: i32,
        /// Row of the cell that touched the open edge.
        y: i32,
    },

    /// A start point or target lies outside the grid.
    #[error("Position ({x}, {y}) is outside the grid")]
    OutOfBounds {
        /// The requested column.
        x: i32,
        /// The requested row.
        y: i32,
    },

    /// Directional extension found no parallel segment to connect to.
    #[error("No segment to extend to")]
    NoTarget,

    /// Grid dimensions must be at least 1x1.
    #[error("Invalid grid dimensions {width}x{height}")]
    InvalidDimensions {
        /// The rejected width.
        width: i64,
        /// The rejected height.
        height: i64,
    },
}

/// Document error type
///
/// Represents failures while validating an imported document. The import
/// is aborted and the current document stays untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// The document does not follow the schema.
    #[error("Invalid document: {reason}")]
    InvalidDocument {
        /// What was wrong with the document.
        reason: String,
    },

    /// The document was written by a newer format version.
    #[error("Unsupported document version {version}")]
    UnsupportedVersion {
        /// The version found in the document.
        version: i64,
    },

    /// A color string could not be parsed.
    #[error("Invalid color '{value}'")]
    InvalidColor {
        /// The offending color text.
        value: String,
    },
}

impl DocumentError {
    /// Create an `InvalidDocument` error from a message
    pub fn invalid(reason: impl Into<String>) -> Self {
        DocumentError::InvalidDocument {
            reason: reason.into(),
        }
    }
}

/// Main error type for GridBorder
///
/// A unified error type that can represent any error of the core.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Grid error
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Document error
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is an open contour reported by flood fill
    pub fn is_contour_open(&self) -> bool {
        matches!(self, Error::Grid(GridError::ContourOpen { .. }))
    }

    /// Check if this is a document validation error
    pub fn is_document_error(&self) -> bool {
        matches!(self, Error::Document(_))
    }

    /// Check if the caller should drop this error without telling the user
    pub fn is_silent(&self) -> bool {
        matches!(
            self,
            Error::Grid(GridError::NoTarget) | Error::Grid(GridError::OutOfBounds { .. })
        )
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
