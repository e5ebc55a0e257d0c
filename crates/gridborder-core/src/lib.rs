//! # GridBorder Core
//!
//! Core types and utilities for GridBorder.
//! Provides the error taxonomy shared by every layer, the color type used
//! for lines and highlights, and the geometry and interaction constants.

pub mod color;
pub mod constants;
pub mod error;

pub use color::Color;
pub use error::{DocumentError, Error, GridError, Result};
