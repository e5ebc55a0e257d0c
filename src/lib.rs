//! # GridBorder
//!
//! Draw diagrams on the *borders* of a grid of cells:
//! - Toggle, erase and extend border segments
//! - Flood fill closed contours with the active color
//! - Fill or erase whole rows and columns
//! - Row/column highlights with last-write-wins resolution
//! - Pan, zoom and pointer/touch gestures
//!
//! ## Architecture
//!
//! GridBorder is organized as a workspace with multiple crates:
//!
//! 1. **gridborder-core** - Error types, colors and shared constants
//! 2. **gridborder-designer** - Document model, hit testing, edit operations, gestures, JSON format
//! 3. **gridborder-settings** - Configuration files and platform config directory
//! 4. **gridborder** - Headless command line tool that integrates all crates

pub mod cli;

pub use gridborder_core::{Color, DocumentError, Error, GridError, Result};
pub use gridborder_designer as designer;
pub use gridborder_designer::{
    Cell, Document, DocumentSnapshot, GestureConfig, GestureMachine, LineKey, Orientation,
    Viewport,
};
pub use gridborder_settings::{Config, SettingsManager};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

fn env_filter() -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support, `info` otherwise
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Initialize logging into a file instead of the console
pub fn init_logging_to_file(path: &std::path::Path) -> anyhow::Result<()> {
    use anyhow::Context;
    use std::fs::OpenOptions;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let fmt_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
