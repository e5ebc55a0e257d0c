//! Configuration and settings management for GridBorder
//!
//! Provides configuration file handling, settings management, and validation.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Interaction settings (hit tolerances, touch timing, drag direction)
//! - Viewport preferences (cell size and zoom limits)
//! - Grid defaults for new documents

use std::path::{Path, PathBuf};
use std::time::Duration;

use gridborder_core::constants::{
    DEFAULT_CELL_SIZE, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DIRECTION_DOMINANCE,
    DIRECTION_THRESHOLD, DOUBLE_TAP_DISTANCE, DOUBLE_TAP_WINDOW, DRAW_DELAY, LONG_PRESS,
    MAX_CELL_SIZE, MIN_CELL_SIZE, MULTI_TAP_WINDOW, POINTER_TOLERANCE, TOUCH_JITTER,
    TOUCH_TOLERANCE,
};
use gridborder_core::Color;
use gridborder_designer::{Document, GestureConfig, Viewport};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// Pointer and touch interaction settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionSettings {
    /// Hit tolerance for mouse input, in fractions of a cell
    pub pointer_tolerance: f64,
    /// Hit tolerance for touch input, in fractions of a cell
    pub touch_tolerance: f64,
    /// Wait for a second finger before a touch draws
    pub draw_delay_ms: u64,
    /// Hold time before a stationary touch erases
    pub long_press_ms: u64,
    /// Movement in pixels a touch may make and still count as stationary
    pub touch_jitter: f64,
    pub double_tap_ms: u64,
    pub double_tap_distance: f64,
    /// Maximum duration of a two or three finger undo/redo tap
    pub multi_tap_ms: u64,
    /// Drag distance in pixels before the drag direction is decided
    pub direction_threshold: f64,
    pub direction_dominance: f64,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            pointer_tolerance: POINTER_TOLERANCE,
            touch_tolerance: TOUCH_TOLERANCE,
            draw_delay_ms: DRAW_DELAY.as_millis() as u64,
            long_press_ms: LONG_PRESS.as_millis() as u64,
            touch_jitter: TOUCH_JITTER,
            double_tap_ms: DOUBLE_TAP_WINDOW.as_millis() as u64,
            double_tap_distance: DOUBLE_TAP_DISTANCE,
            multi_tap_ms: MULTI_TAP_WINDOW.as_millis() as u64,
            direction_threshold: DIRECTION_THRESHOLD,
            direction_dominance: DIRECTION_DOMINANCE,
        }
    }
}

impl InteractionSettings {
    /// Builds the gesture machine configuration.
    pub fn to_gesture_config(&self) -> GestureConfig {
        GestureConfig {
            pointer_tolerance: self.pointer_tolerance,
            touch_tolerance: self.touch_tolerance,
            draw_delay: Duration::from_millis(self.draw_delay_ms),
            long_press: Duration::from_millis(self.long_press_ms),
            touch_jitter: self.touch_jitter,
            double_tap_window: Duration::from_millis(self.double_tap_ms),
            double_tap_distance: self.double_tap_distance,
            multi_tap_window: Duration::from_millis(self.multi_tap_ms),
            direction_threshold: self.direction_threshold,
            direction_dominance: self.direction_dominance,
        }
    }

    fn validate(&self) -> SettingsResult<()> {
        for (key, value) in [
            ("pointer_tolerance", self.pointer_tolerance),
            ("touch_tolerance", self.touch_tolerance),
        ] {
            if !(value > 0.0 && value <= 0.5) {
                return Err(SettingsError::invalid(
                    format!("interaction.{key}"),
                    "must be in (0, 0.5]",
                ));
            }
        }
        if self.long_press_ms <= self.draw_delay_ms {
            return Err(SettingsError::invalid(
                "interaction.long_press_ms",
                "must be greater than draw_delay_ms",
            ));
        }
        for (key, value) in [
            ("touch_jitter", self.touch_jitter),
            ("double_tap_distance", self.double_tap_distance),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(SettingsError::invalid(
                    format!("interaction.{key}"),
                    "must be a finite distance >= 0",
                ));
            }
        }
        if !(self.direction_threshold.is_finite() && self.direction_threshold > 0.0) {
            return Err(SettingsError::invalid(
                "interaction.direction_threshold",
                "must be a finite distance > 0",
            ));
        }
        if !(self.direction_dominance.is_finite() && self.direction_dominance >= 1.0) {
            return Err(SettingsError::invalid(
                "interaction.direction_dominance",
                "must be finite and >= 1",
            ));
        }
        Ok(())
    }
}

/// Viewport preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSettings {
    /// Cell size in pixels of a fresh viewport
    pub cell_size: f64,
    pub min_cell_size: f64,
    pub max_cell_size: f64,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            min_cell_size: MIN_CELL_SIZE,
            max_cell_size: MAX_CELL_SIZE,
        }
    }
}

impl ViewportSettings {
    /// Creates a viewport for a canvas of the given pixel size.
    pub fn to_viewport(&self, canvas_width: f64, canvas_height: f64) -> Viewport {
        let mut viewport = Viewport::new(canvas_width, canvas_height)
            .with_limits(self.min_cell_size, self.max_cell_size);
        viewport.set_cell_size(self.cell_size);
        viewport
    }

    fn validate(&self) -> SettingsResult<()> {
        if !(self.min_cell_size > 0.0) {
            return Err(SettingsError::invalid("viewport.min_cell_size", "must be > 0"));
        }
        if self.max_cell_size < self.min_cell_size {
            return Err(SettingsError::invalid(
                "viewport.max_cell_size",
                "must be >= min_cell_size",
            ));
        }
        if !(self.min_cell_size..=self.max_cell_size).contains(&self.cell_size) {
            return Err(SettingsError::invalid(
                "viewport.cell_size",
                "must lie between min_cell_size and max_cell_size",
            ));
        }
        Ok(())
    }
}

/// Defaults for new documents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    pub width: i32,
    pub height: i32,
    /// Color new documents draw with
    pub color: Color,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            color: Color::BLACK,
        }
    }
}

impl GridSettings {
    /// Creates an empty document with these defaults.
    pub fn new_document(&self) -> SettingsResult<Document> {
        let mut document = Document::new(self.width, self.height)
            .map_err(|e| SettingsError::invalid("grid", e.to_string()))?;
        document.set_active_color(self.color);
        Ok(document)
    }

    fn validate(&self) -> SettingsResult<()> {
        if self.width < 1 || self.height < 1 {
            return Err(SettingsError::invalid("grid", "dimensions must be >= 1"));
        }
        Ok(())
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub interaction: InteractionSettings,
    pub viewport: ViewportSettings,
    pub grid: GridSettings,
    /// Number of recent files to track
    pub recent_files_count: usize,
    /// Recently opened documents, newest first
    pub recent_files: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interaction: InteractionSettings::default(),
            viewport: ViewportSettings::default(),
            grid: GridSettings::default(),
            recent_files_count: 10,
            recent_files: Vec::new(),
        }
    }
}

#[derive(Clone, Copy)]
enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(other.unwrap_or("<none>").to_string()).into()),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)?;
        debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        self.interaction.validate()?;
        self.viewport.validate()?;
        self.grid.validate()?;
        Ok(())
    }

    /// Add file to recent files list
    pub fn add_recent_file(&mut self, path: PathBuf) {
        self.recent_files.retain(|f| f != &path);
        self.recent_files.insert(0, path);
        self.recent_files.truncate(self.recent_files_count);
    }
}
