//! GridBorder Settings Crate
//!
//! Handles application configuration and settings persistence.

pub mod config;
pub mod error;
pub mod manager;

pub use config::{Config, GridSettings, InteractionSettings, ViewportSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
pub use manager::SettingsManager;
