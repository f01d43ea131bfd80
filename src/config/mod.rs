// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration: user preferences read
//! from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[playback]` - Slide duration, autostart and end-of-carousel behavior
//! - `[display]` - Unsupported media handling and indicator layout
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `ICED_STORIES_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_stories::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("config fell back to defaults: {key}");
//! }
//! println!("{:?}", config.playback.slide_duration_ms);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums (shared between sections)
// =============================================================================

/// What an unsupported media slide shows in its frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum UnsupportedMedia {
    /// Render nothing; the slide is an empty, viewport-wide slot.
    #[default]
    Blank,
    /// Render a short notice naming the unsupported media type.
    Placeholder,
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Playback settings for the carousel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaybackConfig {
    /// Time each slide's indicator takes to fill, in milliseconds.
    #[serde(
        default = "default_slide_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub slide_duration_ms: Option<u64>,

    /// Start the first indicator when the carousel mounts.
    #[serde(default = "default_autostart", skip_serializing_if = "Option::is_none")]
    pub autostart: Option<bool>,

    /// Close the window after the last slide completes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_on_finish: Option<bool>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            slide_duration_ms: default_slide_duration_ms(),
            autostart: default_autostart(),
            exit_on_finish: Some(DEFAULT_EXIT_ON_FINISH),
        }
    }
}

/// Display settings for slides and indicators.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Handling of slides whose media type is not supported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unsupported_media: Option<UnsupportedMedia>,

    /// Inset subtracted from each indicator's share of the row width.
    #[serde(
        default = "default_indicator_inset",
        skip_serializing_if = "Option::is_none"
    )]
    pub indicator_inset: Option<f32>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            unsupported_media: Some(UnsupportedMedia::default()),
            indicator_inset: default_indicator_inset(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Carousel playback settings.
    #[serde(default)]
    pub playback: PlaybackConfig,

    /// Slide and indicator display settings.
    #[serde(default)]
    pub display: DisplayConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_slide_duration_ms() -> Option<u64> {
    Some(DEFAULT_SLIDE_DURATION_MS)
}

fn default_autostart() -> Option<bool> {
    Some(DEFAULT_AUTOSTART)
}

fn default_indicator_inset() -> Option<f32> {
    Some(DEFAULT_INDICATOR_INSET)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with an i18n key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("Ignoring config at {}: {}", path.display(), err);
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
