// SPDX-License-Identifier: MPL-2.0
//! Loading of user preferences from `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and initial theme mode
//! - `[display]` - Animations and the scroll-to-top threshold
//!
//! The file is only read. Toggling the theme at runtime does not write it
//! back.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. `--config-dir` or the `PORTFOLIO_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```toml
//! [general]
//! language = "fr"
//! theme_mode = "system"
//!
//! [display]
//! animations = false
//! scroll_top_threshold = 600.0
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

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Theme mode at startup (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Whether section changes play enter/exit transitions.
    #[serde(default = "default_animations")]
    pub animations: bool,

    #[serde(default = "default_scroll_top_threshold")]
    pub scroll_top_threshold: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            animations: DEFAULT_ANIMATIONS,
            scroll_top_threshold: DEFAULT_SCROLL_TOP_THRESHOLD,
        }
    }
}

impl DisplayConfig {
    /// The configured threshold, or the default when it is negative, not a
    /// number, or absurdly large.
    #[must_use]
    pub fn effective_scroll_top_threshold(&self) -> f32 {
        let value = self.scroll_top_threshold;
        if value.is_finite() && (0.0..=MAX_SCROLL_TOP_THRESHOLD).contains(&value) {
            value
        } else {
            tracing::warn!(value, "invalid scroll_top_threshold, using default");
            DEFAULT_SCROLL_TOP_THRESHOLD
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

fn default_animations() -> bool {
    DEFAULT_ANIMATIONS
}

fn default_scroll_top_threshold() -> f32 {
    DEFAULT_SCROLL_TOP_THRESHOLD
}

/// Accepts theme modes case-insensitively.
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
/// default config with the i18n key of a warning to show.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };

    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => {
            tracing::info!(path = %path.display(), "loaded config");
            (config, None)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "failed to load config");
            (
                Config::default(),
                Some("notification-config-load-error".to_string()),
            )
        }
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content).map_err(Error::from)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================
