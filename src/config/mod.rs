// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! Only view-layer preferences live here (theme mode, swipe threshold).
//! Review results are never persisted; a session resets when it closes.

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Flipdeck";

/// Smallest accepted swipe threshold, in logical pixels.
pub const MIN_SWIPE_THRESHOLD: f32 = 10.0;
/// Largest accepted swipe threshold, in logical pixels.
pub const MAX_SWIPE_THRESHOLD: f32 = 300.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Horizontal displacement a quiz drag must cover to count as a swipe.
    #[serde(default)]
    pub swipe_threshold: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::System,
            swipe_threshold: None,
        }
    }
}

/// Ensures swipe thresholds stay inside the supported range so persisted
/// configs cannot request nonsensical gestures.
pub fn clamp_swipe_threshold(value: f32) -> f32 {
    value.clamp(MIN_SWIPE_THRESHOLD, MAX_SWIPE_THRESHOLD)
}

fn get_default_config_path(config_dir_override: Option<&Path>) -> Option<PathBuf> {
    let base = match config_dir_override {
        Some(dir) => Some(dir.to_path_buf()),
        None => dirs::config_dir().map(|mut path| {
            path.push(APP_NAME);
            path
        }),
    };
    base.map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load(config_dir_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = get_default_config_path(config_dir_override) {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config, config_dir_override: Option<&Path>) -> Result<()> {
    if let Some(path) = get_default_config_path(config_dir_override) {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
