// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedCaliper";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// URL of the marker-detection service used for calibration.
    pub service_url: Option<String>,
    /// Scale factor applied per mouse-wheel notch.
    #[serde(default)]
    pub wheel_zoom_factor: Option<f32>,
    /// Unit suffix shown on measurement labels.
    #[serde(default)]
    pub unit_label: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_url: Some(DEFAULT_SERVICE_URL.to_string()),
            wheel_zoom_factor: Some(DEFAULT_WHEEL_ZOOM_FACTOR),
            unit_label: Some(UNIT_LABEL.to_string()),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
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
