//! Configuration handling for taskcore
//!
//! Configuration is stored in `.taskcore/config.toml` (project) and
//! the platform config directory, e.g. `~/.config/taskcore/config.toml`
//! (global). Project values win over global ones.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cli::OutputFormat;
use crate::render::{Color, ColorMode, PriorityPalette, DEFAULT_DATE_FORMAT};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// How listings are displayed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// chrono format string for timestamps in verbose listings
    pub date_format: String,

    /// When to emit color escape codes
    pub color: ColorMode,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            color: ColorMode::Auto,
        }
    }
}

/// Layered settings; unset fields fall through to the next layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialDisplayConfig {
    pub date_format: Option<String>,
    pub color: Option<ColorMode>,
}

/// Layered priority colors; each key falls through on its own
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialPriorityPalette {
    pub p1: Option<Color>,
    pub p2: Option<Color>,
    pub p3: Option<Color>,
}

/// Contents of a single config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// Default output format (text or json)
    pub default_format: Option<OutputFormat>,

    pub display: PartialDisplayConfig,

    /// Priority colors
    pub colors: PartialPriorityPalette,
}

/// Effective configuration (global + project)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub default_format: OutputFormat,
    pub display: DisplayConfig,
    pub colors: PriorityPalette,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            display: DisplayConfig::default(),
            colors: PriorityPalette::default(),
        }
    }
}

impl Config {
    /// Loads global configuration merged with the given project's
    pub fn for_project(project_root: &Path) -> Result<Self> {
        let global = Self::load_global()?;
        let project = Self::load_file(&project_root.join(".taskcore").join("config.toml"))?;

        let config = Self::default().merge(global).merge(project);
        config.validate()?;
        Ok(config)
    }

    /// Applies the set fields of `file` on top of this configuration
    pub fn merge(mut self, file: ConfigFile) -> Self {
        if let Some(format) = file.default_format {
            self.default_format = format;
        }
        if let Some(date_format) = file.display.date_format {
            self.display.date_format = date_format;
        }
        if let Some(color) = file.display.color {
            self.display.color = color;
        }
        if let Some(p1) = file.colors.p1 {
            self.colors.p1 = p1;
        }
        if let Some(p2) = file.colors.p2 {
            self.colors.p2 = p2;
        }
        if let Some(p3) = file.colors.p3 {
            self.colors.p3 = p3;
        }
        self
    }

    /// Rejects settings that would only fail later, mid-listing
    pub fn validate(&self) -> Result<(), ConfigError> {
        use chrono::format::{Item, StrftimeItems};

        if self.display.date_format.trim().is_empty() {
            return Err(ConfigError::Invalid("display.date_format is empty".to_string()));
        }
        if StrftimeItems::new(&self.display.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::Invalid(format!(
                "display.date_format '{}' is not a valid date format",
                self.display.date_format
            )));
        }
        Ok(())
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "taskcore", "taskcore")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    fn load_global() -> Result<ConfigFile> {
        match Self::global_config_dir() {
            Some(dir) => Self::load_file(&dir.join("config.toml")),
            None => Ok(ConfigFile::default()),
        }
    }

    /// Loads one config file; a missing file is an empty layer
    pub fn load_file(path: &Path) -> Result<ConfigFile> {
        if !path.exists() {
            return Ok(ConfigFile::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Finds the project root by looking for a `.taskcore/` directory
    pub fn find_project_root() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;

        loop {
            if current.join(".taskcore").is_dir() {
                return Some(current);
            }

            if !current.pop() {
                return None;
            }
        }
    }
}
