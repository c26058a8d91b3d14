//! Project management
//!
//! Handles project initialization and provides access to stores.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use super::{CategoryStore, Config, TaskStore};

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("Not in a taskcore project. Run 'taskcore init' first.")]
    NotInProject,
}

pub(super) const DEFAULT_CONFIG: &str = r#"# taskcore configuration

# Default output format: "text" or "json"
# default_format = "text"

[display]
# chrono format string used by `list --verbose`
# date_format = "%A, %B %-d, %Y %-I:%M:%S %p"

# "auto", "always" or "never"
# color = "auto"

[colors]
# p1 = "red"
# p2 = "yellow"
# p3 = "green"
"#;

/// A taskcore project
pub struct Project {
    root: PathBuf,
    config: Config,
}

impl Project {
    /// Opens an existing project at the given path
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();

        if !root.join(".taskcore").is_dir() {
            return Err(ProjectError::NotInProject.into());
        }

        let config = Config::for_project(&root)?;
        tracing::debug!(root = %root.display(), "opened project");

        Ok(Self { root, config })
    }

    /// Opens the project at the current directory or a parent
    pub fn open_current() -> Result<Self> {
        let root = Config::find_project_root().ok_or(ProjectError::NotInProject)?;

        Self::open(root)
    }

    /// Initializes a new project at the given path
    pub fn init(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let data_dir = root.join(".taskcore");

        fs::create_dir_all(&data_dir).with_context(|| {
            format!("Failed to create .taskcore directory: {}", data_dir.display())
        })?;

        let config_path = data_dir.join("config.toml");
        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG)
                .with_context(|| format!("Failed to write config: {}", config_path.display()))?;
        }

        let gitignore_path = data_dir.join(".gitignore");
        if !gitignore_path.exists() {
            fs::write(&gitignore_path, "# Temp files from interrupted writes\n*.tmp\n")
                .with_context(|| {
                    format!("Failed to write .gitignore: {}", gitignore_path.display())
                })?;
        }

        Self::open(root)
    }

    /// Returns the project root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the task store
    pub fn task_store(&self) -> TaskStore {
        TaskStore::for_project(&self.root)
    }

    /// Returns the category store
    pub fn category_store(&self) -> CategoryStore {
        CategoryStore::for_project(&self.root)
    }
}
