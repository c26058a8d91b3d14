//! # Storage Layer
//!
//! Persistence for taskcore with git-friendly file formats.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Tasks | JSONL (one JSON per line) | `.taskcore/tasks.jsonl` |
//! | Categories | JSONL | `.taskcore/categories.jsonl` |
//! | Config | TOML | `.taskcore/config.toml` |
//!
//! ## Concurrency Safety
//!
//! - Stores take `fs2` file locks for reads and writes
//! - Full rewrites are atomic (temp file + rename)
//!
//! ## Key Types
//!
//! - [`Project`] - Entry point for accessing a taskcore project
//! - [`TaskStore`] - Read/write tasks as JSONL
//! - [`CategoryStore`] - Read/write categories as JSONL
//! - [`Config`] - Project and global configuration

mod jsonl;
mod config;
mod project;

pub use jsonl::{CategoryStore, TaskStore};
pub use config::{
    Config, ConfigError, ConfigFile, DisplayConfig, PartialDisplayConfig, PartialPriorityPalette,
};
pub use project::{Project, ProjectError};
