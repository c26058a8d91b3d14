//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `init` | Create a `.taskcore/` project |
//! | `add`, `done`, `reopen` | Task lifecycle |
//! | `category add`, `category list` | Category management |
//! | `list` | Colored active/completed listing with filters |
//!
//! ## Output Formats
//!
//! All commands support the `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Diagnostics
//!
//! `--debug` (or `TASKCORE_LOG=...`) writes tracing output to stderr.
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod logging;
mod task;
mod category;
mod list;

pub use app::{run, Cli, Commands, ListArgs};
pub use output::{Output, OutputFormat};
pub use task::parse_due;
