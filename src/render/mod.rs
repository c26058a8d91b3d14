//! # Task List Rendering
//!
//! Turns already-loaded task and category collections into the colored
//! `list` output.
//!
//! ## Pipeline
//!
//! | Stage | Type | Role |
//! |-------|------|------|
//! | Resolve | [`CategoryNameMap`](crate::domain::CategoryNameMap) | category ID → display name |
//! | Filter | [`TaskFilter`] | category/priority predicates, input order kept |
//! | Format | [`TaskLineFormatter`] | one task → one line of fragments |
//! | Orchestrate | [`ListRenderer`] | headers, warnings, both sections |
//!
//! Output goes through an [`OutputSink`]. Priority colors come from a
//! [`PriorityColorChooser`]; the renderer only asks it about priorities 1-3.

mod error;
mod color;
mod sink;
mod filter;
mod line;
mod list;

pub use error::RenderError;
pub use color::{Color, PriorityColorChooser, PriorityPalette};
pub use sink::{ColorGuard, ColorMode, Fragment, OutputSink, Recorder, TerminalSink};
pub use filter::{Filtered, ListOptions, TaskFilter, TaskKind};
pub use line::{TaskLineFormatter, DEFAULT_DATE_FORMAT};
pub use list::{ListRenderer, TaskList};
