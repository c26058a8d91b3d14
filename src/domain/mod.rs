//! Domain models for taskcore
//!
//! Contains the core data types without any I/O concerns.

mod id;
mod task;
mod category;

pub use id::{CategoryId, IdError, TaskId};
pub use task::{has_priority_color, Priority, Task, MAX_COLORED_PRIORITY};
pub use category::{Category, CategoryError, CategoryNameMap};
