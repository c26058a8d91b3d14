//! taskcore - A local-first todo list for the terminal
//!
//! Tasks are filed under categories, carry a priority from 1 to 3, and are
//! listed in two sections (active and completed) with priority colors and
//! optional timestamps. The listing engine lives in [`render`]; it works on
//! already-loaded collections and writes through an injectable sink.

pub mod domain;
pub mod render;
pub mod storage;
pub mod cli;

pub use domain::{Category, CategoryId, Task, TaskId};
