//! Errors raised while rendering a task listing

use std::io;

use thiserror::Error;

use crate::domain::{CategoryError, CategoryId, Priority};

#[derive(Debug, Error)]
pub enum RenderError {
    /// A task refers to a category that is not in the supplied collection
    #[error("Unknown category ID: {0}")]
    UnknownCategory(CategoryId),

    /// The color chooser was asked about a priority outside 1-3
    #[error("No color is defined for priority {0}")]
    InvalidColorRequest(Priority),

    #[error("Invalid date format: '{0}'")]
    InvalidDateFormat(String),

    #[error(transparent)]
    Category(#[from] CategoryError),

    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
}
