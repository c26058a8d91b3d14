//! Terminal colors and the priority → color policy

use serde::{Deserialize, Serialize};

use super::RenderError;
use crate::domain::Priority;

/// Foreground colors the renderer can request from a sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    DarkRed,
    DarkGreen,
    DarkYellow,
    DarkBlue,
    DarkMagenta,
    DarkCyan,
    Grey,
    DarkGrey,
}

impl From<Color> for crossterm::style::Color {
    fn from(color: Color) -> Self {
        use crossterm::style::Color as Term;
        match color {
            Color::Black => Term::Black,
            Color::Red => Term::Red,
            Color::Green => Term::Green,
            Color::Yellow => Term::Yellow,
            Color::Blue => Term::Blue,
            Color::Magenta => Term::Magenta,
            Color::Cyan => Term::Cyan,
            Color::White => Term::White,
            Color::DarkRed => Term::DarkRed,
            Color::DarkGreen => Term::DarkGreen,
            Color::DarkYellow => Term::DarkYellow,
            Color::DarkBlue => Term::DarkBlue,
            Color::DarkMagenta => Term::DarkMagenta,
            Color::DarkCyan => Term::DarkCyan,
            Color::Grey => Term::Grey,
            Color::DarkGrey => Term::DarkGrey,
        }
    }
}

/// Maps a priority level to its display color
///
/// Only ever consulted for priorities 1-3.
pub trait PriorityColorChooser {
    fn color_for(&self, priority: Priority) -> Result<Color, RenderError>;
}

/// Configurable color per priority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityPalette {
    pub p1: Color,
    pub p2: Color,
    pub p3: Color,
}

impl Default for PriorityPalette {
    fn default() -> Self {
        Self {
            p1: Color::Red,
            p2: Color::Yellow,
            p3: Color::Green,
        }
    }
}

impl PriorityColorChooser for PriorityPalette {
    fn color_for(&self, priority: Priority) -> Result<Color, RenderError> {
        match priority {
            1 => Ok(self.p1),
            2 => Ok(self.p2),
            3 => Ok(self.p3),
            other => Err(RenderError::InvalidColorRequest(other)),
        }
    }
}
