//! Task domain model
//!
//! A task belongs to exactly one category and carries a small integer
//! priority. Active tasks are tracked against a due date; completed tasks
//! additionally record when they were finished.

use chrono::{DateTime, Duration, Local, Utc};
use serde::{Deserialize, Serialize};

use super::id::{CategoryId, TaskId};

/// Priority level. `0` means unset; only 1-3 get a display color.
pub type Priority = u8;

/// Highest priority that has a display color
pub const MAX_COLORED_PRIORITY: Priority = 3;

/// Returns true if the priority falls in the colored range (1-3)
pub fn has_priority_color(priority: Priority) -> bool {
    (1..=MAX_COLORED_PRIORITY).contains(&priority)
}

/// A single todo item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,

    /// Human-readable title
    pub title: String,

    /// Priority (0 = unset)
    #[serde(default)]
    pub priority: Priority,

    /// Category this task is filed under
    pub category_id: CategoryId,

    /// Whether the task has been finished
    #[serde(default)]
    pub completed: bool,

    /// When the task was created
    pub creation_date: DateTime<Local>,

    /// When the task is due
    pub due_date_time: DateTime<Local>,

    /// When the task was completed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<DateTime<Local>>,
}

impl Task {
    /// Creates a new active task due one day after creation
    pub fn new(title: impl Into<String>, category_id: CategoryId, priority: Priority) -> Self {
        let now = Local::now();
        Self::with_dates(title, category_id, priority, now, now + Duration::days(1))
    }

    /// Creates a new active task with explicit creation and due dates
    pub fn with_dates(
        title: impl Into<String>,
        category_id: CategoryId,
        priority: Priority,
        creation_date: DateTime<Local>,
        due_date_time: DateTime<Local>,
    ) -> Self {
        let title = title.into();
        Self {
            id: TaskId::new(&title, creation_date.with_timezone(&Utc)),
            title,
            priority,
            category_id,
            completed: false,
            creation_date,
            due_date_time,
            completion_date: None,
        }
    }

    /// Marks the task as completed now
    pub fn complete(&mut self) {
        self.complete_at(Local::now());
    }

    /// Marks the task as completed at the given time
    pub fn complete_at(&mut self, when: DateTime<Local>) {
        self.completed = true;
        self.completion_date = Some(when);
    }

    /// Moves the task back to the active list
    pub fn reopen(&mut self) {
        self.completed = false;
        self.completion_date = None;
    }

    /// Returns true if the task is still active and past its due date
    pub fn is_overdue(&self, now: DateTime<Local>) -> bool {
        !self.completed && self.due_date_time < now
    }
}
