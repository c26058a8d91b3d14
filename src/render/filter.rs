//! Narrowing task collections by category and priority

use std::fmt;

use serde::Serialize;

use crate::domain::{CategoryId, Priority, Task};

/// Resolved options for a listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Category name filter; blank means no filter
    pub category_name: Option<String>,

    /// Priority filter; `0` means no filter
    pub priority: Priority,

    /// Append creation/due/completion timestamps to each line
    pub verbose: bool,
}

impl ListOptions {
    /// The category name filter, if one is set and not blank
    pub fn category_filter(&self) -> Option<&str> {
        self.category_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// The priority filter, if one is set
    pub fn priority_filter(&self) -> Option<Priority> {
        (self.priority != 0).then_some(self.priority)
    }

    /// Message shown in place of a section whose filtered set is empty
    ///
    /// The category name is echoed as the user typed it.
    pub fn empty_warning(&self, kind: TaskKind) -> String {
        let category = self
            .category_filter()
            .and(self.category_name.as_deref());
        match (category, self.priority_filter()) {
            (Some(name), Some(priority)) => format!(
                "There is no {} task with the priority {} and the Category name: {}",
                kind, priority, name
            ),
            (None, Some(priority)) => {
                format!("There is no {} task with the priority {}", kind, priority)
            }
            (Some(name), None) => {
                format!("There is no {} task with the Category name: {}", kind, name)
            }
            (None, None) => format!("There's no {} task", kind),
        }
    }
}

/// Which section a task collection belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    Active,
    Completed,
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskKind::Active => f.write_str("active"),
            TaskKind::Completed => f.write_str("completed"),
        }
    }
}

/// Category and priority predicates, combined with AND
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    category_id: Option<CategoryId>,
    priority: Option<Priority>,
}

impl TaskFilter {
    /// Builds the filter for the given options
    ///
    /// The category name is turned into an ID with the same derivation
    /// categories use, so an unknown name simply matches nothing.
    pub fn from_options(options: &ListOptions) -> Self {
        Self {
            category_id: options.category_filter().map(CategoryId::from_name),
            priority: options.priority_filter(),
        }
    }

    /// Returns true if no predicate is set
    pub fn is_pass_through(&self) -> bool {
        self.category_id.is_none() && self.priority.is_none()
    }

    /// Returns true if the task satisfies every predicate
    pub fn matches(&self, task: &Task) -> bool {
        let category_ok = self
            .category_id
            .as_ref()
            .map_or(true, |id| &task.category_id == id);
        let priority_ok = self.priority.map_or(true, |p| task.priority == p);
        category_ok && priority_ok
    }

    /// Keeps the matching tasks, in input order
    pub fn apply<'a, I>(&self, tasks: I) -> Filtered<'a>
    where
        I: IntoIterator<Item = &'a Task>,
    {
        let tasks: Vec<&Task> = tasks.into_iter().filter(|t| self.matches(t)).collect();
        tracing::debug!(
            category = ?self.category_id,
            priority = ?self.priority,
            kept = tasks.len(),
            "filtered tasks"
        );
        Filtered { tasks }
    }
}

/// Result of applying a [`TaskFilter`]
#[derive(Debug, Clone, PartialEq)]
pub struct Filtered<'a> {
    tasks: Vec<&'a Task>,
}

impl<'a> Filtered<'a> {
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Task> + '_ {
        self.tasks.iter().copied()
    }
}
