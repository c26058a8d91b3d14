//! Task CLI commands

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use super::output::Output;
use crate::domain::{Priority, Task, TaskId};
use crate::storage::Project;

/// Parses a due date given as `YYYY-MM-DD` or `YYYY-MM-DD HH:MM` in local time
///
/// A bare date means the end of that day (23:59).
pub fn parse_due(input: &str) -> Result<DateTime<Local>> {
    let input = input.trim();

    let naive = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M")
        .or_else(|_| {
            NaiveDate::parse_from_str(input, "%Y-%m-%d").map(|date| {
                date.and_time(NaiveTime::from_hms_opt(23, 59, 0).unwrap_or_default())
            })
        })
        .with_context(|| {
            format!(
                "Invalid due date '{}': expected YYYY-MM-DD or \"YYYY-MM-DD HH:MM\"",
                input
            )
        })?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .with_context(|| format!("Due date '{}' does not exist in the local time zone", input))
}

pub fn add(
    project: &Project,
    output: &Output,
    title: &str,
    category_name: &str,
    priority: Priority,
    due: Option<&str>,
) -> Result<()> {
    let title = title.trim();
    if title.is_empty() {
        anyhow::bail!("Task title must not be empty");
    }
    if category_name.trim().is_empty() {
        anyhow::bail!("Category name must not be empty");
    }

    let (category, created) = project.category_store().ensure(category_name)?;
    if created {
        tracing::debug!(category = %category.name, id = %category.category_id, "created category");
    }

    let now = Local::now();
    let due_date_time = match due {
        Some(due) => parse_due(due)?,
        None => now + Duration::days(1),
    };

    let task = Task::with_dates(
        title,
        category.category_id.clone(),
        priority,
        now,
        due_date_time,
    );
    project.task_store().append(&task)?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "id": task.id.to_string(),
            "title": task.title,
            "priority": task.priority,
            "category": category.name,
            "due_date_time": task.due_date_time,
        }));
    } else {
        output.success(&format!(
            "Created task: {} - {} (in {})",
            task.id, task.title, category.name
        ));
    }

    Ok(())
}

pub fn complete(project: &Project, output: &Output, id_str: &str) -> Result<()> {
    set_completed(project, output, id_str, true)
}

pub fn reopen(project: &Project, output: &Output, id_str: &str) -> Result<()> {
    set_completed(project, output, id_str, false)
}

fn set_completed(project: &Project, output: &Output, id_str: &str, completed: bool) -> Result<()> {
    let store = project.task_store();
    let id: TaskId = id_str.parse()?;

    let mut task = store
        .get(&id)?
        .ok_or_else(|| anyhow::anyhow!("Task not found: {}", id))?;

    let verb = if completed { "Completed" } else { "Reopened" };

    if task.completed == completed {
        let state = if completed { "completed" } else { "active" };
        output.success(&format!("Task {} is already {}", task.id, state));
        return Ok(());
    }

    if completed {
        task.complete();
    } else {
        task.reopen();
    }
    store.update(&task)?;
    tracing::debug!(id = %task.id, completed, "updated task");

    if output.is_json() {
        output.data(&serde_json::json!({
            "id": task.id.to_string(),
            "completed": task.completed,
            "completion_date": task.completion_date,
        }));
    } else {
        output.success(&format!("{} task: {} - {}", verb, task.id, task.title));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parse_due_with_time() {
        let due = parse_due("2026-11-01 17:30").unwrap();

        assert_eq!((due.year(), due.month(), due.day()), (2026, 11, 1));
        assert_eq!((due.hour(), due.minute()), (17, 30));
    }

    #[test]
    fn parse_due_date_only_is_end_of_day() {
        let due = parse_due(" 2026-11-01 ").unwrap();

        assert_eq!(due.day(), 1);
        assert_eq!((due.hour(), due.minute()), (23, 59));
    }

    #[test]
    fn parse_due_rejects_garbage() {
        assert!(parse_due("tomorrow").is_err());
        assert!(parse_due("2026-13-01").is_err());
    }
}
