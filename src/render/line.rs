//! Formatting of individual task lines

use std::fmt::Write as _;

use chrono::{DateTime, Local};

use super::color::PriorityColorChooser;
use super::sink::{ColorGuard, OutputSink};
use super::RenderError;
use crate::domain::{has_priority_color, Task};

/// Long date/time pattern, e.g. `Thursday, October 1, 2026 9:00:00 AM`
pub const DEFAULT_DATE_FORMAT: &str = "%A, %B %-d, %Y %-I:%M:%S %p";

/// Writes one task per line to a sink
///
/// Active lines look like
/// `[ ] 0. "Buy milk" P2 in Groceries`, with the checkbox and priority tag
/// in the priority color. Completed lines look like
/// `- [X] "Pay rent" P1 in Bills` and are never colored.
#[derive(Debug, Clone)]
pub struct TaskLineFormatter {
    date_format: String,
}

impl Default for TaskLineFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_FORMAT)
    }
}

impl TaskLineFormatter {
    pub fn new(date_format: impl Into<String>) -> Self {
        Self {
            date_format: date_format.into(),
        }
    }

    /// Formats a timestamp with the configured long date/time pattern
    pub fn full_date(&self, ts: &DateTime<Local>) -> Result<String, RenderError> {
        let mut out = String::new();
        write!(out, "{}", ts.format(&self.date_format))
            .map_err(|_| RenderError::InvalidDateFormat(self.date_format.clone()))?;
        Ok(out)
    }

    /// Writes an active task line; `index` is the position in the filtered list
    pub fn write_active<S: OutputSink + ?Sized>(
        &self,
        sink: &mut S,
        task: &Task,
        index: usize,
        category_name: &str,
        colors: &dyn PriorityColorChooser,
        verbose: bool,
    ) -> Result<(), RenderError> {
        let color = if has_priority_color(task.priority) {
            Some(colors.color_for(task.priority)?)
        } else {
            None
        };

        // Timestamps are formatted up front so a bad pattern fails before
        // anything of this line is written.
        let details = if verbose {
            Some(format!(
                " - Created on {}. - Due Date on {}",
                self.full_date(&task.creation_date)?,
                self.full_date(&task.due_date_time)?
            ))
        } else {
            None
        };

        let checkbox = if task.completed { "[X]" } else { "[ ]" };
        let mut guard = ColorGuard::maybe(&mut *sink, color)?;
        guard.write_text(checkbox)?;
        guard.finish()?;

        sink.write_text(" ")?;
        sink.write_text(&format!("{}. \"{}\"", index, task.title))?;
        sink.write_text(" ")?;

        let mut guard = ColorGuard::maybe(&mut *sink, color)?;
        guard.write_text(&format!("P{}", task.priority))?;
        guard.finish()?;

        sink.write_text(" ")?;
        sink.write_text(&format!("in {}", category_name))?;
        if let Some(details) = details {
            sink.write_text(&details)?;
        }
        sink.write_text("\n")?;
        Ok(())
    }

    /// Writes a completed task line
    pub fn write_completed<S: OutputSink + ?Sized>(
        &self,
        sink: &mut S,
        task: &Task,
        category_name: &str,
        verbose: bool,
    ) -> Result<(), RenderError> {
        let mut line = format!(
            "- [X] \"{}\" P{} in {}",
            task.title, task.priority, category_name
        );

        if verbose {
            let completed = match &task.completion_date {
                Some(ts) => self.full_date(ts)?,
                None => String::new(),
            };
            line.push_str(&format!(
                " - Created at {}, completed at {}",
                self.full_date(&task.creation_date)?,
                completed
            ));
        }

        sink.write_line(&line)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CategoryId, Priority};
    use crate::render::color::{Color, PriorityPalette};
    use crate::render::sink::{Fragment, Recorder};
    use chrono::{Duration, TimeZone};

    fn created() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, 1, 9, 0, 0).unwrap()
    }

    fn make_task(title: &str, category: &str, priority: Priority) -> Task {
        Task::with_dates(
            title,
            CategoryId::from_name(category),
            priority,
            created(),
            created() + Duration::days(1),
        )
    }

    fn text(s: &str) -> Fragment {
        Fragment::Text(s.to_string())
    }

    #[test]
    fn full_date_uses_long_pattern() {
        let formatter = TaskLineFormatter::default();

        assert_eq!(
            formatter.full_date(&created()).unwrap(),
            "Thursday, October 1, 2026 9:00:00 AM"
        );
    }

    #[test]
    fn full_date_rejects_bad_pattern() {
        let formatter = TaskLineFormatter::new("%Q");

        assert!(matches!(
            formatter.full_date(&created()),
            Err(RenderError::InvalidDateFormat(_))
        ));
    }

    #[test]
    fn active_line_plain_text() {
        let mut rec = Recorder::new();
        let task = make_task("Buy milk", "Groceries", 2);

        TaskLineFormatter::default()
            .write_active(&mut rec, &task, 0, "Groceries", &PriorityPalette::default(), false)
            .unwrap();

        assert_eq!(rec.text(), "[ ] 0. \"Buy milk\" P2 in Groceries\n");
    }

    #[test]
    fn active_line_colors_checkbox_and_priority_only() {
        let mut rec = Recorder::new();
        let task = make_task("Buy milk", "Groceries", 2);

        TaskLineFormatter::default()
            .write_active(&mut rec, &task, 3, "Groceries", &PriorityPalette::default(), false)
            .unwrap();

        assert_eq!(
            rec.fragments(),
            &[
                Fragment::Color(Color::Yellow),
                text("[ ]"),
                Fragment::Reset,
                text(" "),
                text("3. \"Buy milk\""),
                text(" "),
                Fragment::Color(Color::Yellow),
                text("P2"),
                Fragment::Reset,
                text(" "),
                text("in Groceries"),
                text("\n"),
            ]
        );
    }

    #[test]
    fn active_line_without_priority_is_uncolored() {
        for priority in [0, 4, 9] {
            let mut rec = Recorder::new();
            let task = make_task("Call plumber", "Home", priority);

            TaskLineFormatter::default()
                .write_active(&mut rec, &task, 1, "Home", &PriorityPalette::default(), false)
                .unwrap();

            assert!(rec
                .fragments()
                .iter()
                .all(|f| matches!(f, Fragment::Text(_))));
            assert_eq!(
                rec.text(),
                format!("[ ] 1. \"Call plumber\" P{} in Home\n", priority)
            );
        }
    }

    #[test]
    fn active_line_shows_completed_flag() {
        let mut rec = Recorder::new();
        let mut task = make_task("Buy milk", "Groceries", 0);
        task.completed = true;

        TaskLineFormatter::default()
            .write_active(&mut rec, &task, 0, "Groceries", &PriorityPalette::default(), false)
            .unwrap();

        assert!(rec.text().starts_with("[X] 0."));
    }

    #[test]
    fn active_line_verbose_appends_dates() {
        let mut rec = Recorder::new();
        let task = make_task("Buy milk", "Groceries", 1);

        TaskLineFormatter::default()
            .write_active(&mut rec, &task, 0, "Groceries", &PriorityPalette::default(), true)
            .unwrap();

        assert_eq!(
            rec.text(),
            "[ ] 0. \"Buy milk\" P1 in Groceries \
             - Created on Thursday, October 1, 2026 9:00:00 AM. \
             - Due Date on Friday, October 2, 2026 9:00:00 AM\n"
        );
    }

    #[test]
    fn completed_line_plain() {
        let mut rec = Recorder::new();
        let mut task = make_task("Pay rent", "Bills", 1);
        task.complete_at(created() + Duration::hours(2));

        TaskLineFormatter::default()
            .write_completed(&mut rec, &task, "Bills", false)
            .unwrap();

        assert_eq!(rec.text(), "- [X] \"Pay rent\" P1 in Bills\n");
        assert_eq!(rec.active_color(), None);
    }

    #[test]
    fn completed_line_verbose() {
        let mut rec = Recorder::new();
        let mut task = make_task("Pay rent", "Bills", 1);
        task.complete_at(Local.with_ymd_and_hms(2026, 10, 3, 18, 30, 0).unwrap());

        TaskLineFormatter::default()
            .write_completed(&mut rec, &task, "Bills", true)
            .unwrap();

        assert_eq!(
            rec.text(),
            "- [X] \"Pay rent\" P1 in Bills - Created at Thursday, October 1, 2026 9:00:00 AM, \
             completed at Saturday, October 3, 2026 6:30:00 PM\n"
        );
    }

    #[test]
    fn completed_line_checkbox_ignores_flag() {
        let mut rec = Recorder::new();
        let task = make_task("Pay rent", "Bills", 1);
        assert!(!task.completed);

        TaskLineFormatter::default()
            .write_completed(&mut rec, &task, "Bills", false)
            .unwrap();

        assert!(rec.text().starts_with("- [X]"));
    }
}
