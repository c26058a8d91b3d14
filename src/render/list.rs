//! Rendering of the full active/completed listing

use super::color::{Color, PriorityColorChooser};
use super::filter::{Filtered, ListOptions, TaskFilter, TaskKind};
use super::line::TaskLineFormatter;
use super::sink::{ColorGuard, OutputSink};
use super::RenderError;
use crate::domain::{Category, CategoryNameMap, Task};

const ACTIVE_HEADER_COLOR: Color = Color::Blue;
const COMPLETED_HEADER_COLOR: Color = Color::Green;
const WARNING_COLOR: Color = Color::Red;

const ACTIVE_SEPARATOR: &str = "--------------------------------";
const COMPLETED_SEPARATOR: &str = "----------------------------------";

/// Everything a listing is rendered from
///
/// `active` and `completed` are the caller's partition of the task list;
/// the renderer does not re-check `Task::completed` to decide the section.
#[derive(Debug, Clone, Copy)]
pub struct TaskList<'a> {
    pub active: &'a [Task],
    pub completed: &'a [Task],
    pub categories: &'a [Category],
}

/// Writes the active section, then the completed section when there are
/// completed tasks at all
///
/// Section headers always report unfiltered counts. When filtering leaves a
/// section empty, a warning naming the active filters replaces its lines.
pub struct ListRenderer<'a> {
    options: &'a ListOptions,
    formatter: &'a TaskLineFormatter,
    colors: &'a dyn PriorityColorChooser,
}

impl<'a> ListRenderer<'a> {
    pub fn new(
        options: &'a ListOptions,
        formatter: &'a TaskLineFormatter,
        colors: &'a dyn PriorityColorChooser,
    ) -> Self {
        Self {
            options,
            formatter,
            colors,
        }
    }

    /// Renders the listing to `sink`
    ///
    /// Fails with [`RenderError::UnknownCategory`] when a task that survives
    /// filtering refers to a category missing from `list.categories`. Lines
    /// written before the failure stay written.
    pub fn render<S: OutputSink + ?Sized>(
        &self,
        sink: &mut S,
        list: TaskList<'_>,
    ) -> Result<(), RenderError> {
        let names = CategoryNameMap::resolve(list.categories)?;
        let filter = TaskFilter::from_options(self.options);

        tracing::debug!(
            active = list.active.len(),
            completed = list.completed.len(),
            categories = names.len(),
            "rendering task list"
        );

        self.write_header(
            sink,
            ACTIVE_HEADER_COLOR,
            &format!("[ ] ACTIVE TASKS - Total #: {}", list.active.len()),
            ACTIVE_SEPARATOR,
        )?;

        let active = filter.apply(list.active);
        if active.is_empty() {
            self.write_warning(sink, TaskKind::Active)?;
        } else {
            self.write_active(sink, &active, &names)?;
        }

        if !list.completed.is_empty() {
            sink.write_text("\n")?;
            self.write_header(
                sink,
                COMPLETED_HEADER_COLOR,
                &format!("[X] COMPLETED TASKS - Total #: {}", list.completed.len()),
                COMPLETED_SEPARATOR,
            )?;

            let completed = filter.apply(list.completed);
            if completed.is_empty() {
                self.write_warning(sink, TaskKind::Completed)?;
            } else {
                self.write_completed(sink, &completed, &names)?;
            }
        }

        sink.flush()?;
        Ok(())
    }

    fn write_header<S: OutputSink + ?Sized>(
        &self,
        sink: &mut S,
        color: Color,
        title: &str,
        separator: &str,
    ) -> Result<(), RenderError> {
        let mut guard = ColorGuard::new(sink, color)?;
        guard.write_line(title)?;
        guard.write_line(separator)?;
        guard.finish()?;
        Ok(())
    }

    fn write_warning<S: OutputSink + ?Sized>(
        &self,
        sink: &mut S,
        kind: TaskKind,
    ) -> Result<(), RenderError> {
        let mut guard = ColorGuard::new(sink, WARNING_COLOR)?;
        guard.write_line(&self.options.empty_warning(kind))?;
        guard.finish()?;
        Ok(())
    }

    fn write_active<S: OutputSink + ?Sized>(
        &self,
        sink: &mut S,
        tasks: &Filtered<'_>,
        names: &CategoryNameMap,
    ) -> Result<(), RenderError> {
        for (index, task) in tasks.iter().enumerate() {
            let category = category_name(names, task)?;
            self.formatter.write_active(
                sink,
                task,
                index,
                category,
                self.colors,
                self.options.verbose,
            )?;
        }
        Ok(())
    }

    fn write_completed<S: OutputSink + ?Sized>(
        &self,
        sink: &mut S,
        tasks: &Filtered<'_>,
        names: &CategoryNameMap,
    ) -> Result<(), RenderError> {
        for task in tasks.iter() {
            let category = category_name(names, task)?;
            self.formatter
                .write_completed(sink, task, category, self.options.verbose)?;
        }
        Ok(())
    }
}

fn category_name<'m>(names: &'m CategoryNameMap, task: &Task) -> Result<&'m str, RenderError> {
    names
        .name(&task.category_id)
        .ok_or_else(|| RenderError::UnknownCategory(task.category_id.clone()))
}
