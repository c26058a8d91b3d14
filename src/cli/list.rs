//! The `list` command

use anyhow::Result;
use chrono::{DateTime, Local};
use serde::Serialize;

use super::app::ListArgs;
use super::output::Output;
use crate::domain::{CategoryNameMap, Priority, Task};
use crate::render::{
    ColorMode, ListOptions, ListRenderer, RenderError, TaskFilter, TaskLineFormatter, TaskList,
    TerminalSink,
};
use crate::storage::Project;

impl From<ListArgs> for ListOptions {
    fn from(args: ListArgs) -> Self {
        Self {
            category_name: args.category,
            priority: args.priority,
            verbose: args.verbose,
        }
    }
}

pub fn run(
    project: &Project,
    output: &Output,
    args: ListArgs,
    color: Option<ColorMode>,
) -> Result<()> {
    let (active, completed) = project.task_store().read_partitioned()?;
    let categories = project.category_store().read_all()?;
    let options = ListOptions::from(args);
    let list = TaskList {
        active: &active,
        completed: &completed,
        categories: &categories,
    };

    if output.is_json() {
        output.data(&JsonListing::build(&options, list)?);
        return Ok(());
    }

    let config = project.config();
    let formatter = TaskLineFormatter::new(config.display.date_format.as_str());
    let renderer = ListRenderer::new(&options, &formatter, &config.colors);
    let mut sink = TerminalSink::stdout(color.unwrap_or(config.display.color));

    renderer.render(&mut sink, list)?;
    Ok(())
}

/// Machine-readable form of a listing
#[derive(Debug, Serialize)]
struct JsonListing {
    active: JsonSection,
    completed: JsonSection,
}

#[derive(Debug, Serialize)]
struct JsonSection {
    /// Unfiltered count
    total: usize,
    tasks: Vec<JsonTask>,
}

#[derive(Debug, Serialize)]
struct JsonTask {
    index: usize,
    id: String,
    title: String,
    priority: Priority,
    category: String,
    completed: bool,
    creation_date: DateTime<Local>,
    due_date_time: DateTime<Local>,
    #[serde(skip_serializing_if = "Option::is_none")]
    completion_date: Option<DateTime<Local>>,
}

impl JsonListing {
    fn build(options: &ListOptions, list: TaskList<'_>) -> Result<Self, RenderError> {
        let names = CategoryNameMap::resolve(list.categories)?;
        let filter = TaskFilter::from_options(options);

        Ok(Self {
            active: JsonSection::build(&filter, &names, list.active)?,
            completed: JsonSection::build(&filter, &names, list.completed)?,
        })
    }
}

impl JsonSection {
    fn build(
        filter: &TaskFilter,
        names: &CategoryNameMap,
        tasks: &[Task],
    ) -> Result<Self, RenderError> {
        let listed = filter
            .apply(tasks)
            .iter()
            .enumerate()
            .map(|(index, task)| {
                let category = names
                    .name(&task.category_id)
                    .ok_or_else(|| RenderError::UnknownCategory(task.category_id.clone()))?;
                Ok(JsonTask {
                    index,
                    id: task.id.to_string(),
                    title: task.title.clone(),
                    priority: task.priority,
                    category: category.to_string(),
                    completed: task.completed,
                    creation_date: task.creation_date,
                    due_date_time: task.due_date_time,
                    completion_date: task.completion_date,
                })
            })
            .collect::<Result<Vec<_>, RenderError>>()?;

        Ok(Self {
            total: tasks.len(),
            tasks: listed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, CategoryId};

    fn make_task(title: &str, category: &str, priority: Priority) -> Task {
        Task::new(title, CategoryId::from_name(category), priority)
    }

    #[test]
    fn json_listing_reports_totals_and_filtered_tasks() {
        let active = vec![
            make_task("Buy milk", "Groceries", 2),
            make_task("Pay rent", "Bills", 1),
        ];
        let mut done = make_task("Pay water", "Bills", 1);
        done.complete();
        let completed = vec![done];
        let categories = vec![Category::new("Groceries"), Category::new("Bills")];
        let options = ListOptions {
            priority: 1,
            ..Default::default()
        };

        let listing = JsonListing::build(
            &options,
            TaskList {
                active: &active,
                completed: &completed,
                categories: &categories,
            },
        )
        .unwrap();
        let json = serde_json::to_value(&listing).unwrap();

        assert_eq!(json["active"]["total"], 2);
        assert_eq!(json["active"]["tasks"].as_array().unwrap().len(), 1);
        assert_eq!(json["active"]["tasks"][0]["title"], "Pay rent");
        assert_eq!(json["active"]["tasks"][0]["index"], 0);
        assert_eq!(json["active"]["tasks"][0]["category"], "Bills");
        assert!(json["active"]["tasks"][0].get("completion_date").is_none());
        assert_eq!(json["completed"]["total"], 1);
        assert!(json["completed"]["tasks"][0]["completion_date"].is_string());
    }

    #[test]
    fn json_listing_fails_on_unknown_category() {
        let active = vec![make_task("Mystery", "Unlisted", 0)];
        let result = JsonListing::build(
            &ListOptions::default(),
            TaskList {
                active: &active,
                completed: &[],
                categories: &[],
            },
        );

        assert!(matches!(result, Err(RenderError::UnknownCategory(_))));
    }

    #[test]
    fn list_args_map_to_options() {
        let options = ListOptions::from(ListArgs {
            category: Some("Work".to_string()),
            priority: 2,
            verbose: true,
        });

        assert_eq!(options.category_filter(), Some("Work"));
        assert_eq!(options.priority_filter(), Some(2));
        assert!(options.verbose);
    }
}
