//! Category CLI commands

use anyhow::Result;
use clap::Subcommand;

use super::output::Output;
use crate::storage::Project;

#[derive(Subcommand)]
pub enum CategoryCommands {
    /// Add a category (no-op if it already exists)
    Add {
        /// Category name
        name: String,
    },

    /// List categories
    List,
}

pub fn run(cmd: CategoryCommands, project: &Project, output: &Output) -> Result<()> {
    match cmd {
        CategoryCommands::Add { name } => add_category(project, output, &name),
        CategoryCommands::List => list_categories(project, output),
    }
}

fn add_category(project: &Project, output: &Output, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        anyhow::bail!("Category name must not be empty");
    }

    let (category, created) = project.category_store().ensure(name)?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "id": category.category_id.to_string(),
            "name": category.name,
            "created": created,
        }));
    } else if created {
        output.success(&format!(
            "Created category: {} - {}",
            category.category_id, category.name
        ));
    } else {
        output.success(&format!("Category already exists: {}", category.name));
    }

    Ok(())
}

fn list_categories(project: &Project, output: &Output) -> Result<()> {
    let categories = project.category_store().read_all()?;

    if output.is_json() {
        output.data(&categories);
    } else if categories.is_empty() {
        println!("No categories");
    } else {
        for category in &categories {
            output.row(&[&category.category_id.to_string(), &category.name]);
        }
    }

    Ok(())
}
