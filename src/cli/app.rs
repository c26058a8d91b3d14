//! Main CLI application structure

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{category, list, logging, task};
use crate::render::ColorMode;
use crate::storage::Project;

#[derive(Parser)]
#[command(name = "taskcore")]
#[command(author, version, about = "Local-first todo list with categories and priorities")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the configured format, else text)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// When to color output (overrides display.color)
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Log debug diagnostics to stderr
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new taskcore project
    Init {
        /// Path to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: String,
    },

    /// Add a task
    ///
    /// Examples:
    ///   taskcore add "Buy milk" --category Groceries --priority 2
    ///   taskcore add "Pay rent" -c Bills -p 1 --due 2026-11-01
    Add {
        /// Task title
        title: String,

        /// Category name (created if it does not exist yet)
        #[arg(long, short = 'c')]
        category: String,

        /// Priority from 1 (highest) to 3; 0 leaves it unset
        #[arg(long, short = 'p', default_value = "0", value_parser = clap::value_parser!(u8).range(0..=3))]
        priority: u8,

        /// Due date: YYYY-MM-DD or "YYYY-MM-DD HH:MM" (defaults to one day from now)
        #[arg(long)]
        due: Option<String>,
    },

    /// Mark a task as completed
    Done {
        /// Task ID
        id: String,
    },

    /// Move a completed task back to the active list
    Reopen {
        /// Task ID
        id: String,
    },

    /// Manage categories
    #[command(subcommand)]
    Category(category::CategoryCommands),

    /// List active and completed tasks
    List(ListArgs),
}

/// Filters and display options for `list`
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Only show tasks in this category
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Only show tasks with this priority (0 = any)
    #[arg(long, short = 'p', default_value = "0")]
    pub priority: u8,

    /// Show creation, due and completion timestamps
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.debug);

    tracing::debug!("taskcore starting");

    match cli.command {
        Commands::Init { path } => {
            let output = Output::new(cli.format.unwrap_or_default());
            tracing::debug!(path = %path, "initializing project");
            let project = Project::init(&path)?;
            output.success(&format!(
                "Initialized taskcore project at {}",
                project.root().display()
            ));
        }
        command => {
            let project = Project::open_current()?;
            let output = Output::new(cli.format.unwrap_or(project.config().default_format));
            dispatch(command, &project, &output, cli.color)?;
        }
    }

    tracing::debug!("command completed successfully");
    Ok(())
}

/// Runs a command that needs an open project
fn dispatch(
    command: Commands,
    project: &Project,
    output: &Output,
    color: Option<ColorMode>,
) -> Result<()> {
    match command {
        Commands::Init { path } => {
            anyhow::bail!("Project already open; cannot initialize {}", path)
        }
        Commands::Add {
            title,
            category,
            priority,
            due,
        } => task::add(project, output, &title, &category, priority, due.as_deref()),
        Commands::Done { id } => task::complete(project, output, &id),
        Commands::Reopen { id } => task::reopen(project, output, &id),
        Commands::Category(cmd) => category::run(cmd, project, output),
        Commands::List(args) => list::run(project, output, args, color),
    }
}
