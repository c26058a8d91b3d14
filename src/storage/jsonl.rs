//! JSONL storage for tasks and categories
//!
//! Tasks live in `.taskcore/tasks.jsonl` and categories in
//! `.taskcore/categories.jsonl`, one JSON object per line. File order is
//! listing order. Uses file locking for concurrent access safety.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::{Category, CategoryId, Task, TaskId};

/// Reads every record from a JSONL file, in file order
fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file =
        File::open(path).with_context(|| format!("Failed to open store: {}", path.display()))?;

    // Acquire shared lock for reading
    file.lock_shared()
        .with_context(|| format!("Failed to acquire read lock on {}", path.display()))?;

    let reader = BufReader::new(&file);
    let mut records = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {}", line_num + 1))?;

        if line.trim().is_empty() {
            continue;
        }

        let record: T = serde_json::from_str(&line).with_context(|| {
            format!("Failed to parse {} at line {}", path.display(), line_num + 1)
        })?;
        records.push(record);
    }

    // Lock is released when file is dropped
    Ok(records)
}

/// Replaces the file contents atomically (temp file + rename)
fn write_records<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let temp_path = path.with_extension("jsonl.tmp");

    {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

        file.lock_exclusive()
            .with_context(|| format!("Failed to acquire write lock on {}", temp_path.display()))?;

        let mut writer = BufWriter::new(&file);
        for record in records {
            let line = serde_json::to_string(record).context("Failed to serialize record")?;
            writeln!(writer, "{}", line).context("Failed to write record")?;
        }
        writer.flush().context("Failed to flush store")?;
    }

    fs::rename(&temp_path, path).with_context(|| {
        format!(
            "Failed to rename {} to {}",
            temp_path.display(),
            path.display()
        )
    })?;

    Ok(())
}

/// Appends a single record without rewriting the file
fn append_record<T: Serialize>(path: &Path, record: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open store: {}", path.display()))?;

    file.lock_exclusive()
        .with_context(|| format!("Failed to acquire write lock on {}", path.display()))?;

    let mut writer = BufWriter::new(&file);
    let line = serde_json::to_string(record).context("Failed to serialize record")?;
    writeln!(writer, "{}", line).context("Failed to write record")?;
    writer.flush().context("Failed to flush store")?;

    Ok(())
}

/// Store for task data in JSONL format
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    /// Creates a new task store at the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates the default store for a project
    pub fn for_project(project_root: &Path) -> Self {
        Self::new(project_root.join(".taskcore").join("tasks.jsonl"))
    }

    /// Returns the path to the store file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads all tasks in file order
    pub fn read_all(&self) -> Result<Vec<Task>> {
        read_records(&self.path)
    }

    /// Reads all tasks split into (active, completed), each in file order
    pub fn read_partitioned(&self) -> Result<(Vec<Task>, Vec<Task>)> {
        let (completed, active): (Vec<Task>, Vec<Task>) =
            self.read_all()?.into_iter().partition(|t| t.completed);
        Ok((active, completed))
    }

    /// Finds a task by ID
    pub fn get(&self, id: &TaskId) -> Result<Option<Task>> {
        Ok(self.read_all()?.into_iter().find(|t| &t.id == id))
    }

    /// Appends a single task
    pub fn append(&self, task: &Task) -> Result<()> {
        append_record(&self.path, task)
    }

    /// Writes all tasks to the store (full rewrite)
    pub fn write_all(&self, tasks: &[Task]) -> Result<()> {
        write_records(&self.path, tasks)
    }

    /// Replaces a task in place, keeping its position; returns false if absent
    pub fn update(&self, task: &Task) -> Result<bool> {
        let mut tasks = self.read_all()?;
        match tasks.iter_mut().find(|t| t.id == task.id) {
            Some(slot) => {
                *slot = task.clone();
                self.write_all(&tasks)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Store for categories in JSONL format
pub struct CategoryStore {
    path: PathBuf,
}

impl CategoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates the default store for a project
    pub fn for_project(project_root: &Path) -> Self {
        Self::new(project_root.join(".taskcore").join("categories.jsonl"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads all categories in file order
    pub fn read_all(&self) -> Result<Vec<Category>> {
        read_records(&self.path)
    }

    /// Finds a category by ID
    pub fn get(&self, id: &CategoryId) -> Result<Option<Category>> {
        Ok(self.read_all()?.into_iter().find(|c| &c.category_id == id))
    }

    /// Adds a category by name unless one with the same ID exists
    ///
    /// Returns the stored category and whether it was newly created.
    pub fn ensure(&self, name: &str) -> Result<(Category, bool)> {
        let category = Category::new(name);
        if let Some(existing) = self.get(&category.category_id)? {
            return Ok((existing, false));
        }

        append_record(&self.path, &category)?;
        Ok((category, true))
    }
}
