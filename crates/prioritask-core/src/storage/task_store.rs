//! Flat JSON file holding the task list.
//!
//! Loading never fails: a missing, unreadable or corrupt file yields an empty
//! list and a warning. Saving overwrites the whole file and reports every
//! failure, since losing writes silently is worse than stopping.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::task::{Task, TaskList, MAX_IMPORTANCE, MIN_IMPORTANCE};

#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load tasks, or an empty list when the file is missing or bad.
    pub fn load(&self) -> TaskList {
        match self.try_load() {
            Ok(tasks) => TaskList::from_tasks(tasks),
            Err(StoreError::ReadFailed { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                tracing::debug!(path = %self.path.display(), "no task store yet");
                TaskList::new()
            }
            Err(err) => {
                tracing::warn!(error = %err, "starting with an empty task list");
                TaskList::new()
            }
        }
    }

    /// Load tasks, reporting why the file could not be used.
    pub fn try_load(&self) -> Result<Vec<Task>, StoreError> {
        let content = fs::read_to_string(&self.path).map_err(|source| StoreError::ReadFailed {
            path: self.path.clone(),
            source,
        })?;
        let tasks: Vec<Task> = serde_json::from_str(&content)?;
        for task in &tasks {
            validate_record(task)?;
        }
        Ok(tasks)
    }

    /// Overwrite the file with `tasks`.
    pub fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(tasks)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StoreError::WriteFailed {
                path: self.path.clone(),
                source,
            })?;
        }
        fs::write(&self.path, content).map_err(|source| StoreError::WriteFailed {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), count = tasks.len(), "saved tasks");
        Ok(())
    }
}

fn validate_record(task: &Task) -> Result<(), StoreError> {
    let invalid = |message: String| StoreError::InvalidRecord {
        name: task.name.clone(),
        message,
    };
    if task.name.trim().is_empty() {
        return Err(invalid("empty name".into()));
    }
    if !(1..=10).contains(&task.difficulty) {
        return Err(invalid(format!("difficulty {} outside 1-10", task.difficulty)));
    }
    if !(MIN_IMPORTANCE..=MAX_IMPORTANCE).contains(&task.importance) {
        return Err(invalid(format!("importance {} outside 1-10", task.importance)));
    }
    Ok(())
}
