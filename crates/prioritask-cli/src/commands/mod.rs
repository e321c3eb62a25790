pub mod config;
pub mod task;
pub mod workload;

use prioritask_core::{Config, ScoringEngine, TaskList, TaskStore};

/// Loaded configuration, engine and task list for one command.
pub struct Session {
    pub engine: ScoringEngine,
    pub store: TaskStore,
    pub tasks: TaskList,
}

impl Session {
    pub fn open() -> Result<Self, Box<dyn std::error::Error>> {
        let config = Config::load()?;
        let engine = config.engine()?;
        let store = TaskStore::new(config.store_path()?);
        let tasks = store.load();
        tracing::debug!(path = %store.path().display(), tasks = tasks.len(), "session opened");
        Ok(Self {
            engine,
            store,
            tasks,
        })
    }

    /// Write the whole list back. Failure here ends the command.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.store.save(self.tasks.tasks())?;
        Ok(())
    }
}
