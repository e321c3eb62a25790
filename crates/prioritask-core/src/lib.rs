//! # Prioritask Core Library
//!
//! This library provides the core logic for the Prioritask task prioritizer.
//! Tasks carry a time estimate, an optional due date and a 1-10 importance;
//! everything else is derived. All operations are plain data-in/data-out so
//! the CLI binary stays a thin layer over the same library.
//!
//! ## Architecture
//!
//! - **Scoring**: difficulty from estimate, urgency from due date, priority
//!   from both plus importance, and Eisenhower quadrant classification
//! - **Tasks**: the task model, text parsing and the owned [`TaskList`]
//! - **Workload**: a seven-day projection of estimated hours
//! - **Storage**: JSON task store and TOML-based configuration
//!
//! ## Key Components
//!
//! - [`ScoringEngine`]: single source of truth for derived scores
//! - [`TaskList`]: add, delete, split, update and priority-ordered views
//! - [`TaskStore`]: task persistence
//! - [`Config`]: application configuration management

pub mod error;
pub mod scoring;
pub mod storage;
pub mod task;
pub mod view;
pub mod workload;

pub use error::{ConfigError, CoreError, IndexError, StoreError, ValidationError};
pub use scoring::{PriorityFormula, Quadrant, ScoringConfig, ScoringEngine, UrgencyMode};
pub use storage::{Config, TaskStore};
pub use task::{create_task, parse_due_date, SubtaskSpec, Task, TaskList, TimeEstimate};
pub use view::{render, RankedTask};
pub use workload::{daily_workload, project_week, WorkloadDay, PROJECTION_DAYS};
