//! Core error types for prioritask-core.
//!
//! Every fallible operation in the library returns one of the enums below.
//! Validation and index errors are recoverable: the caller reports them and
//! asks again. Store write failures are the only errors a shell should treat
//! as fatal.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for prioritask-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Invalid user input
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Task selection outside the collection
    #[error("{0}")]
    Index(#[from] IndexError),

    /// Task store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Input validation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Task name is blank
    #[error("Task name must not be empty")]
    EmptyName,

    /// Time estimate is not `HH:MM` or is zero
    #[error("Invalid time estimate '{input}': {message}")]
    InvalidEstimate { input: String, message: String },

    /// Importance is not an integer in 1..=10
    #[error("Invalid importance '{input}': expected an integer from 1 to 10")]
    InvalidImportance { input: String },

    /// Due date is not `MM DD HH [YYYY]` or names an impossible time
    #[error("Invalid due date '{input}': {message}")]
    InvalidDueDate { input: String, message: String },

    /// Scaled estimate is beyond the largest difficulty threshold
    #[error(
        "Estimate too long ({scaled_minutes:.0} scaled minutes, limit {limit}); split it into smaller tasks"
    )]
    TooLong { scaled_minutes: f64, limit: u32 },

    /// Split requested with no subtasks
    #[error("A split needs at least one subtask")]
    EmptySplit,
}

/// Task selection errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// Position is 1-based, as shown to the user
    #[error("No task at position {position} (there are {len} tasks)")]
    OutOfRange { position: usize, len: usize },
}

/// Task store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to read the store file
    #[error("Failed to read task store at {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the store file
    #[error("Failed to write task store at {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Store contents are not valid task JSON
    #[error("Corrupt task store: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// A stored record breaks a task invariant
    #[error("Invalid task record '{name}': {message}")]
    InvalidRecord { name: String, message: String },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Data directory could not be prepared
    #[error("Cannot prepare data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
