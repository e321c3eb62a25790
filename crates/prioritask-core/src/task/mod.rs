//! Task model and creation from user input.
//!
//! A task stores only what the user supplied plus a difficulty snapshot
//! taken when its estimate was set. Urgency and priority are derived on
//! demand by the scoring engine.

pub mod due_date;
pub mod estimate;
pub mod list;

pub use due_date::parse_due_date;
pub use estimate::TimeEstimate;
pub use list::{SubtaskSpec, TaskList};

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::scoring::ScoringEngine;

pub const MIN_IMPORTANCE: u8 = 1;
pub const MAX_IMPORTANCE: u8 = 10;

/// A single task, persisted as one JSON record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub name: String,
    /// Snapshot of the difficulty mapping at the time the estimate was set
    pub difficulty: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    pub importance: u8,
    pub time_estimate: TimeEstimate,
}

impl Task {
    /// Build a task, deriving difficulty from the estimate.
    ///
    /// # Errors
    ///
    /// Fails on a blank name, importance outside 1..=10, or an estimate the
    /// difficulty table cannot represent.
    pub fn new(
        name: &str,
        time_estimate: TimeEstimate,
        due_date: Option<DateTime<Utc>>,
        importance: u8,
        engine: &ScoringEngine,
    ) -> Result<Self, ValidationError> {
        let name = validate_name(name)?;
        if !(MIN_IMPORTANCE..=MAX_IMPORTANCE).contains(&importance) {
            return Err(ValidationError::InvalidImportance {
                input: importance.to_string(),
            });
        }
        let difficulty = engine.difficulty(time_estimate)?;
        Ok(Self {
            name,
            difficulty,
            due_date,
            importance,
            time_estimate,
        })
    }

    /// Due at or before `now`.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.due_date.is_some_and(|due| due <= now)
    }
}

pub(crate) fn validate_name(name: &str) -> Result<String, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(name.to_string())
}

/// Parse importance text as an integer in 1..=10.
pub fn parse_importance(text: &str) -> Result<u8, ValidationError> {
    let invalid = || ValidationError::InvalidImportance {
        input: text.to_string(),
    };
    let value: u8 = text.trim().parse().map_err(|_| invalid())?;
    if !(MIN_IMPORTANCE..=MAX_IMPORTANCE).contains(&value) {
        return Err(invalid());
    }
    Ok(value)
}

/// Create a task from raw text fields, as a prompt loop or CLI collects them.
///
/// A due date that does not parse is reported with a warning and dropped;
/// the task is still created, with no deadline.
pub fn create_task<Tz: TimeZone>(
    name: &str,
    estimate_text: &str,
    due_text: Option<&str>,
    importance_text: &str,
    now: &DateTime<Tz>,
    engine: &ScoringEngine,
) -> Result<Task, ValidationError> {
    let estimate = TimeEstimate::parse(estimate_text)?;
    let importance = parse_importance(importance_text)?;

    let due_date = match due_text.map(str::trim).filter(|text| !text.is_empty()) {
        Some(text) => match parse_due_date(text, now) {
            Ok(due) => Some(due),
            Err(err) => {
                tracing::warn!(error = %err, "ignoring due date");
                None
            }
        },
        None => None,
    };

    Task::new(name, estimate, due_date, importance, engine)
}
