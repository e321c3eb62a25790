//! Priority scoring engine.
//!
//! Derives difficulty, urgency and priority from raw task attributes and
//! classifies tasks into Eisenhower quadrants. Only difficulty is stored on
//! the task; urgency and priority are recomputed against `now` every time
//! they are needed, so every caller goes through [`ScoringEngine`].
//!
//! ## Configuration
//!
//! | Key | Default | Meaning |
//! |-----|---------|---------|
//! | `scale_factor` | 1.4 | Pessimism buffer applied to estimates |
//! | `difficulty_thresholds` | 10 steps, 10..=480 | Scaled minutes per difficulty |
//! | `urgency_mode` | `deadline` | `deadline` or `blended` |
//! | `deadline_weight` | 0.6 | Share of the deadline band in blended mode |
//! | `formula` | `baseline` | `baseline` or `weighted` |

pub mod difficulty;
pub mod priority;
pub mod quadrant;
pub mod urgency;

pub use difficulty::{DifficultyScale, OutOfRange, DEFAULT_SCALE_FACTOR, DEFAULT_THRESHOLDS, DIFFICULTY_LEVELS};
pub use priority::{PriorityFormula, PriorityInputs};
pub use quadrant::{Quadrant, QUADRANT_THRESHOLD};
pub use urgency::{UrgencyMode, MAX_URGENCY, MIN_URGENCY};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::task::{Task, TimeEstimate};

/// Tunable scoring parameters, stored in the `[scoring]` config section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default = "default_scale_factor")]
    pub scale_factor: f64,
    #[serde(default = "default_thresholds")]
    pub difficulty_thresholds: Vec<u32>,
    #[serde(default)]
    pub urgency_mode: UrgencyMode,
    #[serde(default = "default_deadline_weight")]
    pub deadline_weight: f64,
    #[serde(default)]
    pub formula: PriorityFormula,
}

fn default_scale_factor() -> f64 {
    DEFAULT_SCALE_FACTOR
}
fn default_thresholds() -> Vec<u32> {
    DEFAULT_THRESHOLDS.to_vec()
}
fn default_deadline_weight() -> f64 {
    0.6
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            scale_factor: default_scale_factor(),
            difficulty_thresholds: default_thresholds(),
            urgency_mode: UrgencyMode::default(),
            deadline_weight: default_deadline_weight(),
            formula: PriorityFormula::default(),
        }
    }
}

/// Validated scoring parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringEngine {
    scale: DifficultyScale,
    urgency_mode: UrgencyMode,
    deadline_weight: f64,
    formula: PriorityFormula,
}

impl ScoringEngine {
    /// Validate a config into an engine.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a non-positive scale factor,
    /// a threshold table that is not ten strictly increasing values, or a
    /// deadline weight outside `[0, 1]`.
    pub fn new(config: &ScoringConfig) -> Result<Self, ConfigError> {
        let thresholds: [u32; DIFFICULTY_LEVELS] = config
            .difficulty_thresholds
            .as_slice()
            .try_into()
            .map_err(|_| ConfigError::InvalidValue {
                key: "scoring.difficulty_thresholds".into(),
                message: format!(
                    "expected {DIFFICULTY_LEVELS} thresholds, got {}",
                    config.difficulty_thresholds.len()
                ),
            })?;

        if !config.scale_factor.is_finite() || config.scale_factor <= 0.0 {
            return Err(ConfigError::InvalidValue {
                key: "scoring.scale_factor".into(),
                message: format!("must be a positive number, got {}", config.scale_factor),
            });
        }

        let scale = DifficultyScale::new(config.scale_factor, thresholds).ok_or_else(|| {
            ConfigError::InvalidValue {
                key: "scoring.difficulty_thresholds".into(),
                message: "thresholds must be strictly increasing".into(),
            }
        })?;

        if !(0.0..=1.0).contains(&config.deadline_weight) {
            return Err(ConfigError::InvalidValue {
                key: "scoring.deadline_weight".into(),
                message: format!("must be between 0 and 1, got {}", config.deadline_weight),
            });
        }

        Ok(Self {
            scale,
            urgency_mode: config.urgency_mode,
            deadline_weight: config.deadline_weight,
            formula: config.formula,
        })
    }

    pub fn scale(&self) -> &DifficultyScale {
        &self.scale
    }

    pub fn formula(&self) -> PriorityFormula {
        self.formula
    }

    pub fn urgency_mode(&self) -> UrgencyMode {
        self.urgency_mode
    }

    pub fn difficulty(&self, estimate: TimeEstimate) -> Result<u8, OutOfRange> {
        self.scale.difficulty(estimate)
    }

    pub fn urgency(&self, task: &Task, now: DateTime<Utc>) -> u8 {
        urgency::urgency(
            task.due_date,
            task.time_estimate,
            now,
            self.urgency_mode,
            self.deadline_weight,
        )
    }

    pub fn priority(&self, task: &Task, now: DateTime<Utc>) -> f64 {
        self.priority_with_urgency(task, self.urgency(task, now), now)
    }

    /// Priority when urgency has already been derived for the same `now`.
    pub fn priority_with_urgency(&self, task: &Task, urgency: u8, now: DateTime<Utc>) -> f64 {
        let inputs = PriorityInputs {
            difficulty: task.difficulty,
            urgency,
            importance: task.importance,
            days_until_due: task
                .due_date
                .map(|due| urgency::hours_until(due, now) / 24.0),
            estimate_hours: task.time_estimate.as_hours(),
        };
        self.formula.score(&inputs)
    }

    pub fn classify(&self, task: &Task, now: DateTime<Utc>) -> Quadrant {
        Quadrant::classify(task.importance, self.urgency(task, now))
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self {
            scale: DifficultyScale::default(),
            urgency_mode: UrgencyMode::default(),
            deadline_weight: default_deadline_weight(),
            formula: PriorityFormula::default(),
        }
    }
}
