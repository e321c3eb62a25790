//! Urgency estimation from due date and estimate size.
//!
//! Deadline bands (hours until due, inclusive upper bounds):
//!
//! | hours until due | urgency |
//! |-----------------|---------|
//! | ≤ 0 (overdue)   | 10      |
//! | ≤ 12            | 9       |
//! | ≤ 24            | 8       |
//! | ≤ 48            | 7       |
//! | ≤ 72            | 6       |
//! | ≤ 168 (week)    | 5       |
//! | ≤ 336           | 4       |
//! | ≤ 504           | 3       |
//! | ≤ 672           | 2       |
//! | beyond          | 1       |
//!
//! In blended mode the deadline band is mixed with an estimate band, so a
//! long task due next week reads as more pressing than a short one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::task::TimeEstimate;

pub const MIN_URGENCY: u8 = 1;
pub const MAX_URGENCY: u8 = 10;

const DEADLINE_BANDS: [(f64, u8); 9] = [
    (0.0, 10),
    (12.0, 9),
    (24.0, 8),
    (48.0, 7),
    (72.0, 6),
    (168.0, 5),
    (336.0, 4),
    (504.0, 3),
    (672.0, 2),
];

// Exclusive upper bounds in hours
const ESTIMATE_BANDS: [(f64, u8); 9] = [
    (0.5, 1),
    (1.0, 2),
    (1.5, 3),
    (2.0, 4),
    (3.0, 5),
    (4.0, 6),
    (5.0, 7),
    (7.0, 8),
    (10.0, 9),
];

/// How urgency is derived when a due date is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyMode {
    /// Deadline bands only
    #[default]
    Deadline,
    /// Weighted blend of deadline and estimate bands
    Blended,
}

impl fmt::Display for UrgencyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UrgencyMode::Deadline => "deadline",
            UrgencyMode::Blended => "blended",
        })
    }
}

/// Urgency from hours until due. Non-increasing in `hours_until_due`.
pub fn deadline_urgency(hours_until_due: f64) -> u8 {
    DEADLINE_BANDS
        .iter()
        .find(|(limit, _)| hours_until_due <= *limit)
        .map(|&(_, urgency)| urgency)
        .unwrap_or(MIN_URGENCY)
}

/// Urgency from estimate size alone.
pub fn estimate_urgency(estimate_hours: f64) -> u8 {
    ESTIMATE_BANDS
        .iter()
        .find(|(limit, _)| estimate_hours < *limit)
        .map(|&(_, urgency)| urgency)
        .unwrap_or(MAX_URGENCY)
}

/// `round(w * deadline + (1 - w) * estimate)`, with `w` in `[0, 1]`.
pub fn blend(deadline: u8, estimate: u8, deadline_weight: f64) -> u8 {
    let mixed = deadline_weight * f64::from(deadline) + (1.0 - deadline_weight) * f64::from(estimate);
    (mixed.round() as u8).clamp(MIN_URGENCY, MAX_URGENCY)
}

/// Fractional hours from `now` to `due`. Positive whenever `due > now`.
pub fn hours_until(due: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let delta = due - now;
    match delta.num_nanoseconds() {
        Some(nanos) => nanos as f64 / 3_600_000_000_000.0,
        // Past ~292 years nanoseconds overflow; milliseconds are plenty there
        None => delta.num_milliseconds() as f64 / 3_600_000.0,
    }
}

/// Urgency 1..=10 for a task.
///
/// Without a due date the result is always the baseline, whatever the mode.
/// An overdue task is always at the maximum.
pub fn urgency(
    due: Option<DateTime<Utc>>,
    estimate: TimeEstimate,
    now: DateTime<Utc>,
    mode: UrgencyMode,
    deadline_weight: f64,
) -> u8 {
    let Some(due) = due else {
        return MIN_URGENCY;
    };

    // Same comparison as `Task::is_overdue`
    if due <= now {
        return MAX_URGENCY;
    }

    let by_deadline = deadline_urgency(hours_until(due, now));
    match mode {
        UrgencyMode::Deadline => by_deadline,
        UrgencyMode::Blended => blend(
            by_deadline,
            estimate_urgency(estimate.as_hours()),
            deadline_weight,
        ),
    }
}
