//! Duration to difficulty mapping.
//!
//! Self-reported estimates run short, so the raw minutes are first scaled by
//! a pessimism factor and then looked up in a ten-step threshold table:
//!
//! | scaled minutes | difficulty |
//! |----------------|------------|
//! | ≤ 10           | 1          |
//! | ≤ 20           | 2          |
//! | ≤ 30           | 3          |
//! | ≤ 60           | 4          |
//! | ≤ 90           | 5          |
//! | ≤ 120          | 6          |
//! | ≤ 180          | 7          |
//! | ≤ 240          | 8          |
//! | ≤ 360          | 9          |
//! | ≤ 480          | 10         |
//! | > 480          | out of range, split the task |

use crate::error::ValidationError;
use crate::task::TimeEstimate;

pub const DIFFICULTY_LEVELS: usize = 10;
pub const DEFAULT_SCALE_FACTOR: f64 = 1.4;
pub const DEFAULT_THRESHOLDS: [u32; DIFFICULTY_LEVELS] = [10, 20, 30, 60, 90, 120, 180, 240, 360, 480];

/// The scaled estimate is past the last threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutOfRange {
    pub scaled_minutes: f64,
    pub limit: u32,
}

impl From<OutOfRange> for ValidationError {
    fn from(err: OutOfRange) -> Self {
        ValidationError::TooLong {
            scaled_minutes: err.scaled_minutes,
            limit: err.limit,
        }
    }
}

/// Scale factor plus a strictly increasing threshold table.
#[derive(Debug, Clone, PartialEq)]
pub struct DifficultyScale {
    scale_factor: f64,
    thresholds: [u32; DIFFICULTY_LEVELS],
}

impl DifficultyScale {
    /// Returns `None` unless the factor is finite and positive and the
    /// thresholds strictly increase.
    pub fn new(scale_factor: f64, thresholds: [u32; DIFFICULTY_LEVELS]) -> Option<Self> {
        if !scale_factor.is_finite() || scale_factor <= 0.0 {
            return None;
        }
        if !thresholds.windows(2).all(|pair| pair[0] < pair[1]) {
            return None;
        }
        Some(Self {
            scale_factor,
            thresholds,
        })
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Largest scaled value that still maps to a difficulty.
    pub fn limit(&self) -> u32 {
        self.thresholds[DIFFICULTY_LEVELS - 1]
    }

    pub fn scaled_minutes(&self, estimate: TimeEstimate) -> f64 {
        f64::from(estimate.total_minutes()) * self.scale_factor
    }

    /// Difficulty 1..=10 for the estimate. Ties go to the lower bucket.
    pub fn difficulty(&self, estimate: TimeEstimate) -> Result<u8, OutOfRange> {
        let scaled = self.scaled_minutes(estimate);
        self.thresholds
            .iter()
            .position(|&threshold| scaled <= f64::from(threshold))
            .map(|index| index as u8 + 1)
            .ok_or(OutOfRange {
                scaled_minutes: scaled,
                limit: self.limit(),
            })
    }
}

impl Default for DifficultyScale {
    fn default() -> Self {
        Self {
            scale_factor: DEFAULT_SCALE_FACTOR,
            thresholds: DEFAULT_THRESHOLDS,
        }
    }
}
