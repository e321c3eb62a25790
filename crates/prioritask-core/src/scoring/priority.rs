//! Priority formulas.
//!
//! Priority has no absolute meaning; it only orders tasks. Both formulas
//! fall as difficulty rises and climb with urgency and importance when the
//! other inputs are held fixed.
//!
//! - `baseline`: `(11 - difficulty) + urgency + importance`
//! - `weighted`: `(11 - difficulty) + 2·urgency + 2·importance + proximity + size`
//!   where `proximity = clamp(10 - days_until_due, 0, 10)` (0 without a due
//!   date) and `size = min(estimate_hours, 5)`.

use serde::{Deserialize, Serialize};
use std::fmt;

const WEIGHTED_URGENCY: f64 = 2.0;
const WEIGHTED_IMPORTANCE: f64 = 2.0;
const WEIGHTED_EASE: f64 = 1.0;
const PROXIMITY_CAP: f64 = 10.0;
const SIZE_CAP_HOURS: f64 = 5.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityFormula {
    /// Rewards easy, urgent, important work equally
    #[default]
    Baseline,
    /// Leans on urgency and importance, with deadline and size bonuses
    Weighted,
}

/// Everything a formula may look at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriorityInputs {
    pub difficulty: u8,
    pub urgency: u8,
    pub importance: u8,
    /// Fractional days until due; negative when overdue
    pub days_until_due: Option<f64>,
    pub estimate_hours: f64,
}

impl PriorityFormula {
    pub fn score(&self, inputs: &PriorityInputs) -> f64 {
        let ease = 11.0 - f64::from(inputs.difficulty);
        let urgency = f64::from(inputs.urgency);
        let importance = f64::from(inputs.importance);

        match self {
            PriorityFormula::Baseline => ease + urgency + importance,
            PriorityFormula::Weighted => {
                let proximity = inputs
                    .days_until_due
                    .map(|days| (PROXIMITY_CAP - days).clamp(0.0, PROXIMITY_CAP))
                    .unwrap_or(0.0);
                let size = inputs.estimate_hours.clamp(0.0, SIZE_CAP_HOURS);
                WEIGHTED_EASE * ease
                    + WEIGHTED_URGENCY * urgency
                    + WEIGHTED_IMPORTANCE * importance
                    + proximity
                    + size
            }
        }
    }
}

impl fmt::Display for PriorityFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PriorityFormula::Baseline => "baseline",
            PriorityFormula::Weighted => "weighted",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(difficulty: u8, urgency: u8, importance: u8) -> PriorityInputs {
        PriorityInputs {
            difficulty,
            urgency,
            importance,
            days_until_due: None,
            estimate_hours: 1.0,
        }
    }

    #[test]
    fn baseline_formula() {
        assert_eq!(PriorityFormula::Baseline.score(&inputs(1, 10, 10)), 30.0);
        assert_eq!(PriorityFormula::Baseline.score(&inputs(10, 1, 1)), 3.0);
        assert_eq!(PriorityFormula::Baseline.score(&inputs(4, 6, 8)), 21.0);
    }

    #[test]
    fn weighted_formula_bonuses() {
        let mut due_soon = inputs(4, 6, 8);
        due_soon.days_until_due = Some(2.0);
        due_soon.estimate_hours = 8.0;
        // 7 + 12 + 16 + 8 + 5
        assert_eq!(PriorityFormula::Weighted.score(&due_soon), 48.0);

        let mut overdue = due_soon;
        overdue.days_until_due = Some(-3.0);
        assert_eq!(PriorityFormula::Weighted.score(&overdue), 50.0);

        let mut far = due_soon;
        far.days_until_due = Some(40.0);
        assert_eq!(PriorityFormula::Weighted.score(&far), 40.0);
    }

    #[test]
    fn both_formulas_are_monotonic() {
        for formula in [PriorityFormula::Baseline, PriorityFormula::Weighted] {
            assert!(formula.score(&inputs(3, 5, 5)) > formula.score(&inputs(4, 5, 5)));
            assert!(formula.score(&inputs(3, 6, 5)) > formula.score(&inputs(3, 5, 5)));
            assert!(formula.score(&inputs(3, 5, 6)) > formula.score(&inputs(3, 5, 5)));
        }
    }

    #[test]
    fn formula_names_round_trip() {
        assert_eq!(serde_json::to_string(&PriorityFormula::Weighted).unwrap(), "\"weighted\"");
        let parsed: PriorityFormula = serde_json::from_str("\"baseline\"").unwrap();
        assert_eq!(parsed, PriorityFormula::Baseline);
    }
}
