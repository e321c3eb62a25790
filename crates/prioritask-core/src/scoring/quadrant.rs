//! Eisenhower matrix classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Both axes must be strictly above this to count as high.
pub const QUADRANT_THRESHOLD: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    /// Important and urgent
    Do,
    /// Important, not urgent
    Schedule,
    /// Urgent, not important
    Delegate,
    /// Neither
    Eliminate,
}

impl Quadrant {
    pub fn classify(importance: u8, urgency: u8) -> Self {
        let important = importance > QUADRANT_THRESHOLD;
        let urgent = urgency > QUADRANT_THRESHOLD;
        match (important, urgent) {
            (true, true) => Quadrant::Do,
            (true, false) => Quadrant::Schedule,
            (false, true) => Quadrant::Delegate,
            (false, false) => Quadrant::Eliminate,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Quadrant::Do => "Do",
            Quadrant::Schedule => "Schedule",
            Quadrant::Delegate => "Delegate",
            Quadrant::Eliminate => "Eliminate",
        }
    }

    /// One-line advice shown next to the label.
    pub fn advice(&self) -> &'static str {
        match self {
            Quadrant::Do => "do it now",
            Quadrant::Schedule => "plan a time for it",
            Quadrant::Delegate => "hand it off if you can",
            Quadrant::Eliminate => "consider dropping it",
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
