//! Time estimates in `HH:MM` form.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// A strictly positive duration in whole minutes, stored as hours and minutes.
///
/// Serialized as `HH:MM` text, the same form users type it in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeEstimate {
    hours: u32,
    minutes: u32,
}

impl TimeEstimate {
    /// Build an estimate from its components. Minutes must be below 60.
    pub fn new(hours: u32, minutes: u32) -> Result<Self, ValidationError> {
        let input = format!("{hours:02}:{minutes:02}");
        if minutes >= 60 {
            return Err(ValidationError::InvalidEstimate {
                input,
                message: "minutes must be between 0 and 59".into(),
            });
        }
        if hours == 0 && minutes == 0 {
            return Err(ValidationError::InvalidEstimate {
                input,
                message: "estimate must be greater than zero".into(),
            });
        }
        if hours.checked_mul(60).and_then(|m| m.checked_add(minutes)).is_none() {
            return Err(ValidationError::InvalidEstimate {
                input,
                message: "estimate is too large".into(),
            });
        }
        Ok(Self { hours, minutes })
    }

    /// Build an estimate from a total number of minutes.
    pub fn from_minutes(total: u32) -> Result<Self, ValidationError> {
        Self::new(total / 60, total % 60)
    }

    /// Parse `HH:MM`. Both components are required.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let invalid = |message: &str| ValidationError::InvalidEstimate {
            input: text.to_string(),
            message: message.to_string(),
        };

        let (hours, minutes) = text
            .trim()
            .split_once(':')
            .ok_or_else(|| invalid("expected HH:MM"))?;
        let hours: u32 = hours
            .trim()
            .parse()
            .map_err(|_| invalid("hours must be a whole number"))?;
        let minutes: u32 = minutes
            .trim()
            .parse()
            .map_err(|_| invalid("minutes must be a whole number"))?;

        Self::new(hours, minutes).map_err(|err| match err {
            ValidationError::InvalidEstimate { message, .. } => invalid(&message),
            other => other,
        })
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Cannot overflow: `new` refuses estimates past `u32::MAX` minutes.
    pub fn total_minutes(&self) -> u32 {
        self.hours * 60 + self.minutes
    }

    /// Fractional hours, e.g. `01:30` is 1.5.
    pub fn as_hours(&self) -> f64 {
        f64::from(self.total_minutes()) / 60.0
    }
}

impl fmt::Display for TimeEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

impl FromStr for TimeEstimate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for TimeEstimate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeEstimate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}
