//! Due date input parsing.
//!
//! Users type due dates as `MM DD HH [YYYY]`: month, day, hour of day and an
//! optional year. The year defaults to the year of `now`. The text is read as
//! wall-clock time in the time zone of `now` and stored as a UTC instant.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};

use crate::error::ValidationError;

pub fn parse_due_date<Tz: TimeZone>(
    text: &str,
    now: &DateTime<Tz>,
) -> Result<DateTime<Utc>, ValidationError> {
    let invalid = |message: &str| ValidationError::InvalidDueDate {
        input: text.to_string(),
        message: message.to_string(),
    };

    let parts: Vec<&str> = text.split_whitespace().collect();
    if !(3..=4).contains(&parts.len()) {
        return Err(invalid("expected MM DD HH [YYYY]"));
    }

    let month: u32 = parts[0].parse().map_err(|_| invalid("month must be a number"))?;
    let day: u32 = parts[1].parse().map_err(|_| invalid("day must be a number"))?;
    let hour: u32 = parts[2].parse().map_err(|_| invalid("hour must be a number"))?;
    let year: i32 = match parts.get(3) {
        Some(year) => year.parse().map_err(|_| invalid("year must be a number"))?,
        None => now.year(),
    };

    let naive = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| invalid("no such calendar date"))?
        .and_hms_opt(hour, 0, 0)
        .ok_or_else(|| invalid("hour must be between 0 and 23"))?;

    // Skipped wall-clock hours (DST gaps) have no instant to map to.
    let local = now
        .timezone()
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| invalid("time does not exist in the local time zone"))?;

    Ok(local.with_timezone(&Utc))
}
