//! One-week workload projection.
//!
//! Each dated task's estimate is spread evenly over the calendar days from
//! today through its due day. Overdue and due-today work lands entirely on
//! today. Tasks without a due date, or due a week or more out, are left out.

use chrono::{DateTime, Duration, NaiveDate, TimeZone};
use serde::Serialize;

use crate::task::Task;

pub const PROJECTION_DAYS: usize = 7;

/// Hours per day for days `0..7`, day 0 being today in the zone of `now`.
pub fn daily_workload<Tz: TimeZone>(tasks: &[Task], now: &DateTime<Tz>) -> [f64; PROJECTION_DAYS] {
    let zone = now.timezone();
    let today = now.date_naive();
    let mut hours = [0.0; PROJECTION_DAYS];

    for task in tasks {
        let Some(due) = task.due_date else {
            continue;
        };
        let due_day = due.with_timezone(&zone).date_naive();
        let days_until_due = (due_day - today).num_days();
        let total = task.time_estimate.as_hours();

        if days_until_due <= 0 {
            hours[0] += total;
        } else if (days_until_due as usize) < PROJECTION_DAYS {
            let span = days_until_due as usize + 1;
            let per_day = total / span as f64;
            for bucket in hours.iter_mut().take(span) {
                *bucket += per_day;
            }
        }
    }

    hours
}

/// A projected day with its calendar date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkloadDay {
    pub date: NaiveDate,
    pub hours: f64,
}

/// [`daily_workload`] labelled with dates.
pub fn project_week<Tz: TimeZone>(tasks: &[Task], now: &DateTime<Tz>) -> Vec<WorkloadDay> {
    let today = now.date_naive();
    daily_workload(tasks, now)
        .into_iter()
        .enumerate()
        .map(|(offset, hours)| WorkloadDay {
            date: today + Duration::days(offset as i64),
            hours,
        })
        .collect()
}
