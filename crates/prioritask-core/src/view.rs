//! Ranked, annotated view of the task list for display.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::scoring::{Quadrant, ScoringEngine};
use crate::task::{Task, TaskList};

/// A task with everything derived for display at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedTask {
    /// 1-based place in priority order
    pub rank: usize,
    /// 1-based place in the stored list, used to select the task
    pub position: usize,
    #[serde(flatten)]
    pub task: Task,
    pub urgency: u8,
    pub priority: f64,
    pub quadrant: Quadrant,
    pub overdue: bool,
}

/// Rank the whole list by priority at `now`.
pub fn render(list: &TaskList, engine: &ScoringEngine, now: DateTime<Utc>) -> Vec<RankedTask> {
    list.sorted_indices(engine, now)
        .into_iter()
        .enumerate()
        .map(|(rank, index)| {
            let task = &list.tasks()[index];
            let urgency = engine.urgency(task, now);
            RankedTask {
                rank: rank + 1,
                position: index + 1,
                task: task.clone(),
                urgency,
                priority: engine.priority_with_urgency(task, urgency, now),
                quadrant: Quadrant::classify(task.importance, urgency),
                overdue: task.is_overdue(now),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TimeEstimate;
    use chrono::{Duration, TimeZone};

    #[test]
    fn renders_ranked_rows() {
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 8, 0, 0).unwrap();
        let engine = ScoringEngine::default();
        let est = TimeEstimate::parse("00:30").unwrap();

        let mut list = TaskList::new();
        list.add(Task::new("later", est, None, 4, &engine).unwrap());
        list.add(Task::new("late", est, Some(now - Duration::hours(2)), 8, &engine).unwrap());

        let rows = render(&list, &engine, now);
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].position, 2);
        assert_eq!(rows[0].task.name, "late");
        assert_eq!(rows[0].urgency, 10);
        assert_eq!(rows[0].quadrant, Quadrant::Do);
        assert!(rows[0].overdue);
        assert_eq!(rows[0].priority, 7.0 + 10.0 + 8.0);

        assert_eq!(rows[1].rank, 2);
        assert_eq!(rows[1].position, 1);
        assert_eq!(rows[1].quadrant, Quadrant::Eliminate);
        assert!(!rows[1].overdue);
    }

    #[test]
    fn urgency_and_overdue_agree_near_the_deadline() {
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 8, 0, 0).unwrap();
        let engine = ScoringEngine::default();
        let est = TimeEstimate::parse("00:30").unwrap();

        let mut list = TaskList::new();
        list.add(Task::new("almost", est, Some(now + Duration::milliseconds(500)), 6, &engine).unwrap());
        list.add(Task::new("exactly", est, Some(now), 6, &engine).unwrap());

        let rows = render(&list, &engine, now);
        for row in &rows {
            assert_eq!(row.overdue, row.urgency == 10, "{}", row.task.name);
        }
        let almost = rows.iter().find(|r| r.task.name == "almost").unwrap();
        assert_eq!(almost.urgency, 9);
        assert!(!almost.overdue);
    }

    #[test]
    fn serializes_flat() {
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 8, 0, 0).unwrap();
        let engine = ScoringEngine::default();
        let mut list = TaskList::new();
        list.add(Task::new("one", TimeEstimate::parse("01:00").unwrap(), None, 6, &engine).unwrap());

        let json = serde_json::to_value(render(&list, &engine, now)).unwrap();
        assert_eq!(json[0]["name"], "one");
        assert_eq!(json[0]["timeEstimate"], "01:00");
        assert_eq!(json[0]["quadrant"], "Schedule");
        assert_eq!(json[0]["rank"], 1);
    }
}
