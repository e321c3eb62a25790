//! The owned, ordered task collection.
//!
//! Indexes passed to these methods are 0-based; errors report the 1-based
//! position the user sees. Every operation either applies fully or leaves
//! the list untouched.

use chrono::{DateTime, Utc};
use std::str::FromStr;

use super::{validate_name, Task, TimeEstimate};
use crate::error::{CoreError, IndexError, ValidationError};
use crate::scoring::ScoringEngine;

/// One child of a split: a name and its own estimate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtaskSpec {
    pub name: String,
    pub estimate: TimeEstimate,
}

impl SubtaskSpec {
    pub fn new(name: impl Into<String>, estimate: TimeEstimate) -> Self {
        Self {
            name: name.into(),
            estimate,
        }
    }
}

impl FromStr for SubtaskSpec {
    type Err = ValidationError;

    /// Parses `name=HH:MM`. The last `=` separates name and estimate.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, estimate) = s.rsplit_once('=').ok_or_else(|| ValidationError::InvalidEstimate {
            input: s.to_string(),
            message: "expected name=HH:MM".into(),
        })?;
        Ok(Self {
            name: validate_name(name)?,
            estimate: TimeEstimate::parse(estimate)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Convert a 1-based position into an index.
    pub fn index_of_position(&self, position: usize) -> Result<usize, IndexError> {
        if position == 0 || position > self.tasks.len() {
            return Err(IndexError::OutOfRange {
                position,
                len: self.tasks.len(),
            });
        }
        Ok(position - 1)
    }

    fn check_index(&self, index: usize) -> Result<(), IndexError> {
        if index >= self.tasks.len() {
            return Err(IndexError::OutOfRange {
                position: index + 1,
                len: self.tasks.len(),
            });
        }
        Ok(())
    }

    /// Append a task. Returns its index.
    pub fn add(&mut self, task: Task) -> usize {
        tracing::debug!(name = %task.name, "adding task");
        self.tasks.push(task);
        self.tasks.len() - 1
    }

    pub fn delete(&mut self, index: usize) -> Result<Task, IndexError> {
        self.check_index(index)?;
        let removed = self.tasks.remove(index);
        tracing::debug!(name = %removed.name, "deleted task");
        Ok(removed)
    }

    /// Replace the task at `index` with one child per spec, appended at the
    /// end. Children inherit the parent's due date and importance.
    ///
    /// All children are validated before anything is removed.
    pub fn split(
        &mut self,
        index: usize,
        subtasks: &[SubtaskSpec],
        engine: &ScoringEngine,
    ) -> Result<Vec<usize>, CoreError> {
        self.check_index(index)?;
        if subtasks.is_empty() {
            return Err(ValidationError::EmptySplit.into());
        }

        let parent = &self.tasks[index];
        let children = subtasks
            .iter()
            .map(|spec| {
                Task::new(
                    &spec.name,
                    spec.estimate,
                    parent.due_date,
                    parent.importance,
                    engine,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        let parent = self.tasks.remove(index);
        tracing::debug!(name = %parent.name, parts = children.len(), "split task");

        let first = self.tasks.len();
        self.tasks.extend(children);
        Ok((first..self.tasks.len()).collect())
    }

    pub fn update_due_date(
        &mut self,
        index: usize,
        due_date: Option<DateTime<Utc>>,
    ) -> Result<(), IndexError> {
        self.check_index(index)?;
        self.tasks[index].due_date = due_date;
        Ok(())
    }

    /// Change the estimate and re-derive difficulty. Returns the new
    /// difficulty.
    pub fn update_estimate(
        &mut self,
        index: usize,
        estimate: TimeEstimate,
        engine: &ScoringEngine,
    ) -> Result<u8, CoreError> {
        self.check_index(index)?;
        let difficulty = engine.difficulty(estimate).map_err(ValidationError::from)?;
        let task = &mut self.tasks[index];
        task.time_estimate = estimate;
        task.difficulty = difficulty;
        Ok(difficulty)
    }

    /// Indexes ordered by descending priority at `now`. Equal priorities keep
    /// insertion order.
    pub fn sorted_indices(&self, engine: &ScoringEngine, now: DateTime<Utc>) -> Vec<usize> {
        let mut scored: Vec<(usize, f64)> = self
            .tasks
            .iter()
            .enumerate()
            .map(|(index, task)| (index, engine.priority(task, now)))
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.into_iter().map(|(index, _)| index).collect()
    }

    pub fn sorted_view(&self, engine: &ScoringEngine, now: DateTime<Utc>) -> Vec<&Task> {
        self.sorted_indices(engine, now)
            .into_iter()
            .map(|index| &self.tasks[index])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 1, 8, 0, 0).unwrap()
    }

    fn est(text: &str) -> TimeEstimate {
        TimeEstimate::parse(text).unwrap()
    }

    fn task(name: &str, estimate: &str, due_hours: Option<i64>, importance: u8) -> Task {
        let due = due_hours.map(|hours| now() + Duration::hours(hours));
        Task::new(name, est(estimate), due, importance, &ScoringEngine::default()).unwrap()
    }

    fn names(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.name.as_str()).collect()
    }

    fn sample() -> TaskList {
        let mut list = TaskList::new();
        list.add(task("report", "02:00", Some(30), 8));
        list.add(task("email", "00:10", None, 3));
        list.add(task("taxes", "03:00", Some(-5), 9));
        list
    }

    #[test]
    fn add_returns_index() {
        let mut list = TaskList::new();
        assert_eq!(list.add(task("a", "00:10", None, 5)), 0);
        assert_eq!(list.add(task("b", "00:10", None, 5)), 1);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn delete_removes_and_returns() {
        let mut list = sample();
        let removed = list.delete(1).unwrap();
        assert_eq!(removed.name, "email");
        assert_eq!(names(list.tasks()), vec!["report", "taxes"]);
    }

    #[test]
    fn delete_out_of_range_is_reported_without_change() {
        let mut list = sample();
        let err = list.delete(3).unwrap_err();
        assert_eq!(err, IndexError::OutOfRange { position: 4, len: 3 });
        assert_eq!(list, sample());
    }

    #[test]
    fn positions_are_one_based() {
        let list = sample();
        assert_eq!(list.index_of_position(1), Ok(0));
        assert_eq!(list.index_of_position(3), Ok(2));
        assert!(list.index_of_position(0).is_err());
        assert!(list.index_of_position(4).is_err());
    }

    #[test]
    fn split_replaces_parent_with_children() {
        let mut list = sample();
        let engine = ScoringEngine::default();
        let parts = [
            SubtaskSpec::new("outline", est("00:30")),
            SubtaskSpec::new("draft", est("01:30")),
        ];
        let added = list.split(0, &parts, &engine).unwrap();

        assert_eq!(added, vec![2, 3]);
        assert_eq!(list.len(), 4);
        assert_eq!(names(list.tasks()), vec!["email", "taxes", "outline", "draft"]);

        let parent_due = Some(now() + Duration::hours(30));
        for child in &list.tasks()[2..] {
            assert_eq!(child.due_date, parent_due);
            assert_eq!(child.importance, 8);
        }
        assert_eq!(list.tasks()[2].difficulty, 4);
        assert_eq!(list.tasks()[3].difficulty, 7);
    }

    #[test]
    fn split_with_oversized_child_leaves_list_untouched() {
        let mut list = sample();
        let engine = ScoringEngine::default();
        let parts = [
            SubtaskSpec::new("small", est("00:30")),
            SubtaskSpec::new("huge", est("20:00")),
        ];
        let err = list.split(0, &parts, &engine).unwrap_err();
        assert!(matches!(err, CoreError::Validation(ValidationError::TooLong { .. })));
        assert_eq!(list, sample());
    }

    #[test]
    fn split_rejects_empty_parts_and_bad_index() {
        let mut list = sample();
        let engine = ScoringEngine::default();
        assert!(matches!(
            list.split(0, &[], &engine),
            Err(CoreError::Validation(ValidationError::EmptySplit))
        ));
        assert!(matches!(
            list.split(9, &[SubtaskSpec::new("x", est("00:10"))], &engine),
            Err(CoreError::Index(_))
        ));
        assert_eq!(list, sample());
    }

    #[test]
    fn update_due_date_in_place() {
        let mut list = sample();
        list.update_due_date(1, Some(now())).unwrap();
        assert_eq!(list.tasks()[1].due_date, Some(now()));
        list.update_due_date(1, None).unwrap();
        assert_eq!(list.tasks()[1].due_date, None);
        assert!(list.update_due_date(5, None).is_err());
    }

    #[test]
    fn update_estimate_rederives_difficulty() {
        let mut list = sample();
        let engine = ScoringEngine::default();
        assert_eq!(list.tasks()[1].difficulty, 2);
        assert_eq!(list.update_estimate(1, est("04:00"), &engine).unwrap(), 9);
        assert_eq!(list.tasks()[1].time_estimate, est("04:00"));
        assert_eq!(list.tasks()[1].difficulty, 9);
    }

    #[test]
    fn update_estimate_out_of_range_keeps_old_values() {
        let mut list = sample();
        let engine = ScoringEngine::default();
        let err = list.update_estimate(1, est("50:00"), &engine).unwrap_err();
        assert!(matches!(err, CoreError::Validation(ValidationError::TooLong { .. })));
        assert_eq!(list, sample());
    }

    #[test]
    fn sorted_view_orders_by_priority() {
        let list = sample();
        let engine = ScoringEngine::default();
        // taxes: 2 + 10 + 9 = 21; report: 4 + 7 + 8 = 19; email: 9 + 1 + 3 = 13
        let view = list.sorted_view(&engine, now());
        let order: Vec<&str> = view.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(order, vec!["taxes", "report", "email"]);
    }

    #[test]
    fn sorted_view_is_stable_for_ties() {
        let mut list = TaskList::new();
        for name in ["first", "second", "third"] {
            list.add(task(name, "00:20", None, 5));
        }
        list.add(task("urgent", "00:20", Some(1), 5));
        let engine = ScoringEngine::default();
        let order: Vec<&str> = list
            .sorted_view(&engine, now())
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(order, vec!["urgent", "first", "second", "third"]);
    }

    #[test]
    fn subtask_spec_parsing() {
        let spec: SubtaskSpec = "Read chapter = 1 =01:15".parse().unwrap();
        assert_eq!(spec.name, "Read chapter = 1");
        assert_eq!(spec.estimate.total_minutes(), 75);
        assert!("no estimate".parse::<SubtaskSpec>().is_err());
        assert!(" =00:10".parse::<SubtaskSpec>().is_err());
    }
}
