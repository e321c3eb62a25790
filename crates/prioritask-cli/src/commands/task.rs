//! Task management commands for CLI.

use chrono::{Local, Utc};
use clap::Subcommand;
use prioritask_core::{create_task, parse_due_date, render, RankedTask, SubtaskSpec, TimeEstimate};

use super::Session;

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a new task
    Add {
        /// Task name
        name: String,
        /// Time estimate as HH:MM
        #[arg(long)]
        estimate: String,
        /// Due date as "MM DD HH [YYYY]"
        #[arg(long)]
        due: Option<String>,
        /// Importance from 1 to 10
        #[arg(long)]
        importance: String,
    },
    /// List tasks, highest priority first
    List {
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete a task
    Delete {
        /// Task number as shown by `list`
        position: usize,
    },
    /// Replace a task with smaller subtasks
    Split {
        /// Task number as shown by `list`
        position: usize,
        /// Subtask as name=HH:MM (repeat for each subtask)
        #[arg(long = "part", required = true)]
        parts: Vec<String>,
    },
    /// Set or clear a due date
    Due {
        /// Task number as shown by `list`
        position: usize,
        /// New due date as "MM DD HH [YYYY]"
        #[arg(long, conflicts_with = "clear")]
        date: Option<String>,
        /// Remove the due date
        #[arg(long)]
        clear: bool,
    },
    /// Change a time estimate
    Estimate {
        /// Task number as shown by `list`
        position: usize,
        /// New estimate as HH:MM
        estimate: String,
    },
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::open()?;

    match action {
        TaskAction::Add {
            name,
            estimate,
            due,
            importance,
        } => {
            let task = create_task(
                &name,
                &estimate,
                due.as_deref(),
                &importance,
                &Local::now(),
                &session.engine,
            )?;
            let index = session.tasks.add(task);
            session.save()?;
            println!("Task added: #{}", index + 1);
        }
        TaskAction::List { json } => {
            let rows = render(&session.tasks, &session.engine, Utc::now());
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else if rows.is_empty() {
                println!("No tasks.");
            } else {
                for row in &rows {
                    print_row(row);
                }
            }
        }
        TaskAction::Delete { position } => {
            let index = session.tasks.index_of_position(position)?;
            let removed = session.tasks.delete(index)?;
            session.save()?;
            println!("Task deleted: {}", removed.name);
        }
        TaskAction::Split { position, parts } => {
            let index = session.tasks.index_of_position(position)?;
            let specs = parts
                .iter()
                .map(|part| part.parse::<SubtaskSpec>())
                .collect::<Result<Vec<_>, _>>()?;
            let added = session.tasks.split(index, &specs, &session.engine)?;
            session.save()?;
            let numbers: Vec<String> = added.iter().map(|i| format!("#{}", i + 1)).collect();
            println!("Task split into {}", numbers.join(", "));
        }
        TaskAction::Due {
            position,
            date,
            clear,
        } => {
            let index = session.tasks.index_of_position(position)?;
            let due = match (date, clear) {
                (Some(text), _) => Some(parse_due_date(&text, &Local::now())?),
                (None, true) => None,
                (None, false) => return Err("pass --date or --clear".into()),
            };
            session.tasks.update_due_date(index, due)?;
            session.save()?;
            println!("Due date updated: #{position}");
        }
        TaskAction::Estimate { position, estimate } => {
            let index = session.tasks.index_of_position(position)?;
            let estimate = TimeEstimate::parse(&estimate)?;
            let difficulty = session.tasks.update_estimate(index, estimate, &session.engine)?;
            session.save()?;
            println!("Estimate updated: #{position} (difficulty {difficulty})");
        }
    }
    Ok(())
}

fn print_row(row: &RankedTask) {
    let due = row
        .task
        .due_date
        .map(|due| due.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "none".to_string());
    let overdue = if row.overdue { "  OVERDUE" } else { "" };

    println!(
        "{:>2}. [#{}] {}  ({}: {}){}",
        row.rank,
        row.position,
        row.task.name,
        row.quadrant,
        row.quadrant.advice(),
        overdue
    );
    println!(
        "    estimate {} | due {} | difficulty {} | urgency {} | importance {} | priority {:.1}",
        row.task.time_estimate,
        due,
        row.task.difficulty,
        row.urgency,
        row.task.importance,
        row.priority
    );
}
