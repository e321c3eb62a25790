use chrono::Local;
use prioritask_core::project_week;

use super::Session;

// One mark per half hour
const MARKS_PER_HOUR: f64 = 2.0;

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let session = Session::open()?;
    let days = project_week(session.tasks.tasks(), &Local::now());

    if json {
        println!("{}", serde_json::to_string_pretty(&days)?);
        return Ok(());
    }

    for day in &days {
        let marks = (day.hours * MARKS_PER_HOUR).round() as usize;
        println!(
            "{} {:>6.1}h {}",
            day.date.format("%a %m-%d"),
            day.hours,
            "#".repeat(marks)
        );
    }
    Ok(())
}
