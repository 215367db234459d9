//! Bug Tracker Walkthrough
//!
//! Walks a single bug through every department and prints what each one
//! billed.
//!
//! Run with: cargo run --example bug_tracker

use bugcost::{BugTrackerContext, Department, State, TrackerError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .init();

    println!("=== Bug Tracker ===\n");

    let mut tracker = BugTrackerContext::new();
    println!(
        "Bug {} opened in {}",
        tracker.id(),
        tracker.current_department()
    );

    let work: [(Department, &[i64]); 3] = [
        (Department::CustomerSupport, &[2]),
        (Department::Engineering, &[3, 5]),
        (Department::Testing, &[1, 2]),
    ];

    for (department, entries) in work {
        for hours in entries {
            tracker.log_hours_worked(*hours)?;
        }
        println!(
            "{:<16} {:>6}",
            department.name(),
            tracker.cost_of_fixing_bug_for_current_state()
        );
        tracker.finish_work();
    }

    println!("\nTotal cost: {}", tracker.total_cost_of_fixing_bug());

    match tracker.try_finish_work() {
        Err(TrackerError::AlreadyClosed) => println!("Closed bugs stay closed"),
        other => println!("Unexpected: {:?}", other),
    }

    println!("\n{}", tracker.report().to_json()?);

    println!("\n=== Example Complete ===");
    Ok(())
}
