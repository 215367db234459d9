//! Bugcost: pricing a bug fix with the State pattern
//!
//! A bug moves from customer support to engineering to testing and is
//! finally closed. Every department bills the hours logged against the bug
//! at its own hourly rate. Each department is a separate state object that
//! owns its running cost and knows which department comes next; the
//! tracker only holds the states and a marker for the current one.
//!
//! # Core Concepts
//!
//! - **Department**: which stage a bug is in, via the `State` trait
//! - **BugState**: per-department behavior (billing, successor)
//! - **BugTrackerContext**: owns the states and delegates to the current one
//! - **History**: immutable record of handoffs between departments
//!
//! # Example
//!
//! ```rust
//! use bugcost::{BugTrackerContext, Department};
//!
//! let mut tracker = BugTrackerContext::new();
//!
//! tracker.log_hours_worked(2).unwrap();
//! tracker.finish_work();
//! tracker.log_hours_worked(3).unwrap();
//! tracker.finish_work();
//! tracker.log_hours_worked(1).unwrap();
//! tracker.finish_work();
//!
//! assert_eq!(tracker.current_department(), Department::Closed);
//! assert_eq!(tracker.total_cost_of_fixing_bug(), 160 + 450 + 100);
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod states;
pub mod tracker;

// Re-export commonly used types
pub use builder::{BugTrackerBuilder, BuildError};
pub use config::{NegativeHoursPolicy, RateCard, TrackerConfig};
pub use core::{Department, State, StateHistory, StateTransition};
pub use states::BugState;
pub use tracker::{BugTrackerContext, CostReport, TrackerError};
