//! Builder API for configured trackers.
//!
//! [`BugTrackerBuilder`] collects rates and policies and validates them in
//! one pass; [`state_enum!`](crate::state_enum) declares simple state enums.

pub mod error;
pub mod macros;
pub mod tracker;

pub use error::BuildError;
pub use tracker::BugTrackerBuilder;
