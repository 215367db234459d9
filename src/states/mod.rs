//! Department states.
//!
//! Each department is its own type implementing [`BugState`]. A state owns
//! the cost accumulated while the bug sat in that department and decides
//! which department comes next. It never touches the tracker directly:
//! [`BugState::next_state`] names the successor and the tracker applies it.

mod closed;
mod customer_support;
mod engineering;
mod testing;

pub use closed::ClosedState;
pub use customer_support::CustomerSupportState;
pub use engineering::EngineeringState;
pub use testing::TestingState;

use crate::core::Department;
use crate::tracker::TrackerError;
use std::fmt::Debug;

/// Behavior shared by every department.
pub trait BugState: Debug + Send + Sync {
    /// Which department this state represents.
    fn department(&self) -> Department;

    /// Billing rate per logged hour.
    fn hourly_rate(&self) -> u64;

    /// Cost accumulated so far in this department.
    fn cost(&self) -> u64;

    /// Bill `hours` at this department's rate.
    ///
    /// Returns the amount added to the cost. On error the cost is unchanged.
    fn update_hours_worked(&mut self, hours: u64) -> Result<u64, TrackerError>;

    /// The department that takes over when work here is finished.
    ///
    /// `None` for a terminal department.
    fn next_state(&self) -> Option<Department>;
}
