use super::BugState;
use crate::core::{CostLedger, Department};
use crate::tracker::TrackerError;

/// Terminal state. The bug is fixed and verified.
///
/// Hours can still be logged here; at the default rate they cost nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClosedState {
    ledger: CostLedger,
}

impl ClosedState {
    /// Default cost per hour logged against a closed bug.
    pub const HOURLY_RATE: u64 = 0;

    pub fn new(hourly_rate: u64) -> Self {
        Self {
            ledger: CostLedger::new(hourly_rate),
        }
    }
}

impl Default for ClosedState {
    fn default() -> Self {
        Self::new(Self::HOURLY_RATE)
    }
}

impl BugState for ClosedState {
    fn department(&self) -> Department {
        Department::Closed
    }

    fn hourly_rate(&self) -> u64 {
        self.ledger.hourly_rate()
    }

    fn cost(&self) -> u64 {
        self.ledger.cost()
    }

    fn update_hours_worked(&mut self, hours: u64) -> Result<u64, TrackerError> {
        self.ledger.accrue(hours).ok_or(TrackerError::CostOverflow {
            department: Department::Closed,
        })
    }

    fn next_state(&self) -> Option<Department> {
        None
    }
}
