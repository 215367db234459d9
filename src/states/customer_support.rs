use super::BugState;
use crate::core::{CostLedger, Department};
use crate::tracker::TrackerError;

/// Initial state. Every bug is reported to customer support first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomerSupportState {
    ledger: CostLedger,
}

impl CustomerSupportState {
    /// Default cost per hour of customer support work.
    pub const HOURLY_RATE: u64 = 80;

    pub fn new(hourly_rate: u64) -> Self {
        Self {
            ledger: CostLedger::new(hourly_rate),
        }
    }
}

impl Default for CustomerSupportState {
    fn default() -> Self {
        Self::new(Self::HOURLY_RATE)
    }
}

impl BugState for CustomerSupportState {
    fn department(&self) -> Department {
        Department::CustomerSupport
    }

    fn hourly_rate(&self) -> u64 {
        self.ledger.hourly_rate()
    }

    fn cost(&self) -> u64 {
        self.ledger.cost()
    }

    fn update_hours_worked(&mut self, hours: u64) -> Result<u64, TrackerError> {
        self.ledger.accrue(hours).ok_or(TrackerError::CostOverflow {
            department: Department::CustomerSupport,
        })
    }

    fn next_state(&self) -> Option<Department> {
        Some(Department::Engineering)
    }
}
