use super::BugState;
use crate::core::{CostLedger, Department};
use crate::tracker::TrackerError;

/// QA verifies the fix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestingState {
    ledger: CostLedger,
}

impl TestingState {
    /// Default cost per hour of testing work.
    pub const HOURLY_RATE: u64 = 100;

    pub fn new(hourly_rate: u64) -> Self {
        Self {
            ledger: CostLedger::new(hourly_rate),
        }
    }
}

impl Default for TestingState {
    fn default() -> Self {
        Self::new(Self::HOURLY_RATE)
    }
}

impl BugState for TestingState {
    fn department(&self) -> Department {
        Department::Testing
    }

    fn hourly_rate(&self) -> u64 {
        self.ledger.hourly_rate()
    }

    fn cost(&self) -> u64 {
        self.ledger.cost()
    }

    fn update_hours_worked(&mut self, hours: u64) -> Result<u64, TrackerError> {
        self.ledger.accrue(hours).ok_or(TrackerError::CostOverflow {
            department: Department::Testing,
        })
    }

    fn next_state(&self) -> Option<Department> {
        Some(Department::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bills_at_testing_rate() {
        let mut state = TestingState::default();
        state.update_hours_worked(5).unwrap();
        state.update_hours_worked(1).unwrap();
        assert_eq!(state.cost(), 600);
    }

    #[test]
    fn hands_over_to_closed() {
        assert_eq!(TestingState::default().next_state(), Some(Department::Closed));
    }
}
