use super::BugState;
use crate::core::{CostLedger, Department};
use crate::tracker::TrackerError;

/// Engineers diagnose and fix the bug.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineeringState {
    ledger: CostLedger,
}

impl EngineeringState {
    /// Default cost per hour of engineering work.
    pub const HOURLY_RATE: u64 = 150;

    pub fn new(hourly_rate: u64) -> Self {
        Self {
            ledger: CostLedger::new(hourly_rate),
        }
    }
}

impl Default for EngineeringState {
    fn default() -> Self {
        Self::new(Self::HOURLY_RATE)
    }
}

impl BugState for EngineeringState {
    fn department(&self) -> Department {
        Department::Engineering
    }

    fn hourly_rate(&self) -> u64 {
        self.ledger.hourly_rate()
    }

    fn cost(&self) -> u64 {
        self.ledger.cost()
    }

    fn update_hours_worked(&mut self, hours: u64) -> Result<u64, TrackerError> {
        self.ledger.accrue(hours).ok_or(TrackerError::CostOverflow {
            department: Department::Engineering,
        })
    }

    fn next_state(&self) -> Option<Department> {
        Some(Department::Testing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bills_at_engineering_rate() {
        let mut state = EngineeringState::default();
        state.update_hours_worked(3).unwrap();
        assert_eq!(state.cost(), 3 * EngineeringState::HOURLY_RATE);
    }

    #[test]
    fn custom_rate_is_used() {
        let mut state = EngineeringState::new(200);
        assert_eq!(state.update_hours_worked(4).unwrap(), 800);
        assert_eq!(state.hourly_rate(), 200);
    }

    #[test]
    fn hands_over_to_testing() {
        assert_eq!(
            EngineeringState::default().next_state(),
            Some(Department::Testing)
        );
    }
}
