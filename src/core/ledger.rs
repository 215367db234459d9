//! Per-department cost accumulator.

use serde::{Deserialize, Serialize};

/// Running cost for one department.
///
/// The rate is fixed when the ledger is created; the cost only grows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostLedger {
    hourly_rate: u64,
    cost: u64,
}

impl CostLedger {
    /// Create an empty ledger billing at `hourly_rate`.
    pub fn new(hourly_rate: u64) -> Self {
        Self {
            hourly_rate,
            cost: 0,
        }
    }

    pub fn hourly_rate(&self) -> u64 {
        self.hourly_rate
    }

    pub fn cost(&self) -> u64 {
        self.cost
    }

    /// Add `hours * hourly_rate` to the cost and return the amount added.
    ///
    /// Returns `None` on overflow, in which case the ledger is unchanged.
    pub fn accrue(&mut self, hours: u64) -> Option<u64> {
        let delta = hours.checked_mul(self.hourly_rate)?;
        self.cost = self.cost.checked_add(delta)?;
        Some(delta)
    }
}
