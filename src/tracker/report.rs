//! Cost reports.

use crate::core::Department;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What one department billed for a bug.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostLine {
    pub department: Department,
    pub hourly_rate: u64,
    pub cost: u64,
}

/// Snapshot of a bug's costs at the moment it was taken.
///
/// Lines are in pipeline order and always cover all four departments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostReport {
    pub bug_id: Uuid,
    pub current: Department,
    pub lines: Vec<CostLine>,
    pub total: u64,
    /// Departments the bug has been in, oldest first
    pub path: Vec<Department>,
}

impl CostReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Cost billed by `department`.
    pub fn cost_for(&self, department: Department) -> u64 {
        self.lines
            .iter()
            .find(|line| line.department == department)
            .map_or(0, |line| line.cost)
    }
}
