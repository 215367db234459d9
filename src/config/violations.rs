//! Configuration violations.

use crate::core::Department;
use thiserror::Error;

/// A single problem found while validating a [`TrackerConfig`](super::TrackerConfig)
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("Hourly rate for {department} must be greater than zero")]
    ZeroRate { department: Department },

    #[error("max_hours_per_entry must be greater than zero when set")]
    ZeroHourCap,
}
