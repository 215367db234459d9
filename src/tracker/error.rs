//! Errors raised by tracker operations.

use crate::core::Department;
use thiserror::Error;

/// Errors that can occur while working a bug.
///
/// A failed operation leaves the tracker exactly as it was.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TrackerError {
    #[error("Cannot log a negative number of hours ({hours})")]
    NegativeHours { hours: i64 },

    #[error("Logged {hours} hours in one entry, limit is {limit}")]
    HoursExceedLimit { hours: u64, limit: u64 },

    #[error("Cost for {department} would overflow")]
    CostOverflow { department: Department },

    #[error("Bug is already closed")]
    AlreadyClosed,
}
