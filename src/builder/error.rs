//! Build errors for the tracker builder.

use crate::config::ConfigViolation;
use thiserror::Error;

/// Errors that can occur when building a tracker.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Every violation found in the config, not just the first.
    #[error("Invalid tracker config ({} violation(s)): {}", .0.len(), join(.0))]
    InvalidConfig(Vec<ConfigViolation>),
}

fn join(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
