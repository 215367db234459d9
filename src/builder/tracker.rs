//! Builder for configured trackers.

use crate::builder::error::BuildError;
use crate::config::{NegativeHoursPolicy, RateCard, TrackerConfig};
use crate::core::Department;
use crate::tracker::BugTrackerContext;
use stillwater::validation::Validation;

/// Fluent builder for [`BugTrackerContext`].
///
/// The config is validated once, in [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct BugTrackerBuilder {
    config: TrackerConfig,
}

impl BugTrackerBuilder {
    /// Create a builder with default rates and policies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole config, e.g. one loaded with
    /// [`TrackerConfig::from_json`].
    pub fn config(mut self, config: TrackerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set every department's rate at once
    pub fn rates(mut self, rates: RateCard) -> Self {
        self.config.rates = rates;
        self
    }

    /// Set one department's rate
    pub fn rate(mut self, department: Department, hourly_rate: u64) -> Self {
        let rates = &mut self.config.rates;
        match department {
            Department::CustomerSupport => rates.customer_support = hourly_rate,
            Department::Engineering => rates.engineering = hourly_rate,
            Department::Testing => rates.testing = hourly_rate,
            Department::Closed => rates.closed = hourly_rate,
        }
        self
    }

    pub fn negative_hours(mut self, policy: NegativeHoursPolicy) -> Self {
        self.config.negative_hours = policy;
        self
    }

    /// Cap the hours accepted in a single entry
    pub fn max_hours_per_entry(mut self, limit: u64) -> Self {
        self.config.max_hours_per_entry = Some(limit);
        self
    }

    /// Validate the config and build the tracker.
    pub fn build(self) -> Result<BugTrackerContext, BuildError> {
        match self.config.validate() {
            Validation::Success(_) => Ok(BugTrackerContext::from_config(self.config)),
            Validation::Failure(violations) => Err(BuildError::InvalidConfig(
                violations.iter().cloned().collect(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigViolation;
    use crate::states::BugState;

    #[test]
    fn default_builder_builds() {
        let tracker = BugTrackerBuilder::new().build().unwrap();
        assert_eq!(tracker.config(), &TrackerConfig::default());
    }

    #[test]
    fn single_rate_override() {
        let tracker = BugTrackerBuilder::new()
            .rate(Department::Testing, 120)
            .build()
            .unwrap();

        assert_eq!(tracker.state(Department::Testing).hourly_rate(), 120);
        assert_eq!(tracker.state(Department::Engineering).hourly_rate(), 150);
    }

    #[test]
    fn builder_reports_all_violations() {
        let result = BugTrackerBuilder::new()
            .rate(Department::CustomerSupport, 0)
            .rate(Department::Testing, 0)
            .max_hours_per_entry(0)
            .build();

        match result {
            Err(BuildError::InvalidConfig(violations)) => {
                assert_eq!(violations.len(), 3);
                assert!(violations.contains(&ConfigViolation::ZeroHourCap));
                assert!(violations.contains(&ConfigViolation::ZeroRate {
                    department: Department::Testing
                }));
            }
            Ok(_) => panic!("Expected invalid config"),
        }
    }

    #[test]
    fn build_error_message_lists_violations() {
        let err = BugTrackerBuilder::new()
            .rate(Department::Engineering, 0)
            .build()
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("1 violation"));
        assert!(message.contains("Engineering"));
    }

    #[test]
    fn loaded_config_is_used() {
        let config =
            TrackerConfig::from_json(r#"{ "rates": { "customer_support": 50 } }"#).unwrap();
        let mut tracker = BugTrackerBuilder::new().config(config).build().unwrap();

        tracker.log_hours_worked(2).unwrap();
        assert_eq!(tracker.cost_of_fixing_bug_for_current_state(), 100);
    }
}
