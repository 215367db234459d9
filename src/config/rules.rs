//! Validation of tracker configuration.
//!
//! All checks run and every violation is reported, so a bad config file
//! can be fixed in one pass.

use crate::config::violations::ConfigViolation;
use crate::config::TrackerConfig;
use crate::core::{Department, State};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

impl TrackerConfig {
    /// Check the config, accumulating ALL violations.
    ///
    /// A department that can hand work on must bill a non-zero rate. The
    /// terminal department may be free.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        for department in Department::ALL {
            let check = if !department.is_final() && self.rates.rate_for(department) == 0 {
                Validation::fail(ConfigViolation::ZeroRate { department })
            } else {
                Validation::success(())
            };
            checks.push(check);
        }

        let cap_check = if self.max_hours_per_entry == Some(0) {
            Validation::fail(ConfigViolation::ZeroHourCap)
        } else {
            Validation::success(())
        };
        checks.push(cap_check);

        Validation::all_vec(checks).map(|_| ())
    }
}
