//! Tracker configuration.
//!
//! Rates, the negative-hours policy and the per-entry hour cap. Configs
//! deserialize from JSON; missing fields take their defaults.
//!
//! # Example
//!
//! ```rust
//! use bugcost::config::{NegativeHoursPolicy, TrackerConfig};
//!
//! let config = TrackerConfig::from_json(
//!     r#"{ "rates": { "engineering": 200 }, "negative_hours": "clamp_to_zero" }"#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.rates.engineering, 200);
//! assert_eq!(config.rates.customer_support, 80);
//! assert_eq!(config.negative_hours, NegativeHoursPolicy::ClampToZero);
//! assert!(config.validate().is_success());
//! ```

mod rules;
pub mod violations;

pub use violations::ConfigViolation;

use crate::core::Department;
use crate::states::{ClosedState, CustomerSupportState, EngineeringState, TestingState};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors reading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse tracker config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// What to do with a negative number of logged hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegativeHoursPolicy {
    /// Refuse the entry with an error
    #[default]
    Reject,

    /// Treat the entry as zero hours and log a warning
    ClampToZero,
}

/// Hourly rate for each department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateCard {
    pub customer_support: u64,
    pub engineering: u64,
    pub testing: u64,
    pub closed: u64,
}

impl RateCard {
    pub fn rate_for(&self, department: Department) -> u64 {
        match department {
            Department::CustomerSupport => self.customer_support,
            Department::Engineering => self.engineering,
            Department::Testing => self.testing,
            Department::Closed => self.closed,
        }
    }
}

impl Default for RateCard {
    fn default() -> Self {
        Self {
            customer_support: CustomerSupportState::HOURLY_RATE,
            engineering: EngineeringState::HOURLY_RATE,
            testing: TestingState::HOURLY_RATE,
            closed: ClosedState::HOURLY_RATE,
        }
    }
}

/// Everything that can be tuned on a tracker.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub rates: RateCard,
    pub negative_hours: NegativeHoursPolicy,
    /// Largest number of hours accepted in a single entry
    pub max_hours_per_entry: Option<u64>,
}

impl TrackerConfig {
    /// Parse a config from JSON. Does not validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
