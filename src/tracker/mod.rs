//! The bug tracker context.
//!
//! [`BugTrackerContext`] owns one state per department and remembers which
//! one currently has the bug. Logging hours and finishing work are handed
//! to the current state; the context only applies the transition the state
//! asks for.

mod error;
mod report;

pub use error::TrackerError;
pub use report::{CostLine, CostReport};

use crate::builder::BugTrackerBuilder;
use crate::config::{NegativeHoursPolicy, TrackerConfig};
use crate::core::{Department, State, StateHistory, StateTransition};
use crate::states::{BugState, ClosedState, CustomerSupportState, EngineeringState, TestingState};
use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Tracks the cost of fixing one bug as it moves between departments.
///
/// # Example
///
/// ```rust
/// use bugcost::{BugTrackerContext, Department};
///
/// let mut tracker = BugTrackerContext::new();
/// tracker.log_hours_worked(2).unwrap();
/// assert_eq!(tracker.cost_of_fixing_bug_for_current_state(), 160);
///
/// assert_eq!(tracker.finish_work(), Department::Engineering);
/// tracker.log_hours_worked(3).unwrap();
/// assert_eq!(tracker.cost_of_fixing_bug_for_current_state(), 450);
/// assert_eq!(tracker.total_cost_of_fixing_bug(), 610);
/// ```
#[derive(Debug)]
pub struct BugTrackerContext {
    id: Uuid,
    config: TrackerConfig,
    customer_support: CustomerSupportState,
    engineering: EngineeringState,
    testing: TestingState,
    closed: ClosedState,
    current: Department,
    history: StateHistory<Department>,
}

impl Default for BugTrackerContext {
    fn default() -> Self {
        Self::new()
    }
}

impl BugTrackerContext {
    /// Create a tracker with the default rates. The bug starts in
    /// customer support.
    pub fn new() -> Self {
        Self::from_config(TrackerConfig::default())
    }

    /// Start configuring a tracker.
    pub fn builder() -> BugTrackerBuilder {
        BugTrackerBuilder::new()
    }

    /// Build a tracker from a config that has already been validated.
    pub(crate) fn from_config(config: TrackerConfig) -> Self {
        let rates = config.rates;
        let tracker = Self {
            id: Uuid::new_v4(),
            customer_support: CustomerSupportState::new(rates.customer_support),
            engineering: EngineeringState::new(rates.engineering),
            testing: TestingState::new(rates.testing),
            closed: ClosedState::new(rates.closed),
            current: Department::CustomerSupport,
            history: StateHistory::new(),
            config,
        };
        debug!("Opened bug {} in {}", tracker.id, tracker.current);
        tracker
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Department that currently has the bug.
    pub fn current_department(&self) -> Department {
        self.current
    }

    pub fn is_closed(&self) -> bool {
        self.current.is_final()
    }

    /// Handoffs so far, oldest first.
    pub fn history(&self) -> &StateHistory<Department> {
        &self.history
    }

    /// The state object for any department, current or not.
    pub fn state(&self, department: Department) -> &dyn BugState {
        match department {
            Department::CustomerSupport => &self.customer_support,
            Department::Engineering => &self.engineering,
            Department::Testing => &self.testing,
            Department::Closed => &self.closed,
        }
    }

    /// The state object that currently has the bug.
    pub fn current_state(&self) -> &dyn BugState {
        self.state(self.current)
    }

    fn current_state_mut(&mut self) -> &mut dyn BugState {
        match self.current {
            Department::CustomerSupport => &mut self.customer_support,
            Department::Engineering => &mut self.engineering,
            Department::Testing => &mut self.testing,
            Department::Closed => &mut self.closed,
        }
    }

    fn states(&self) -> [&dyn BugState; 4] {
        [
            &self.customer_support,
            &self.engineering,
            &self.testing,
            &self.closed,
        ]
    }

    /// Log hours against the bug in its current department.
    ///
    /// Returns the cost added. Negative hours are handled according to the
    /// configured [`NegativeHoursPolicy`].
    pub fn log_hours_worked(&mut self, hours: i64) -> Result<u64, TrackerError> {
        let hours = self.admit_hours(hours)?;
        let department = self.current;
        self.check_total_headroom(department, hours)?;
        let delta = self.current_state_mut().update_hours_worked(hours)?;
        debug!(
            "Logged {} hours in {} for bug {} (+{}, department total {})",
            hours,
            department,
            self.id,
            delta,
            self.cost_of_fixing_bug_for_current_state()
        );
        Ok(delta)
    }

    /// The total must stay representable, not just the current ledger.
    fn check_total_headroom(
        &self,
        department: Department,
        hours: u64,
    ) -> Result<(), TrackerError> {
        hours
            .checked_mul(self.current_state().hourly_rate())
            .and_then(|delta| self.total_cost_of_fixing_bug().checked_add(delta))
            .map(|_| ())
            .ok_or_else(|| {
                warn!(
                    "Rejected {} hours for bug {}, total cost would overflow",
                    hours, self.id
                );
                TrackerError::CostOverflow { department }
            })
    }

    fn admit_hours(&self, hours: i64) -> Result<u64, TrackerError> {
        let admitted = match u64::try_from(hours) {
            Ok(hours) => hours,
            Err(_) => match self.config.negative_hours {
                NegativeHoursPolicy::Reject => {
                    warn!("Rejected {} hours for bug {}", hours, self.id);
                    return Err(TrackerError::NegativeHours { hours });
                }
                NegativeHoursPolicy::ClampToZero => {
                    warn!("Clamped {} hours to zero for bug {}", hours, self.id);
                    0
                }
            },
        };

        if let Some(limit) = self.config.max_hours_per_entry {
            if admitted > limit {
                warn!(
                    "Rejected {} hours for bug {} (limit {})",
                    admitted, self.id, limit
                );
                return Err(TrackerError::HoursExceedLimit {
                    hours: admitted,
                    limit,
                });
            }
        }

        Ok(admitted)
    }

    /// Mark the current department's work as done and hand the bug on.
    ///
    /// On a closed bug this does nothing. Returns the department that has
    /// the bug afterwards.
    pub fn finish_work(&mut self) -> Department {
        match self.current_state().next_state() {
            Some(next) => self.set_state(next),
            None => {
                debug!("Bug {} is already closed, finish_work ignored", self.id);
            }
        }
        self.current
    }

    /// Like [`finish_work`](Self::finish_work), but a closed bug is an
    /// error instead of a no-op.
    pub fn try_finish_work(&mut self) -> Result<Department, TrackerError> {
        let Some(next) = self.current_state().next_state() else {
            warn!("Bug {} is already closed, cannot finish work", self.id);
            return Err(TrackerError::AlreadyClosed);
        };
        self.set_state(next);
        Ok(next)
    }

    fn set_state(&mut self, next: Department) {
        let from = self.current;
        let transition = StateTransition {
            from,
            to: next,
            timestamp: Utc::now(),
            cost: self.current_state().cost(),
        };
        self.history = self.history.record(transition);
        self.current = next;
        debug!("Bug {} moved from {} to {}", self.id, from, next);

        if next.is_final() {
            info!(
                "Bug {} closed, total cost {}",
                self.id,
                self.total_cost_of_fixing_bug()
            );
        }
    }

    /// Cost accumulated in the department that currently has the bug.
    pub fn cost_of_fixing_bug_for_current_state(&self) -> u64 {
        self.current_state().cost()
    }

    /// Cost across every department, whichever one is current.
    pub fn total_cost_of_fixing_bug(&self) -> u64 {
        self.states()
            .iter()
            .map(|state| state.cost())
            .sum()
    }

    /// Snapshot of the bug's costs.
    pub fn report(&self) -> CostReport {
        let lines = self
            .states()
            .iter()
            .map(|state| CostLine {
                department: state.department(),
                hourly_rate: state.hourly_rate(),
                cost: state.cost(),
            })
            .collect();

        let path = if self.history.is_empty() {
            vec![self.current]
        } else {
            self.history.get_path().into_iter().copied().collect()
        };

        CostReport {
            bug_id: self.id,
            current: self.current,
            lines,
            total: self.total_cost_of_fixing_bug(),
            path,
        }
    }
}
