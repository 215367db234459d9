//! Handoff history.
//!
//! Every time a bug moves from one department to the next the tracker
//! records a [`StateTransition`]. The history is immutable: `record`
//! returns a new history with the handoff appended.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single handoff between two states.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// When the handoff happened
    pub timestamp: DateTime<Utc>,
    /// Cost the `from` state had accumulated at handoff
    pub cost: u64,
}

/// Ordered history of handoffs.
///
/// # Example
///
/// ```rust
/// use bugcost::core::{Department, StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let history = StateHistory::new().record(StateTransition {
///     from: Department::CustomerSupport,
///     to: Department::Engineering,
///     timestamp: Utc::now(),
///     cost: 160,
/// });
///
/// assert_eq!(
///     history.get_path(),
///     vec![&Department::CustomerSupport, &Department::Engineering]
/// );
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a handoff, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the first handoff's `from` state followed by the `to` state
    /// of every handoff. Empty when nothing has been recorded.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last handoff.
    ///
    /// `None` if nothing has been recorded.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all handoffs in order.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Department;

    fn handoff(from: Department, to: Department, cost: u64) -> StateTransition<Department> {
        StateTransition {
            from,
            to,
            timestamp: Utc::now(),
            cost,
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<Department> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = StateHistory::new();
        let new_history = history.record(handoff(
            Department::CustomerSupport,
            Department::Engineering,
            160,
        ));

        assert_eq!(history.transitions().len(), 0);
        assert_eq!(new_history.transitions().len(), 1);
        assert_eq!(new_history.transitions()[0].cost, 160);
    }

    #[test]
    fn get_path_returns_department_sequence() {
        let history = StateHistory::new()
            .record(handoff(
                Department::CustomerSupport,
                Department::Engineering,
                0,
            ))
            .record(handoff(Department::Engineering, Department::Testing, 0))
            .record(handoff(Department::Testing, Department::Closed, 0));

        let path = history.get_path();
        assert_eq!(
            path,
            vec![
                &Department::CustomerSupport,
                &Department::Engineering,
                &Department::Testing,
                &Department::Closed,
            ]
        );
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let history = StateHistory::new().record(handoff(
            Department::CustomerSupport,
            Department::Engineering,
            0,
        ));

        std::thread::sleep(Duration::from_millis(10));

        let history = history.record(handoff(Department::Engineering, Department::Testing, 0));

        let duration = history.duration().unwrap();
        assert!(duration >= Duration::from_millis(10));
    }

    #[test]
    fn single_handoff_has_zero_duration() {
        let history = StateHistory::new().record(handoff(
            Department::CustomerSupport,
            Department::Engineering,
            0,
        ));

        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StateHistory::new().record(handoff(
            Department::CustomerSupport,
            Department::Engineering,
            240,
        ));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<Department> = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.transitions().len(), 1);
        assert_eq!(deserialized.transitions()[0].to, Department::Engineering);
        assert_eq!(deserialized.transitions()[0].cost, 240);
    }
}
