//! The `State` trait and the departments a bug moves through.
//!
//! A bug is always owned by exactly one department. Departments are plain
//! values; the behavior attached to each one lives in [`crate::states`].

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. States are small values that name a position in
/// the machine; they are compared, copied into history and serialized into
/// reports.
///
/// # Example
///
/// ```rust
/// use bugcost::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Review {
///     Open,
///     Approved,
/// }
///
/// impl State for Review {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Approved => "Approved",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Approved)
///     }
/// }
///
/// assert!(Review::Approved.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

crate::state_enum! {
    /// The department currently responsible for a bug.
    #[derive(Copy, Eq, Hash)]
    pub enum Department {
        /// First line; every bug starts here.
        CustomerSupport,
        Engineering,
        Testing,
        /// Terminal. Nothing follows.
        Closed,
    }
    final: [Closed]
}

impl Department {
    /// Every department in the order a bug passes through them.
    pub const ALL: [Department; 4] = [
        Department::CustomerSupport,
        Department::Engineering,
        Department::Testing,
        Department::Closed,
    ];

    /// Position of this department along the pipeline, starting at 0.
    pub fn position(self) -> usize {
        match self {
            Self::CustomerSupport => 0,
            Self::Engineering => 1,
            Self::Testing => 2,
            Self::Closed => 3,
        }
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn department_names_match_variants() {
        assert_eq!(Department::CustomerSupport.name(), "CustomerSupport");
        assert_eq!(Department::Engineering.name(), "Engineering");
        assert_eq!(Department::Testing.name(), "Testing");
        assert_eq!(Department::Closed.name(), "Closed");
    }

    #[test]
    fn only_closed_is_final() {
        assert!(!Department::CustomerSupport.is_final());
        assert!(!Department::Engineering.is_final());
        assert!(!Department::Testing.is_final());
        assert!(Department::Closed.is_final());
    }

    #[test]
    fn all_is_ordered_by_position() {
        for (i, department) in Department::ALL.iter().enumerate() {
            assert_eq!(department.position(), i);
        }
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(Department::Testing.to_string(), "Testing");
    }

    #[test]
    fn department_serializes_correctly() {
        let json = serde_json::to_string(&Department::Engineering).unwrap();
        assert_eq!(json, "\"Engineering\"");
        let deserialized: Department = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Department::Engineering);
    }
}
