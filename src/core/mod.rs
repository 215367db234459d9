//! Core value types.
//!
//! - Departments via the `State` trait
//! - Per-department cost ledgers
//! - Immutable handoff history

mod history;
mod ledger;
mod state;

pub use history::{StateHistory, StateTransition};
pub use ledger::CostLedger;
pub use state::{Department, State};
