//! State Management
//!
//! Global application state and the persisted session context.

pub mod global;
pub mod session;

pub use global::{provide_global_state, Category, Expense, GlobalState, User};
pub use session::Session;
