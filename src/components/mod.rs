//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod category_form;
pub mod expense_form;
pub mod loading;
pub mod modal;
pub mod nav;
pub mod summary_card;
pub mod toast;

pub use category_form::{CategoryForm, CategoryInput};
pub use expense_form::{ExpenseForm, ExpenseInput};
pub use loading::{CardSkeleton, ListSkeleton};
pub use modal::{ConfirmDialog, Modal};
pub use nav::Nav;
pub use summary_card::SummaryCard;
pub use toast::Toast;
