//! Global Application State
//!
//! Reactive state management using Leptos signals, plus the shared model
//! types that backend records normalize into.

use leptos::*;
use std::collections::HashMap;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Categories owned by the signed-in user
    pub categories: RwSignal<Vec<Category>>,
    /// Loaded expenses keyed by category id
    pub expenses: RwSignal<HashMap<String, Vec<Expense>>>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// User profile record
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct User {
    #[serde(alias = "user_id", default)]
    pub id: String,
    #[serde(alias = "user_name", default)]
    pub name: Option<String>,
    pub email: String,
}

/// Spending category record. Classified as income-like at display time from
/// its current name, never stored.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Category {
    #[serde(alias = "category_id")]
    pub id: String,
    pub name: String,
    #[serde(alias = "icono", default)]
    pub icon: Option<String>,
}

/// Expense record belonging to exactly one category
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Expense {
    #[serde(alias = "expense_id", default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category_id: String,
    /// The backend is loose about this field: numbers, numeric strings and
    /// null all occur in practice. Anything non-numeric coerces to zero.
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<serde_json::Value> = serde::Deserialize::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(serde_json::Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState::new());
}

impl Default for GlobalState {
    fn default() -> Self {
        Self::new()
    }
}

impl GlobalState {
    pub fn new() -> Self {
        Self {
            categories: create_rw_signal(Vec::new()),
            expenses: create_rw_signal(HashMap::new()),
            loading: create_rw_signal(false),
            error: create_rw_signal(None),
            success: create_rw_signal(None),
        }
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_normalizes_backend_field_names() {
        let category: Category = serde_json::from_str(
            r#"{"category_id": "c1", "name": "Comida", "icono": "🍔"}"#,
        )
        .unwrap();
        assert_eq!(category.id, "c1");
        assert_eq!(category.icon.as_deref(), Some("🍔"));
    }

    #[test]
    fn user_normalizes_backend_field_names() {
        let user: User = serde_json::from_str(
            r#"{"user_id": "u1", "user_name": "Ana", "email": "ana@mail.com"}"#,
        )
        .unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.name.as_deref(), Some("Ana"));
    }

    #[test]
    fn expense_amounts_coerce_to_numbers() {
        let expenses: Vec<Expense> = serde_json::from_str(
            r#"[
                {"expense_id": "e1", "name": "a", "amount": 50},
                {"expense_id": "e2", "name": "b", "amount": "30"},
                {"expense_id": "e3", "name": "c", "amount": null}
            ]"#,
        )
        .unwrap();

        let amounts: Vec<f64> = expenses.iter().map(|e| e.amount).collect();
        assert_eq!(amounts, vec![50.0, 30.0, 0.0]);
        assert_eq!(crate::summary::category_subtotal(&expenses), 80.0);
    }

    #[test]
    fn missing_amount_field_coerces_to_zero() {
        let expense: Expense =
            serde_json::from_str(r#"{"name": "sin monto", "category_id": "c1"}"#).unwrap();
        assert_eq!(expense.amount, 0.0);
    }

    #[test]
    fn non_numeric_amount_string_coerces_to_zero() {
        let expense: Expense =
            serde_json::from_str(r#"{"name": "raro", "amount": "mucho"}"#).unwrap();
        assert_eq!(expense.amount, 0.0);
    }
}
