//! Totals and Ordering
//!
//! Pure derivation from loaded categories and expenses into the dashboard's
//! income/expense/balance totals and display ordering.

use std::collections::HashMap;

use crate::state::global::{Category, Expense};

/// Name fragments that mark a category as income rather than spending
const INCOME_SYNONYMS: [&str; 4] = ["ganancia", "ganancias", "ingreso", "ingresos"];

/// Whether a category name classifies as income-like. Case-insensitive
/// substring match: "Mis Ingresos Extra" counts.
pub fn is_income_category(name: &str) -> bool {
    let lowered = name.to_lowercase();
    INCOME_SYNONYMS.iter().any(|synonym| lowered.contains(synonym))
}

/// Sum of a category's expense amounts
pub fn category_subtotal(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|expense| expense.amount).sum()
}

/// Derived dashboard totals plus the display ordering of categories
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub income_total: f64,
    pub expense_total: f64,
    pub balance: f64,
    pub ordered: Vec<Category>,
}

impl Summary {
    /// Recompute everything from scratch. Amounts are summed as positive
    /// magnitudes; a category's subtotal routes into the income accumulator
    /// iff its name is income-like. Income-like categories order first, then
    /// alphabetical by case-folded name within each class.
    pub fn compute(categories: &[Category], expenses: &HashMap<String, Vec<Expense>>) -> Self {
        let mut income_total = 0.0;
        let mut expense_total = 0.0;

        for category in categories {
            let subtotal = expenses
                .get(&category.id)
                .map(|list| category_subtotal(list))
                .unwrap_or(0.0);

            if is_income_category(&category.name) {
                income_total += subtotal;
            } else {
                expense_total += subtotal;
            }
        }

        let mut ordered = categories.to_vec();
        ordered.sort_by(|a, b| {
            let income_a = is_income_category(&a.name);
            let income_b = is_income_category(&b.name);
            income_b
                .cmp(&income_a)
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });

        Self {
            income_total,
            expense_total,
            balance: income_total - expense_total,
            ordered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: &str, name: &str) -> Category {
        Category {
            id: id.to_string(),
            name: name.to_string(),
            icon: None,
        }
    }

    fn expense(name: &str, amount: f64) -> Expense {
        Expense {
            id: String::new(),
            name: name.to_string(),
            category_id: String::new(),
            amount,
            description: None,
            date: None,
        }
    }

    #[test]
    fn income_synonyms_classify_case_insensitively() {
        for name in ["ganancia", "Ganancias", "INGRESO", "ingresos"] {
            assert!(is_income_category(name), "{name} should be income-like");
        }
        assert!(is_income_category("Mis Ingresos Extra"));
        assert!(!is_income_category("Comida"));
        assert!(!is_income_category("Transporte"));
    }

    #[test]
    fn income_categories_order_first_then_alphabetical() {
        let categories = vec![
            category("1", "Comida"),
            category("2", "Ganancias"),
            category("3", "Ahorros"),
        ];
        let summary = Summary::compute(&categories, &HashMap::new());

        let names: Vec<&str> = summary.ordered.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Ganancias", "Ahorros", "Comida"]);
    }

    #[test]
    fn subtotals_route_by_classification() {
        let categories = vec![category("1", "Ganancias"), category("2", "Comida")];
        let mut expenses = HashMap::new();
        expenses.insert("1".to_string(), vec![expense("sueldo", 1000.0)]);
        expenses.insert(
            "2".to_string(),
            vec![expense("tacos", 120.0), expense("café", 30.0)],
        );

        let summary = Summary::compute(&categories, &expenses);
        assert_eq!(summary.income_total, 1000.0);
        assert_eq!(summary.expense_total, 150.0);
        assert_eq!(summary.balance, 850.0);
        // Totals always add up to the sum of all amounts
        assert_eq!(summary.income_total + summary.expense_total, 1150.0);
    }

    #[test]
    fn repeated_computation_is_idempotent() {
        let categories = vec![category("1", "Ingresos"), category("2", "Renta")];
        let mut expenses = HashMap::new();
        expenses.insert("1".to_string(), vec![expense("venta", 300.0)]);
        expenses.insert("2".to_string(), vec![expense("depto", 450.0)]);

        let first = Summary::compute(&categories, &expenses);
        let second = Summary::compute(&categories, &expenses);
        assert_eq!(first, second);
    }

    #[test]
    fn category_without_loaded_expenses_still_appears() {
        let categories = vec![category("1", "Comida"), category("2", "Viajes")];
        let mut expenses = HashMap::new();
        expenses.insert("1".to_string(), vec![expense("tacos", 80.0)]);
        // "Viajes" failed to load: no entry at all

        let summary = Summary::compute(&categories, &expenses);
        assert_eq!(summary.expense_total, 80.0);
        assert_eq!(summary.ordered.len(), 2);
    }

    #[test]
    fn failed_category_degrades_to_empty_without_losing_the_rest() {
        let categories = vec![
            category("1", "Ganancias"),
            category("2", "Comida"),
            category("3", "Transporte"),
        ];
        let mut expenses = HashMap::new();
        expenses.insert("1".to_string(), vec![expense("sueldo", 500.0)]);
        // Category 2's fetch failed and contributed an empty list
        expenses.insert("2".to_string(), Vec::new());
        expenses.insert("3".to_string(), vec![expense("bus", 25.0)]);

        let summary = Summary::compute(&categories, &expenses);
        assert_eq!(summary.income_total, 500.0);
        assert_eq!(summary.expense_total, 25.0);
        assert_eq!(summary.balance, 475.0);
    }
}
