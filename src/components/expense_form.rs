//! Expense Form
//!
//! Dialog for creating or editing an expense inside a category. Fields are
//! validated locally and returned to the page as a typed result.

use leptos::*;

use crate::components::Modal;
use crate::state::global::Expense;

/// Validated expense fields
#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseInput {
    pub name: String,
    pub amount: f64,
    pub description: Option<String>,
    pub date: Option<String>,
}

/// Validate raw field text. The amount must parse to a finite, non-negative
/// number.
fn validate(
    name: &str,
    amount: &str,
    description: &str,
    date: &str,
) -> Result<ExpenseInput, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("El nombre es obligatorio".to_string());
    }

    let amount: f64 = amount
        .trim()
        .parse()
        .map_err(|_| "El monto debe ser un número".to_string())?;
    if !amount.is_finite() || amount < 0.0 {
        return Err("El monto debe ser un número positivo".to_string());
    }

    let description = description.trim();
    let date = date.trim();

    Ok(ExpenseInput {
        name: name.to_string(),
        amount,
        description: (!description.is_empty()).then(|| description.to_string()),
        date: (!date.is_empty()).then(|| date.to_string()),
    })
}

/// Today's date in the format the backend stores
fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Expense create/edit dialog
#[component]
pub fn ExpenseForm(
    #[prop(into)]
    title: String,
    existing: Option<Expense>,
    on_submit: impl Fn(ExpenseInput) + 'static,
    on_close: impl Fn() + 'static,
) -> impl IntoView {
    let (name, set_name) = create_signal(
        existing.as_ref().map(|e| e.name.clone()).unwrap_or_default(),
    );
    let (amount, set_amount) = create_signal(
        existing.as_ref().map(|e| e.amount.to_string()).unwrap_or_default(),
    );
    let (description, set_description) = create_signal(
        existing
            .as_ref()
            .and_then(|e| e.description.clone())
            .unwrap_or_default(),
    );
    let (date, set_date) = create_signal(
        existing
            .as_ref()
            .and_then(|e| e.date.clone())
            .unwrap_or_else(today),
    );
    let (field_error, set_field_error) = create_signal(None::<String>);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        match validate(&name.get(), &amount.get(), &description.get(), &date.get()) {
            Ok(input) => on_submit(input),
            Err(message) => set_field_error.set(Some(message)),
        }
    };

    view! {
        <Modal title=title on_close=on_close>
            <form on:submit=submit class="space-y-4">
                <div>
                    <label class="block text-sm text-gray-600 mb-2">"Nombre"</label>
                    <input
                        type="text"
                        placeholder="Ejemplo: Supermercado"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        class="w-full border rounded-md px-3 py-2 text-sm outline-blue-500"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-600 mb-2">"Monto"</label>
                    <input
                        type="number"
                        step="0.01"
                        min="0"
                        placeholder="0.00"
                        prop:value=move || amount.get()
                        on:input=move |ev| set_amount.set(event_target_value(&ev))
                        class="w-full border rounded-md px-3 py-2 text-sm outline-blue-500"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-600 mb-2">"Descripción (opcional)"</label>
                    <input
                        type="text"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                        class="w-full border rounded-md px-3 py-2 text-sm outline-blue-500"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-600 mb-2">"Fecha"</label>
                    <input
                        type="date"
                        prop:value=move || date.get()
                        on:input=move |ev| set_date.set(event_target_value(&ev))
                        class="w-full border rounded-md px-3 py-2 text-sm outline-blue-500"
                    />
                </div>

                {move || field_error.get().map(|message| view! {
                    <span class="text-xs text-red-500">{message}</span>
                })}

                <button
                    type="submit"
                    class="w-full bg-blue-600 hover:bg-blue-700 text-white py-2 rounded-md font-semibold"
                >
                    "Guardar"
                </button>
            </form>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_fields_produce_a_typed_result() {
        let input = validate("Supermercado", "120.50", "semana", "2025-01-15").unwrap();
        assert_eq!(input.name, "Supermercado");
        assert_eq!(input.amount, 120.5);
        assert_eq!(input.description.as_deref(), Some("semana"));
        assert_eq!(input.date.as_deref(), Some("2025-01-15"));
    }

    #[test]
    fn empty_optional_fields_become_none() {
        let input = validate("Café", "30", "  ", "").unwrap();
        assert_eq!(input.amount, 30.0);
        assert_eq!(input.description, None);
        assert_eq!(input.date, None);
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(validate("  ", "10", "", "").is_err());
    }

    #[test]
    fn non_numeric_amount_is_rejected() {
        assert!(validate("Café", "mucho", "", "").is_err());
    }

    #[test]
    fn negative_amount_is_rejected() {
        assert!(validate("Café", "-5", "", "").is_err());
    }
}
