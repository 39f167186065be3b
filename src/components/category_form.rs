//! Category Form
//!
//! Dialog for creating or renaming a category. Fields are validated here and
//! handed to the page as a typed result; invalid input never reaches the
//! caller.

use leptos::*;

use crate::components::Modal;

/// Validated category fields
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryInput {
    pub name: String,
}

/// Validate the raw field text into a `CategoryInput`
fn validate(name: &str) -> Result<CategoryInput, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("El nombre es obligatorio".to_string());
    }
    Ok(CategoryInput {
        name: name.to_string(),
    })
}

/// Category create/rename dialog
#[component]
pub fn CategoryForm(
    #[prop(into)]
    title: String,
    #[prop(optional, into)]
    initial_name: String,
    on_submit: impl Fn(CategoryInput) + 'static,
    on_close: impl Fn() + 'static,
) -> impl IntoView {
    let (name, set_name) = create_signal(initial_name);
    let (field_error, set_field_error) = create_signal(None::<String>);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        match validate(&name.get()) {
            Ok(input) => on_submit(input),
            Err(message) => set_field_error.set(Some(message)),
        }
    };

    view! {
        <Modal title=title on_close=on_close>
            <form on:submit=submit class="space-y-4">
                <div>
                    <label class="block text-sm text-gray-600 mb-2">"Nombre de la categoría"</label>
                    <input
                        type="text"
                        placeholder="Ejemplo: Entretenimiento"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        class="w-full border rounded-md px-3 py-2 text-sm outline-blue-500"
                    />
                    {move || field_error.get().map(|message| view! {
                        <span class="text-xs text-red-500">{message}</span>
                    })}
                </div>

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
    fn name_is_trimmed() {
        let input = validate("  Comida  ").unwrap();
        assert_eq!(input.name, "Comida");
    }

    #[test]
    fn empty_or_blank_name_is_rejected() {
        assert!(validate("").is_err());
        assert!(validate("   ").is_err());
    }
}
