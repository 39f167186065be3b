//! Dashboard Page
//!
//! Category and expense management plus the derived totals. Data loads as a
//! strict chain: session token → authenticated identity → user profile and
//! categories → expenses per category. Each stage degrades silently to an
//! empty result rather than failing the chain.

use leptos::*;
use leptos_router::use_navigate;
use std::collections::HashMap;

use crate::api::expenses::ExpensePayload;
use crate::api::ApiClient;
use crate::components::summary_card::format_amount;
use crate::components::{
    CardSkeleton, CategoryForm, CategoryInput, ConfirmDialog, ExpenseForm, ExpenseInput,
    ListSkeleton, Modal, Nav, SummaryCard,
};
use crate::state::global::{Category, Expense, GlobalState};
use crate::state::session::Session;
use crate::summary::{category_subtotal, is_income_category, Summary};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let session = use_context::<Session>().expect("Session not found");
    let api = use_context::<ApiClient>().expect("ApiClient not found");
    let navigate = use_navigate();

    let (email, set_email) = create_signal(None::<String>);

    // Dialog state
    let show_add_category = create_rw_signal(false);
    let settings_for = create_rw_signal(None::<Category>);
    let renaming = create_rw_signal(None::<Category>);
    let deleting_category = create_rw_signal(None::<Category>);
    let expense_editor = create_rw_signal(None::<(Category, Option<Expense>)>);
    let deleting_expense = create_rw_signal(None::<(String, Expense)>);

    // Skeletons from the first paint on; stage 3 lowers the flag
    begin_load(&state);

    // Stage 1 + 2: require a token, then resolve the identity behind it.
    // Tracks the session, so a 401 teardown lands back on the login page
    // without issuing further calls.
    let api_for_identity = api.clone();
    create_effect(move |_| {
        if requires_login(session.token().as_ref()) {
            navigate("/", Default::default());
            return;
        }

        let api = api_for_identity.clone();
        spawn_local(async move {
            match api.me().await {
                Ok(identity) => set_email.set(Some(identity.email)),
                Err(e) => {
                    // Stays in the loading state: no redirect, no retry
                    web_sys::console::error_1(
                        &format!("Error obteniendo la identidad: {}", e).into(),
                    );
                }
            }
        });
    });

    // Stage 3: once an email exists, fetch profile and categories. The two
    // calls are error-handled independently.
    let api_for_profile = api.clone();
    let state_for_profile = state.clone();
    create_effect(move |_| {
        let Some(mail) = email.get() else { return };

        let api = api_for_profile.clone();
        let state = state_for_profile.clone();
        spawn_local(async move {
            match api.fetch_user(&mail).await {
                Ok(user) => session.cache_user(user),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Error al cargar el usuario: {}", e).into(),
                    );
                }
            }

            match api.categories_by_email(&mail).await {
                Ok(categories) => state.categories.set(categories),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Error al cargar categorías: {}", e).into(),
                    );
                }
            }

            state.loading.set(false);
        });
    });

    // Stage 4: once categories are known, fetch expenses for each one,
    // sequentially awaited. A per-category failure degrades to an empty list
    // without aborting the rest; the map publishes once, after every fetch
    // settled.
    let api_for_expenses = api.clone();
    let state_for_expenses = state.clone();
    create_effect(move |_| {
        let categories = state_for_expenses.categories.get();
        if categories.is_empty() {
            return;
        }

        let api = api_for_expenses.clone();
        let state = state_for_expenses.clone();
        spawn_local(async move {
            let mut results = Vec::with_capacity(categories.len());

            for category in &categories {
                let result = api.expenses_by_category(&category.id).await;
                if let Err(e) = &result {
                    web_sys::console::error_1(
                        &format!("Error al cargar gastos de \"{}\": {}", category.name, e)
                            .into(),
                    );
                }
                results.push((category.id.clone(), result));
            }

            state.expenses.set(collect_expense_results(results));
        });
    });

    // Derived totals and display ordering, recomputed from scratch whenever
    // categories or the expense map change
    let state_for_summary = state.clone();
    let summary = create_memo(move |_| {
        Summary::compute(
            &state_for_summary.categories.get(),
            &state_for_summary.expenses.get(),
        )
    });

    // Mutation handlers: every mutation re-fetches the affected list instead
    // of patching local state.

    let api_for_add = api.clone();
    let state_for_add = state.clone();
    let on_add_category = move |input: CategoryInput| {
        let Some(mail) = email.get() else { return };
        show_add_category.set(false);

        let api = api_for_add.clone();
        let state = state_for_add.clone();
        spawn_local(async move {
            if api.create_category(&mail, &input.name).await.is_err() {
                state.show_error("No se pudo agregar la categoría");
                return;
            }
            state.show_success("¡Categoría agregada!");
            refresh_categories(api, state, mail).await;
        });
    };

    let api_for_rename = api.clone();
    let state_for_rename = state.clone();
    let on_rename_category = move |input: CategoryInput| {
        let Some(category) = renaming.get() else { return };
        let Some(mail) = email.get() else { return };
        renaming.set(None);

        let api = api_for_rename.clone();
        let state = state_for_rename.clone();
        spawn_local(async move {
            if api.rename_category(&category.id, &input.name).await.is_err() {
                state.show_error("No se pudo actualizar la categoría");
                return;
            }
            state.show_success("¡Categoría actualizada!");
            refresh_categories(api, state, mail).await;
        });
    };

    let api_for_delete = api.clone();
    let state_for_delete = state.clone();
    let on_delete_category = move || {
        let Some(category) = deleting_category.get() else { return };
        let Some(mail) = email.get() else { return };
        deleting_category.set(None);

        let api = api_for_delete.clone();
        let state = state_for_delete.clone();
        spawn_local(async move {
            if api.delete_category(&category.id).await.is_err() {
                state.show_error("No se pudo eliminar la categoría");
                return;
            }
            state.show_success("¡Categoría eliminada!");
            refresh_categories(api, state, mail).await;
        });
    };

    let api_for_expense = api.clone();
    let state_for_expense = state.clone();
    let on_submit_expense = move |input: ExpenseInput| {
        let Some((category, existing)) = expense_editor.get() else { return };
        expense_editor.set(None);

        let api = api_for_expense.clone();
        let state = state_for_expense.clone();
        spawn_local(async move {
            let payload = ExpensePayload {
                name: input.name,
                category_id: category.id.clone(),
                amount: input.amount,
                description: input.description,
                date: input.date,
            };

            let result = match &existing {
                Some(expense) => api.update_expense(&expense.id, &payload).await,
                None => api.create_expense(&payload).await,
            };

            if result.is_err() {
                state.show_error("No se pudo guardar el gasto");
                return;
            }
            state.show_success("¡Gasto guardado!");
            refresh_expenses(api, state, category.id).await;
        });
    };

    let api_for_expense_delete = api.clone();
    let state_for_expense_delete = state.clone();
    let on_delete_expense = move || {
        let Some((category_id, expense)) = deleting_expense.get() else { return };
        deleting_expense.set(None);

        let api = api_for_expense_delete.clone();
        let state = state_for_expense_delete.clone();
        spawn_local(async move {
            if api.delete_expense(&expense.id).await.is_err() {
                state.show_error("No se pudo eliminar el gasto");
                return;
            }
            state.show_success("¡Gasto eliminado!");
            refresh_expenses(api, state, category_id).await;
        });
    };

    let loading = state.loading;
    let expenses_map = state.expenses;

    view! {
        <div class="min-h-screen bg-gray-50">
            <Nav />

            <main class="max-w-3xl mx-auto py-6 px-4 space-y-6">
                {move || {
                    if loading.get() {
                        view! {
                            <div class="space-y-6">
                                <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                                    <CardSkeleton />
                                    <CardSkeleton />
                                    <CardSkeleton />
                                </div>
                                <ListSkeleton count=4 />
                            </div>
                        }
                        .into_view()
                    } else {
                        view! {
                            <SummaryRow summary=summary />

                            <section class="bg-white p-4 rounded shadow">
                                <h2 class="text-2xl font-bold text-center mb-4">"Categorías"</h2>
                                {move || {
                                    let ordered = summary.get().ordered;
                                    if ordered.is_empty() {
                                        view! {
                                            <p class="text-center text-gray-400 py-6">
                                                "Aún no tienes categorías."
                                            </p>
                                        }
                                        .into_view()
                                    } else {
                                        let expenses = expenses_map.get();
                                        view! {
                                            <ul class="space-y-4">
                                                {ordered.into_iter().map(|category| {
                                                    let list = expenses
                                                        .get(&category.id)
                                                        .cloned()
                                                        .unwrap_or_default();
                                                    view! {
                                                        <CategoryRow
                                                            category=category
                                                            expenses=list
                                                            settings_for=settings_for
                                                            expense_editor=expense_editor
                                                            deleting_expense=deleting_expense
                                                        />
                                                    }
                                                }).collect_view()}
                                            </ul>
                                        }
                                        .into_view()
                                    }
                                }}
                            </section>

                            <section class="bg-white p-4 rounded shadow">
                                <button
                                    on:click=move |_| show_add_category.set(true)
                                    class="w-full bg-blue-600 hover:bg-blue-700 text-white py-2 rounded-md font-semibold"
                                >
                                    "Agregar Categoría"
                                </button>
                            </section>
                        }
                        .into_view()
                    }
                }}
            </main>

            // Add-category dialog
            {move || show_add_category.get().then(|| {
                let on_submit = on_add_category.clone();
                view! {
                    <CategoryForm
                        title="Nueva Categoría"
                        on_submit=on_submit
                        on_close=move || show_add_category.set(false)
                    />
                }
            })}

            // Category settings chooser
            {move || settings_for.get().map(|category| {
                let edit_target = category.clone();
                let delete_target = category.clone();
                view! {
                    <Modal
                        title=format!("Ajustes de \"{}\"", category.name)
                        on_close=move || settings_for.set(None)
                    >
                        <div class="flex space-x-3">
                            <button
                                on:click=move |_| {
                                    settings_for.set(None);
                                    renaming.set(Some(edit_target.clone()));
                                }
                                class="flex-1 px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium"
                            >
                                "Editar nombre"
                            </button>
                            <button
                                on:click=move |_| {
                                    settings_for.set(None);
                                    deleting_category.set(Some(delete_target.clone()));
                                }
                                class="flex-1 px-4 py-2 bg-red-600 hover:bg-red-700 text-white rounded-lg font-medium"
                            >
                                "Eliminar"
                            </button>
                        </div>
                    </Modal>
                }
            })}

            // Rename dialog
            {move || renaming.get().map(|category| {
                let on_submit = on_rename_category.clone();
                view! {
                    <CategoryForm
                        title="Editar Categoría"
                        initial_name=category.name.clone()
                        on_submit=on_submit
                        on_close=move || renaming.set(None)
                    />
                }
            })}

            // Delete-category confirmation
            {move || deleting_category.get().map(|category| {
                let on_confirm = on_delete_category.clone();
                view! {
                    <ConfirmDialog
                        title=format!("¿Eliminar \"{}\"?", category.name)
                        message="Esta acción no se puede deshacer"
                        confirm_label="Sí, eliminar"
                        on_confirm=on_confirm
                        on_cancel=move || deleting_category.set(None)
                    />
                }
            })}

            // Expense create/edit dialog
            {move || expense_editor.get().map(|(category, existing)| {
                let on_submit = on_submit_expense.clone();
                let title = match &existing {
                    Some(_) => format!("Editar gasto en \"{}\"", category.name),
                    None => format!("Nuevo gasto en \"{}\"", category.name),
                };
                view! {
                    <ExpenseForm
                        title=title
                        existing=existing
                        on_submit=on_submit
                        on_close=move || expense_editor.set(None)
                    />
                }
            })}

            // Delete-expense confirmation
            {move || deleting_expense.get().map(|(_, expense)| {
                let on_confirm = on_delete_expense.clone();
                view! {
                    <ConfirmDialog
                        title=format!("¿Eliminar \"{}\"?", expense.name)
                        message="Esta acción no se puede deshacer"
                        confirm_label="Sí, eliminar"
                        on_confirm=on_confirm
                        on_cancel=move || deleting_expense.set(None)
                    />
                }
            })}
        </div>
    }
}

/// Income / expense / balance cards
#[component]
fn SummaryRow(#[prop(into)] summary: Signal<Summary>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
            <SummaryCard
                label="Ingresos"
                value=Signal::derive(move || summary.get().income_total)
                accent="text-green-600"
            />
            <SummaryCard
                label="Gastos"
                value=Signal::derive(move || summary.get().expense_total)
                accent="text-red-600"
            />
            <SummaryCard
                label="Balance"
                value=Signal::derive(move || summary.get().balance)
                accent="text-blue-600"
            />
        </div>
    }
}

/// Single category with its expense rows
#[component]
fn CategoryRow(
    category: Category,
    expenses: Vec<Expense>,
    settings_for: RwSignal<Option<Category>>,
    expense_editor: RwSignal<Option<(Category, Option<Expense>)>>,
    deleting_expense: RwSignal<Option<(String, Expense)>>,
) -> impl IntoView {
    let subtotal = category_subtotal(&expenses);
    let income = is_income_category(&category.name);

    let category_for_settings = category.clone();
    let category_for_add = category.clone();

    view! {
        <li class="bg-gray-50 p-4 rounded-lg shadow-inner">
            <div class="flex items-center justify-between">
                <div class="flex items-center space-x-2">
                    <span class="text-blue-600 font-semibold text-lg">{category.name.clone()}</span>
                    {income.then(|| view! {
                        <span class="bg-green-100 text-green-700 text-xs px-2 py-0.5 rounded-full">
                            "Ingreso"
                        </span>
                    })}
                </div>
                <div class="flex items-center space-x-3">
                    <span class="font-semibold text-gray-700">{format_amount(subtotal)}</span>
                    <button
                        on:click=move |_| settings_for.set(Some(category_for_settings.clone()))
                        class="text-gray-500 hover:text-gray-700"
                        title="Ajustes"
                    >
                        "⚙️"
                    </button>
                </div>
            </div>

            {(!expenses.is_empty()).then(|| view! {
                <ul class="mt-3 space-y-2">
                    {expenses.iter().map(|expense| {
                        let edit_target = (category.clone(), Some(expense.clone()));
                        let delete_target = (category.id.clone(), expense.clone());
                        let expense = expense.clone();
                        view! {
                            <li class="flex items-center justify-between text-sm border-b border-gray-200 pb-1 last:border-0">
                                <div>
                                    <span class="text-gray-700">{expense.name.clone()}</span>
                                    {expense.date.clone().map(|date| view! {
                                        <span class="text-gray-400 text-xs ml-2">{date}</span>
                                    })}
                                </div>
                                <div class="flex items-center space-x-2">
                                    <span class="font-medium">{format_amount(expense.amount)}</span>
                                    <button
                                        on:click=move |_| expense_editor.set(Some(edit_target.clone()))
                                        class="text-gray-400 hover:text-gray-600"
                                        title="Editar"
                                    >
                                        "✎"
                                    </button>
                                    <button
                                        on:click=move |_| deleting_expense.set(Some(delete_target.clone()))
                                        class="text-gray-400 hover:text-red-600"
                                        title="Eliminar"
                                    >
                                        "🗑"
                                    </button>
                                </div>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            })}

            <button
                on:click=move |_| expense_editor.set(Some((category_for_add.clone(), None)))
                class="mt-3 text-sm text-blue-600 hover:underline font-medium"
            >
                "+ Agregar Gasto"
            </button>
        </li>
    }
}

/// Stage-1 guard: without a session token the dashboard redirects to login
/// and issues no network calls.
fn requires_login(token: Option<&String>) -> bool {
    token.is_none()
}

/// Raise the loading flag before the loader chain starts
fn begin_load(state: &GlobalState) {
    state.loading.set(true);
}

/// Fold per-category fetch results into the expense map. A failed category
/// contributes an empty list instead of aborting the rest.
fn collect_expense_results(
    results: Vec<(String, Result<Vec<Expense>, String>)>,
) -> HashMap<String, Vec<Expense>> {
    results
        .into_iter()
        .map(|(id, result)| (id, result.unwrap_or_default()))
        .collect()
}

/// Re-fetch the category list after a category mutation
async fn refresh_categories(api: ApiClient, state: GlobalState, email: String) {
    match api.categories_by_email(&email).await {
        Ok(categories) => state.categories.set(categories),
        Err(e) => state.show_error(&e),
    }
}

/// Re-fetch one category's expenses after an expense mutation
async fn refresh_expenses(api: ApiClient, state: GlobalState, category_id: String) {
    match api.expenses_by_category(&category_id).await {
        Ok(list) => state.expenses.update(|map| {
            map.insert(category_id, list);
        }),
        Err(e) => state.show_error(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn missing_token_requires_login() {
        assert!(requires_login(None));
        assert!(!requires_login(Some(&"token".to_string())));
    }

    #[test]
    fn failed_category_fetch_keeps_the_other_categories() {
        let results = vec![
            ("c1".to_string(), Ok(vec![expense("sueldo", 500.0)])),
            ("c2".to_string(), Err("Network error: timeout".to_string())),
            ("c3".to_string(), Ok(vec![expense("bus", 25.0), expense("tren", 40.0)])),
        ];

        let map = collect_expense_results(results);

        assert_eq!(map.len(), 3);
        assert_eq!(map["c1"][0].amount, 500.0);
        assert!(map["c2"].is_empty());
        assert_eq!(map["c3"].len(), 2);
    }

    #[test]
    fn entering_the_dashboard_raises_the_loading_flag() {
        let runtime = create_runtime();
        let state = GlobalState::new();
        assert!(!state.loading.get_untracked());

        begin_load(&state);

        assert!(state.loading.get_untracked());
        runtime.dispose();
    }
}
