//! Modal Components
//!
//! Modal shell and confirm dialog used by the dashboard's forms and
//! destructive actions.

use leptos::*;

/// Modal overlay and panel
#[component]
pub fn Modal(
    #[prop(into)]
    title: String,
    on_close: impl Fn() + 'static,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
            <div class="bg-white rounded-xl p-6 w-full max-w-md mx-4 shadow-xl">
                <div class="flex items-center justify-between mb-6">
                    <h2 class="text-xl font-semibold text-gray-800">{title}</h2>
                    <button
                        on:click=move |_| on_close()
                        class="text-gray-400 hover:text-gray-600"
                    >
                        "✕"
                    </button>
                </div>

                {children()}
            </div>
        </div>
    }
}

/// Confirmation dialog for destructive actions
#[component]
pub fn ConfirmDialog(
    #[prop(into)]
    title: String,
    #[prop(into)]
    message: String,
    #[prop(default = "Aceptar")]
    confirm_label: &'static str,
    on_confirm: impl Fn() + 'static,
    on_cancel: impl Fn() + 'static,
) -> impl IntoView {
    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
            <div class="bg-white rounded-xl p-6 w-full max-w-sm mx-4 shadow-xl text-center">
                <h2 class="text-xl font-semibold text-gray-800 mb-2">{title}</h2>
                <p class="text-gray-500 mb-6">{message}</p>

                <div class="flex space-x-3">
                    <button
                        on:click=move |_| on_cancel()
                        class="flex-1 px-4 py-2 bg-gray-200 hover:bg-gray-300 rounded-lg font-medium"
                    >
                        "Cancelar"
                    </button>
                    <button
                        on:click=move |_| on_confirm()
                        class="flex-1 px-4 py-2 bg-red-600 hover:bg-red-700 text-white rounded-lg font-medium"
                    >
                        {confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
