//! Navigation Component
//!
//! Dashboard header with brand, signed-in identity and logout.

use leptos::*;
use leptos_router::use_navigate;

use crate::state::session::Session;

/// Dashboard header component
#[component]
pub fn Nav() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");
    let navigate = use_navigate();

    let on_logout = move |_| {
        session.clear();
        navigate("/", Default::default());
    };

    view! {
        <header class="bg-white shadow">
            <div class="max-w-3xl mx-auto px-4 h-16 flex items-center justify-between">
                <div class="flex items-center space-x-3">
                    <span class="text-2xl">"💰"</span>
                    <span class="text-xl font-bold text-blue-600">"Monedero Digital"</span>
                </div>

                <div class="flex items-center space-x-4">
                    <span class="text-sm text-gray-500">
                        {move || {
                            session
                                .user()
                                .map(|user| user.name.unwrap_or(user.email))
                                .unwrap_or_default()
                        }}
                    </span>
                    <button
                        on:click=on_logout
                        class="bg-gray-200 hover:bg-gray-300 px-4 py-2 rounded shadow text-sm font-medium"
                    >
                        "Cerrar Sesión"
                    </button>
                </div>
            </div>
        </header>
    }
}
