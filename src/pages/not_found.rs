//! Not Found Page
//!
//! Catch-all route: 404 with an automatic redirect back to login.

use gloo_timers::callback::Timeout;
use leptos::*;
use leptos_router::use_navigate;

/// Delay before the automatic redirect to login
const REDIRECT_DELAY_MS: u32 = 5_000;

/// 404 page
#[component]
pub fn NotFound() -> impl IntoView {
    let navigate = use_navigate();

    let navigate_for_timer = navigate.clone();
    create_effect(move |_| {
        let navigate = navigate_for_timer.clone();
        Timeout::new(REDIRECT_DELAY_MS, move || {
            navigate("/", Default::default());
        })
        .forget();
    });

    view! {
        <div class="min-h-screen flex flex-col justify-center items-center bg-gray-100 px-4 text-center">
            <h1 class="text-6xl font-extrabold text-red-600 mb-4">"404"</h1>
            <p class="text-xl text-gray-700 mb-6">"Página no encontrada"</p>
            <p class="mb-6 text-gray-600">
                "Lo sentimos, la página que buscas no existe o fue movida."
            </p>
            <button
                on:click=move |_| navigate("/", Default::default())
                class="bg-blue-600 hover:bg-blue-700 text-white font-semibold py-2 px-6 rounded shadow"
            >
                "Ir al Login"
            </button>
            <p class="mt-4 text-gray-500 text-sm">
                "Serás redirigido automáticamente en 5 segundos..."
            </p>
        </div>
    }
}
