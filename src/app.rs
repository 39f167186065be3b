//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::api::{self, ApiClient};
use crate::components::Toast;
use crate::pages::{Dashboard, Login, NotFound};
use crate::state::global::provide_global_state;
use crate::state::session::Session;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    // The session is the only writer of the storage keys; the client carries
    // the base URL and the Bearer header provider backed by that session.
    let session = Session::load();
    provide_context(session);
    provide_context(ApiClient::new(&api::get_api_base(), session));

    view! {
        <Router>
            <main class="min-h-screen bg-gray-100 text-gray-900">
                <Routes>
                    <Route path="/" view=Login />
                    <Route path="/dashboard" view=Dashboard />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>

            // Toast notifications
            <Toast />
        </Router>
    }
}
