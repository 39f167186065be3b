//! Login Page
//!
//! Single form toggled between login and register modes by local component
//! state, not a route.

use leptos::*;
use leptos_router::use_navigate;

use crate::api::users::RegisterRequest;
use crate::api::ApiClient;
use crate::state::global::GlobalState;
use crate::state::session::Session;

const CREDENTIAL_ERROR: &str = "Error al iniciar sesión, verifica tus credenciales.";

/// Default username derived from the email's local part
fn local_part(email: &str) -> String {
    email.split('@').next().unwrap_or(email).to_string()
}

/// Login / registration page
#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let session = use_context::<Session>().expect("Session not found");
    let api = use_context::<ApiClient>().expect("ApiClient not found");
    let navigate = use_navigate();

    let (is_login, set_is_login) = create_signal(true);
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (phone, set_phone) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let mail = email.get();
        let pass = password.get();
        if mail.trim().is_empty() || pass.is_empty() {
            state.show_error("Correo y contraseña son obligatorios");
            return;
        }

        set_submitting.set(true);

        if is_login.get() {
            let api = api.clone();
            let state = state.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                // The backend's failure reason is not surfaced here: any
                // login failure reads as a credential problem.
                match api.login(&mail, &pass).await {
                    Ok(body) => match body.token {
                        Some(token) => {
                            session.establish(&token, body.user);
                            state.show_success("¡Inicio de sesión exitoso!");
                            navigate("/dashboard", Default::default());
                        }
                        None => state.show_error(CREDENTIAL_ERROR),
                    },
                    Err(_) => state.show_error(CREDENTIAL_ERROR),
                }
                set_submitting.set(false);
            });
        } else {
            let request = RegisterRequest {
                user_name: local_part(&mail),
                email: mail,
                password: pass,
                phone_number: {
                    let phone = phone.get();
                    (!phone.trim().is_empty()).then_some(phone)
                },
                user_status: "Activo".to_string(),
            };

            let api = api.clone();
            let state = state.clone();
            spawn_local(async move {
                match api.register(&request).await {
                    Ok(()) => {
                        state.show_success("Cuenta creada. Ahora puedes iniciar sesión.");
                        set_is_login.set(true);
                    }
                    Err(message) => state.show_error(&message),
                }
                set_submitting.set(false);
            });
        }
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-100">
            <div class="w-full max-w-sm bg-white p-8 rounded-2xl shadow-xl">
                <h2 class="text-2xl font-bold text-blue-600 text-center">
                    {move || if is_login.get() { "Monedero Digital" } else { "Crear Cuenta" }}
                </h2>
                <p class="text-center text-gray-500 mb-6">
                    {move || {
                        if is_login.get() {
                            "Ingresa para controlar tus finanzas."
                        } else {
                            "Regístrate para comenzar."
                        }
                    }}
                </p>

                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label class="block text-sm font-medium text-gray-700">"Correo Electrónico"</label>
                        <input
                            type="email"
                            placeholder="tu@correo.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            class="w-full mt-1 border rounded-md px-3 py-2 text-sm outline-blue-500"
                        />
                    </div>

                    <div>
                        <label class="block text-sm font-medium text-gray-700">"Contraseña"</label>
                        <input
                            type="password"
                            placeholder="••••••••"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            class="w-full mt-1 border rounded-md px-3 py-2 text-sm outline-blue-500"
                        />
                    </div>

                    // Phone only applies to registration
                    {move || (!is_login.get()).then(|| view! {
                        <div>
                            <label class="block text-sm font-medium text-gray-700">"Teléfono (opcional)"</label>
                            <input
                                type="tel"
                                placeholder="Ej. 3001234567"
                                prop:value=move || phone.get()
                                on:input=move |ev| set_phone.set(event_target_value(&ev))
                                class="w-full mt-1 border rounded-md px-3 py-2 text-sm outline-blue-500"
                            />
                        </div>
                    })}

                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400 text-white py-2 rounded-md"
                    >
                        {move || {
                            if submitting.get() {
                                "Enviando..."
                            } else if is_login.get() {
                                "Iniciar Sesión"
                            } else {
                                "Registrarme"
                            }
                        }}
                    </button>
                </form>

                <p class="text-center text-sm text-gray-600 mt-4">
                    {move || if is_login.get() { "¿No tienes cuenta? " } else { "¿Ya tienes cuenta? " }}
                    <button
                        class="text-blue-600 font-medium hover:underline"
                        on:click=move |_| set_is_login.update(|v| *v = !*v)
                    >
                        {move || if is_login.get() { "Crea una" } else { "Inicia sesión" }}
                    </button>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_defaults_to_email_local_part() {
        assert_eq!(local_part("ana@mail.com"), "ana");
        assert_eq!(local_part("sin-arroba"), "sin-arroba");
    }
}
