//! Monedero Digital
//!
//! Personal finance dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Email/password login and registration against the Monedero REST API
//! - Spending categories with per-category expense tracking
//! - Income/expense/balance totals computed client-side
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All persistence, validation and authentication live in the
//! external REST backend; this crate is presentation and API-call glue.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;
mod summary;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
