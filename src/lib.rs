//! # os-front
//!
//! Leptos + WASM front-end for the maintenance-tracking ("ordem de serviço")
//! system: login and registration screens, a persisted auth session, and the
//! guarded maintenance and history views.
//!
//! The `hydrate` feature builds the browser bundle, `ssr` builds the Axum host
//! that renders the shell. With neither feature every browser-only path is a
//! no-op so session, routing, and validation logic can be tested natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: installs console logging and hydrates the SSR shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
