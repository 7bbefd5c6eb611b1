//! # client
//!
//! Leptos + WASM frontend for the character finder application: a public
//! character lookup UI plus a locally persisted user profile. Pages,
//! components, profile domain state, the network boundary, and browser glue
//! live here; the `server` crate only hosts the SSR shell.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: take over the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
