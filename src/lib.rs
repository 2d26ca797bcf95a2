//! # portal
//!
//! Leptos + WASM single-page login portal. A thin client that authenticates
//! against a remote HTTP API, keeps the session in a reactive auth state
//! container, and persists the auth slice to `localStorage` so a reload
//! restores the signed-in view.
//!
//! This crate contains pages, components, application state, the REST API
//! client, and the localStorage persistence helpers.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point invoked by the generated JS shim after load.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
