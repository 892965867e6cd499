//! # client
//!
//! Leptos + WASM frontend for the login form.
//!
//! This crate contains the form state model, the `LoginForm` component and
//! the `App` root with its SSR shell. The `server` crate renders `App` with
//! the `ssr` feature; the browser bundle hydrates it with the `hydrate`
//! feature.

pub mod app;
pub mod components;
pub mod state;

/// WASM entry point: hydrates the server-rendered `App` in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
