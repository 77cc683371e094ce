//! # client
//!
//! Leptos + WASM frontend for the StreamApp account pages: login, register
//! and a cookie-gated profile view. All authentication is delegated to the
//! external Auth API; this crate only relays the session cookie and decides
//! where to navigate.

pub mod app;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered `App`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
