//! # client
//!
//! Leptos + WASM frontend for the RB Athletics personal-training site.
//!
//! This crate contains the landing page, its section components, the static
//! content tables, the page-local UI state machines, and the form-intake seam.
//! The server crate renders it with SSR; the `hydrate` build takes over in the
//! browser.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
