//! # client
//!
//! Leptos + WASM frontend for the customer desk.
//!
//! This crate contains the customers page, its components, page-scoped state,
//! the repository abstraction over the customers REST API, and small browser
//! utilities. The server renders it with the `ssr` feature; the browser
//! hydrates it with the `hydrate` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
