//! # storefront
//!
//! Leptos + WASM client for the product-discovery storefront: a searchable
//! product catalog, product detail pages, and an AI shopping assistant.
//!
//! The catalog backend sleeps when idle, so catalog retrieval retries on a
//! fixed schedule while it wakes up. Core state machines live in `state`,
//! the async drivers and HTTP client in `net`; `pages` and `components` only
//! render them.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger was already installed");
    }
    leptos::mount::mount_to_body(app::App);
}
