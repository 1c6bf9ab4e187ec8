//! # portfolio
//!
//! Leptos + WASM single-page portfolio.
//!
//! The page itself is mostly static markup. The interesting part is the
//! presentation core in `state`: theme persistence, scroll-driven header
//! state, the mobile navigation menu, the simulated loading sequence and
//! project filtering. Browser access sits behind the traits in `platform`.

pub mod app;
pub mod components;
pub mod config;
pub mod consts;
pub mod content;
pub mod error;
pub mod platform;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the page.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {err}");
    }
    leptos::mount::mount_to_body(app::App);
}
