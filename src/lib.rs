//! # moviebox
//!
//! Leptos + WASM frontend for browsing a movie catalog and keeping a list of
//! saved movies in browser-local storage.
//!
//! This crate contains pages, components, application state, catalog client
//! types, and the saved-movie store. Browser-only code is compiled under the
//! `csr` feature; native builds get inert fallbacks so the state layer can be
//! tested with plain `cargo test`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let config = config::AppConfig::from_build_env();
    if console_log::init_with_level(config.log_level).is_err() {
        leptos::logging::warn!("logger already installed");
    }
    log::info!("starting moviebox");
    leptos::mount::mount_to_body(app::App);
}
