//! # contygo
//!
//! Leptos + WASM single-page client for the Contygo psychology practice
//! manager: patients, sessions, appointments, resources, billing, the wait
//! list, and the psychologist's public profile.
//!
//! The remote API owns all data and the session cookie. This crate holds the
//! session gate, the route trees, the typed API client, and the page views.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: logging, panic hook, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let level = config::ClientConfig::from_build_env().log_level.as_log_level();
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger already initialised: {e}").into());
    }
    log::info!("contygo client starting");
    leptos::mount::mount_to_body(app::App);
}
