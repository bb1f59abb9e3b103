//! # healthcore-client
//!
//! Leptos + WASM frontend for the HealthCore marketing site. Replaces the
//! hand-written page script with a Rust-native UI layer: persisted
//! light/dark theme, toast notifications, scroll-reveal animation,
//! navigation highlighting, form validation, and connectivity/error
//! surfacing.
//!
//! Browser behavior is gated behind the `csr` feature; without it every
//! browser wrapper is a safe no-op, which keeps the native test build
//! deterministic.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// CSR entry point. Installs the panic hook and console logger, then
/// mounts the application onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("healthcore client starting");
    leptos::mount::mount_to_body(crate::app::App);
}
