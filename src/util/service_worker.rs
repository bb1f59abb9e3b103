//! Service worker registration stub.
//!
//! Registration is attempted once at startup; rejection is swallowed with
//! a debug log and the site continues without a worker. No user-visible
//! error, no retry.

#[cfg(test)]
#[path = "service_worker_test.rs"]
mod service_worker_test;

/// Fixed path of the worker asset, copied into the site root at build time.
pub const SERVICE_WORKER_PATH: &str = "/sw.js";

/// Kick off registration and forget about it.
pub fn register() {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let promise = window.navigator().service_worker().register(SERVICE_WORKER_PATH);
        leptos::task::spawn_local(async move {
            if wasm_bindgen_futures::JsFuture::from(promise).await.is_err() {
                log::debug!("service worker registration failed; continuing without it");
            }
        });
    }
}
