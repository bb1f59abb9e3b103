//! Connectivity and uncaught-error watchers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Purely observational forwarding: environment events become notices, and
//! nothing is retried or recovered. The severity/message mapping is kept
//! pure so it can be exercised without a browser; `attach` is the thin
//! listener shim.

#[cfg(test)]
#[path = "watchers_test.rs"]
mod watchers_test;

use leptos::prelude::*;

use crate::state::notices::{NoticesState, Severity};

#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Notice for a connectivity transition.
#[must_use]
pub fn connectivity_notice(online: bool) -> (Severity, &'static str) {
    if online {
        (Severity::Success, "Connection restored. You are back online.")
    } else {
        (
            Severity::Warning,
            "You appear to be offline. Some features may be unavailable.",
        )
    }
}

/// Notice for an uncaught page error.
#[must_use]
pub fn error_notice() -> (Severity, &'static str) {
    (Severity::Error, "Something went wrong. Please refresh the page.")
}

/// Register window-level listeners that forward `online`, `offline`, and
/// uncaught `error` events into the notice list.
pub fn attach(notices: RwSignal<NoticesState>) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        attach_connectivity(&window, notices, true);
        attach_connectivity(&window, notices, false);

        let cb = Closure::wrap(Box::new(move |ev: web_sys::ErrorEvent| {
            log::error!("uncaught page error: {}", ev.message());
            let (severity, message) = error_notice();
            notices.update(|state| {
                let _ = state.push(message, severity);
            });
        }) as Box<dyn FnMut(web_sys::ErrorEvent)>);
        let _ = window.add_event_listener_with_callback("error", cb.as_ref().unchecked_ref());
        cb.forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = notices;
    }
}

#[cfg(feature = "csr")]
fn attach_connectivity(window: &web_sys::Window, notices: RwSignal<NoticesState>, online: bool) {
    let event = if online { "online" } else { "offline" };
    let cb = Closure::wrap(Box::new(move || {
        let (severity, message) = connectivity_notice(online);
        notices.update(|state| {
            let _ = state.push(message, severity);
        });
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
    cb.forget();
}
