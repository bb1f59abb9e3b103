//! One-shot scroll-reveal observation.
//!
//! Each opted-in element is watched by an `IntersectionObserver`; the
//! first time it is sufficiently visible it gains the persistent
//! `revealed` class and observation stops. Scrolling the element back out
//! of view never unmarks it.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

/// Fraction of the element that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// Class added when an element has been revealed.
pub const REVEALED_CLASS: &str = "revealed";

/// Whether an observed intersection ratio counts as sufficiently visible.
#[must_use]
pub fn should_reveal(ratio: f64) -> bool {
    ratio >= REVEAL_THRESHOLD
}

/// Observe `el` and add [`REVEALED_CLASS`] the first time it becomes
/// sufficiently visible, then stop watching it. Observer construction
/// failures leave the element unrevealed rather than erroring.
#[cfg(feature = "csr")]
pub fn observe_once(el: &web_sys::Element) {
    let cb = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1(REVEALED_CLASS);
                    observer.unobserve(&target);
                    observer.disconnect();
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    if let Ok(observer) =
        web_sys::IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &options)
    {
        observer.observe(el);
    }
    cb.forget();
}
