//! Scroll-reveal wrapper.
//!
//! Wraps a block in a `reveal` container and registers it with the
//! one-shot observer; CSS drives the actual transition when the
//! `revealed` class lands.

use leptos::html::Div;
use leptos::prelude::*;

/// Container that fades/slides its children in the first time it scrolls
/// into view. Once revealed it stays revealed.
#[component]
pub fn Reveal(children: Children) -> impl IntoView {
    let node = NodeRef::<Div>::new();

    #[cfg(feature = "csr")]
    Effect::new(move || {
        if let Some(el) = node.get() {
            crate::util::reveal::observe_once(el.as_ref());
        }
    });

    view! {
        <div class="reveal" node_ref=node>
            {children()}
        </div>
    }
}
