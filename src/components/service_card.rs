//! Service/feature card with pointer and focus elevation.

use leptos::prelude::*;

/// Card that lifts while hovered or focused. Purely presentational; no
/// state survives the interaction.
#[component]
pub fn ServiceCard(
    title: &'static str,
    blurb: &'static str,
    glyph: &'static str,
) -> impl IntoView {
    let raised = RwSignal::new(false);

    let class = move || {
        if raised.get() {
            "card card--raised"
        } else {
            "card"
        }
    };

    view! {
        <article
            class=class
            tabindex="0"
            on:pointerenter=move |_| raised.set(true)
            on:pointerleave=move |_| raised.set(false)
            on:focusin=move |_| raised.set(true)
            on:focusout=move |_| raised.set(false)
        >
            <span class="card__glyph" aria-hidden="true">
                {glyph}
            </span>
            <h3 class="card__title">{title}</h3>
            <p class="card__blurb">{blurb}</p>
        </article>
    }
}
