//! Landing page: hero, appointment call-to-action, monitoring overview.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::reveal::Reveal;
use crate::components::service_card::ServiceCard;
use crate::state::notices::{NoticesState, Severity};
use crate::util::scroll;

const MONITORING_ANCHOR: &str = "#monitoring";

/// Landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticesState>>();

    let cta_raised = RwSignal::new(false);

    let on_appointment = move |_| {
        notices.update(|state| {
            let _ = state.push("Appointment booking is coming soon.", Severity::Info);
        });
    };

    let on_learn_more = move |ev: leptos::ev::MouseEvent| {
        if let Some(fragment) = scroll::fragment_from_href(MONITORING_ANCHOR) {
            ev.prevent_default();
            scroll::scroll_to_fragment(fragment);
        }
    };

    view! {
        <Title text="HealthCore — Safe water, healthy communities"/>

        <Reveal>
            <section class="hero">
                <h1 class="hero__title">"Safe water, healthy communities."</h1>
                <p class="hero__lead">
                    "HealthCore tracks water quality across the communities we serve and "
                    "turns field reports into early warnings before outbreaks spread."
                </p>
                <div class="hero__actions">
                    <button
                        class=move || if cta_raised.get() { "btn btn--primary btn--raised" } else { "btn btn--primary" }
                        on:pointerenter=move |_| cta_raised.set(true)
                        on:pointerleave=move |_| cta_raised.set(false)
                        on:focus=move |_| cta_raised.set(true)
                        on:blur=move |_| cta_raised.set(false)
                        on:click=on_appointment
                    >
                        "Book an appointment"
                    </button>
                    <a class="btn btn--ghost" href=MONITORING_ANCHOR on:click=on_learn_more>
                        "See what we monitor"
                    </a>
                </div>
            </section>
        </Reveal>

        <section class="section" id="monitoring">
            <Reveal>
                <h2 class="section__title">"What we monitor"</h2>
            </Reveal>
            <div class="section__cards">
                <Reveal>
                    <ServiceCard
                        glyph="💧"
                        title="Water quality"
                        blurb="Turbidity, pH, and chlorine levels from every reporting site, updated as field teams check in."
                    />
                </Reveal>
                <Reveal>
                    <ServiceCard
                        glyph="📈"
                        title="Outbreak signals"
                        blurb="Case counts and water readings feed a prediction model that flags at-risk locations early."
                    />
                </Reveal>
                <Reveal>
                    <ServiceCard
                        glyph="📣"
                        title="Community alerts"
                        blurb="When a location trends toward risk, local health workers get an alert with the readings behind it."
                    />
                </Reveal>
            </div>
        </section>
    }
}
