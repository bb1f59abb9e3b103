//! About page: mission and how the platform works.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::reveal::Reveal;

/// About page.
#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About — HealthCore"/>

        <Reveal>
            <section class="section">
                <h1 class="section__title">"About HealthCore"</h1>
                <p>
                    "HealthCore started as a field tool for community health workers "
                    "collecting water samples by hand. Today it gathers turbidity, pH, "
                    "and chlorine readings alongside reported case counts, so the people "
                    "responsible for a water source can see trouble while it is still "
                    "cheap to fix."
                </p>
            </section>
        </Reveal>

        <Reveal>
            <section class="section">
                <h2 class="section__title">"How it works"</h2>
                <p>
                    "Field teams file location-tagged reports. Each report lands in a "
                    "shared dataset where a prediction model scores the outbreak risk "
                    "for that location. High-risk scores raise alerts for the local "
                    "health team; everything else simply builds the history that makes "
                    "the next prediction better."
                </p>
            </section>
        </Reveal>

        <Reveal>
            <section class="section">
                <h2 class="section__title">"Who we work with"</h2>
                <p>
                    "We partner with district health offices, water utilities, and the "
                    "volunteer networks that keep rural sampling running. If that "
                    "sounds like your team, get in touch through the contact page."
                </p>
            </section>
        </Reveal>
    }
}
