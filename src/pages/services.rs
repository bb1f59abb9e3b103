//! Services page: the full card grid of what the platform offers.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::reveal::Reveal;
use crate::components::service_card::ServiceCard;

/// Services page.
#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <Title text="Services — HealthCore"/>

        <Reveal>
            <section class="section">
                <h1 class="section__title">"Services"</h1>
                <p>
                    "Everything below runs on the same report stream; pick the pieces "
                    "your district needs."
                </p>
            </section>
        </Reveal>

        <section class="section">
            <div class="section__cards">
                <Reveal>
                    <ServiceCard
                        glyph="💧"
                        title="Water quality monitoring"
                        blurb="Continuous tracking of turbidity, pH, and chlorine across your reporting sites, with per-location history."
                    />
                </Reveal>
                <Reveal>
                    <ServiceCard
                        glyph="🧪"
                        title="Field reporting"
                        blurb="Simple structured reports for sampling teams: symptoms, case counts, readings, and location in one submission."
                    />
                </Reveal>
                <Reveal>
                    <ServiceCard
                        glyph="📈"
                        title="Outbreak prediction"
                        blurb="A model scores each location's outbreak risk from its recent readings and case history."
                    />
                </Reveal>
                <Reveal>
                    <ServiceCard
                        glyph="📣"
                        title="Health alerts"
                        blurb="Risk thresholds trigger alerts to district health teams with the data that raised them."
                    />
                </Reveal>
            </div>
        </section>
    }
}
