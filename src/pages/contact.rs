//! Contact page: the appointment/contact form.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::contact_form::ContactForm;
use crate::components::reveal::Reveal;

/// Contact page.
#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Title text="Contact — HealthCore"/>

        <Reveal>
            <section class="section">
                <h1 class="section__title">"Contact us"</h1>
                <p>
                    "Tell us about your district and we will set up a time to talk "
                    "through a deployment."
                </p>
            </section>
        </Reveal>

        <Reveal>
            <section class="section">
                <ContactForm/>
            </section>
        </Reveal>
    }
}
