//! Appointment/contact form wired to the required-field validator.

use leptos::prelude::*;

use crate::state::notices::{NoticesState, Severity};
use crate::util::form::{self, FieldState};

/// One labelled required input with its validation state.
#[component]
fn RequiredField(
    label: &'static str,
    name: &'static str,
    input_type: &'static str,
    value: RwSignal<String>,
    state: RwSignal<Option<FieldState>>,
) -> impl IntoView {
    let focused = RwSignal::new(false);

    let class = move || {
        let mut class = format!("field {}", form::state_class(state.get()));
        if focused.get() {
            class.push_str(" field--raised");
        }
        class
    };

    view! {
        <label class=class>
            <span class="field__label">{label}</span>
            <input
                class="field__input"
                type=input_type
                name=name
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                on:focus=move |_| focused.set(true)
                on:blur=move |_| focused.set(false)
            />
        </label>
    }
}

/// Contact form: name, email, and message are all required. Submission
/// validates locally, flags each field, and surfaces a success notice
/// when everything is filled in.
#[component]
pub fn ContactForm() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticesState>>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let name_state = RwSignal::new(None::<FieldState>);
    let email_state = RwSignal::new(None::<FieldState>);
    let message_state = RwSignal::new(None::<FieldState>);

    let message_focused = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let values = [name.get(), email.get(), message.get()];
        name_state.set(Some(form::field_state(&values[0])));
        email_state.set(Some(form::field_state(&values[1])));
        message_state.set(Some(form::field_state(&values[2])));

        if form::validate(values.iter().map(String::as_str)) {
            notices.update(|state| {
                let _ = state.push(
                    "Thanks! Your appointment request has been received.",
                    Severity::Success,
                );
            });
            name.set(String::new());
            email.set(String::new());
            message.set(String::new());
            name_state.set(None);
            email_state.set(None);
            message_state.set(None);
        }
    };

    let message_class = move || {
        let mut class = format!("field {}", form::state_class(message_state.get()));
        if message_focused.get() {
            class.push_str(" field--raised");
        }
        class
    };

    view! {
        <form class="contact-form" novalidate=true on:submit=on_submit>
            <RequiredField label="Name" name="name" input_type="text" value=name state=name_state/>
            <RequiredField label="Email" name="email" input_type="email" value=email state=email_state/>

            <label class=message_class>
                <span class="field__label">"Message"</span>
                <textarea
                    class="field__input field__input--area"
                    name="message"
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                    on:focus=move |_| message_focused.set(true)
                    on:blur=move |_| message_focused.set(false)
                ></textarea>
            </label>

            <button class="btn btn--primary" type="submit">
                "Request appointment"
            </button>
        </form>
    }
}
