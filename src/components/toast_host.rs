//! Toast notification rendering and lifecycle.
//!
//! ARCHITECTURE
//! ============
//! `state::notices` owns the list; this host owns the timing. Each toast
//! schedules its entrance on a near-zero timeout so the CSS transition
//! runs, then an auto-dismiss timer starts the exit transition and finally
//! removes the notice. The auto-dismiss handle is held per toast so a
//! manual dismiss cancels it; the idempotent `dismiss` keeps the remaining
//! fire-and-forget removal timers harmless.

#[cfg(test)]
#[path = "toast_host_test.rs"]
mod toast_host_test;

use leptos::prelude::*;

use crate::state::notices::{Notice, NoticesState, Severity};

#[cfg(feature = "csr")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;
#[cfg(feature = "csr")]
use uuid::Uuid;

/// Delay before the entrance transition class is applied.
pub const ENTER_TICK_MS: u32 = 16;

/// Duration of the exit transition before removal.
pub const EXIT_TRANSITION_MS: u32 = 300;

/// Full class list for a toast in the given lifecycle phase.
#[must_use]
pub fn toast_class(severity: Severity, entered: bool, leaving: bool) -> String {
    let mut class = format!("toast {}", severity.css_class());
    if entered && !leaving {
        class.push_str(" toast--visible");
    }
    class
}

/// Fixed-anchor stack rendering every live notice.
#[component]
pub fn ToastHost() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticesState>>();

    view! {
        <div class="toast-stack">
            <For each=move || notices.get().items key=|notice| notice.id let:notice>
                <ToastItem notice=notice/>
            </For>
        </div>
    }
}

#[cfg(feature = "csr")]
fn schedule_removal(notices: RwSignal<NoticesState>, id: Uuid) {
    notices.update(|state| state.mark_leaving(id));
    Timeout::new(EXIT_TRANSITION_MS, move || {
        notices.update(|state| state.dismiss(id));
    })
    .forget();
}

/// One banner. Owns its entrance tick and its cancellable auto-dismiss
/// timer; the dismiss affordance removes the notice early.
#[component]
fn ToastItem(notice: Notice) -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticesState>>();
    let id = notice.id;
    let severity = notice.severity;

    let entered = RwSignal::new(false);
    let leaving = move || notices.with(|state| state.items.iter().any(|n| n.id == id && n.leaving));

    #[cfg(feature = "csr")]
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    #[cfg(feature = "csr")]
    {
        Timeout::new(ENTER_TICK_MS, move || entered.set(true)).forget();
        let auto = Timeout::new(notice.duration_ms, move || {
            schedule_removal(notices, id);
        });
        *pending.borrow_mut() = Some(auto);
    }

    let on_dismiss = {
        #[cfg(feature = "csr")]
        {
            let pending = Rc::clone(&pending);
            move |_| {
                drop(pending.borrow_mut().take());
                schedule_removal(notices, id);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_| notices.update(|state| state.dismiss(id))
        }
    };

    view! {
        <div class=move || toast_class(severity, entered.get(), leaving()) role="status" aria-live="polite">
            <span class="toast__message">{notice.message.clone()}</span>
            <button class="toast__dismiss" aria-label="Dismiss notification" on:click=on_dismiss>
                "×"
            </button>
        </div>
    }
}
