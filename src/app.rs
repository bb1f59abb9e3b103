//! Root application component with routing, shared state, and startup
//! wiring for the page-level watchers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_header::NavHeader;
use crate::components::toast_host::ToastHost;
use crate::pages::{about::AboutPage, contact::ContactPage, home::HomePage, services::ServicesPage};
use crate::state::{notices::NoticesState, ui::UiState};
#[cfg(feature = "csr")]
use crate::util::{service_worker, theme, watchers};

/// Root application component.
///
/// Owns the shared state signals (no module globals), applies the resolved
/// theme before first paint, and registers the connectivity/error watchers
/// and the service-worker stub once per page lifecycle.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let notices = RwSignal::new(NoticesState::default());
    provide_context(ui);
    provide_context(notices);

    #[cfg(feature = "csr")]
    {
        let initial = theme::current();
        theme::apply(initial);
        ui.update(|u| u.theme = initial);
        theme::watch_system(move |applied| ui.update(|u| u.theme = applied));

        watchers::attach(notices);
        service_worker::register();
    }

    view! {
        <Title text="HealthCore"/>

        <Router>
            <NavHeader/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("services") view=ServicesPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                </Routes>
            </main>
            <ToastHost/>
        </Router>
    }
}
