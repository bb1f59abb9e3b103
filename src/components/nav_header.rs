//! Site header: brand, navigation links, and the theme toggle.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::ui::UiState;
use crate::util::nav::{NAV_LINKS, is_active};
use crate::util::theme;

/// Header shown on every page.
///
/// The link matching the current path exactly is marked active; the theme
/// toggle shows the mode it would switch to and persists each choice.
#[component]
pub fn NavHeader() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();
    let pathname = location.pathname;

    let on_toggle_theme = move |_| {
        let next = theme::toggle(ui.get().theme);
        ui.update(|u| u.theme = next);
    };

    let on_toggle_menu = move |_| ui.update(|u| u.menu_open = !u.menu_open);

    let links_class = move || {
        if ui.get().menu_open {
            "nav__links nav__links--open"
        } else {
            "nav__links"
        }
    };

    view! {
        <header class="nav">
            <a class="nav__brand" href="/">
                "HealthCore"
            </a>

            <button class="nav__menu-toggle" aria-label="Toggle navigation menu" on:click=on_toggle_menu>
                "☰"
            </button>

            <nav class=links_class>
                {NAV_LINKS
                    .iter()
                    .map(|(path, label)| {
                        let path = *path;
                        let class = move || {
                            if is_active(path, &pathname.get()) {
                                "nav__link nav__link--active"
                            } else {
                                "nav__link"
                            }
                        };
                        view! {
                            <a class=class href=path>
                                {*label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}

                <button
                    class="nav__theme-toggle"
                    on:click=on_toggle_theme
                    title=move || ui.get().theme.toggle_label()
                >
                    {move || ui.get().theme.toggle_glyph()}
                </button>
            </nav>
        </header>
    }
}
