//! Theme resolution, application, and toggle.
//!
//! Reads the user's preference from `localStorage` and applies a
//! `data-theme` attribute to the `<html>` element. Toggle writes back to
//! `localStorage` and updates that attribute. When no preference is
//! stored, the `prefers-color-scheme` media query decides, and a change
//! subscription keeps following the system until the user picks a side.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; non-csr
//! paths safely no-op so the native test build stays deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::util::storage;

#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, closure::Closure};

/// localStorage key holding the persisted preference.
pub const STORAGE_KEY: &str = "healthcore_theme";

#[cfg(feature = "csr")]
const SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// The two-value theme flag applied to the document root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The literal persisted/applied value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value; anything but the two literals is "unset".
    #[must_use]
    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// The other theme.
    #[must_use]
    pub fn invert(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Toggle-control glyph: shows the mode the toggle would switch to.
    #[must_use]
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            Theme::Light => "☾",
            Theme::Dark => "☀",
        }
    }

    /// Toggle-control tooltip: names the mode the toggle would switch to.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Switch to dark mode",
            Theme::Dark => "Switch to light mode",
        }
    }
}

/// Resolve the effective theme: an explicit stored preference wins,
/// otherwise the system preference decides.
#[must_use]
pub fn resolve(stored: Option<Theme>, system_dark: bool) -> Theme {
    stored.unwrap_or(if system_dark { Theme::Dark } else { Theme::Light })
}

/// Read the stored preference, if the user ever made one.
#[must_use]
pub fn read_preference() -> Option<Theme> {
    storage::load_string(STORAGE_KEY).and_then(|raw| Theme::parse(&raw))
}

/// Whether the environment currently reports a dark color scheme.
#[must_use]
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media(SCHEME_QUERY).ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// The theme that should be applied right now.
#[must_use]
pub fn current() -> Theme {
    resolve(read_preference(), system_prefers_dark())
}

/// Apply the `data-theme` attribute on the `<html>` element. A missing
/// document root is tolerated silently.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", theme.as_str());
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Invert `current`, apply the result, and persist it as the explicit
/// preference. Returns the newly applied theme.
pub fn toggle(current: Theme) -> Theme {
    let next = current.invert();
    apply(next);
    storage::save_string(STORAGE_KEY, next.as_str());
    next
}

/// Follow system preference changes while no explicit preference is
/// stored. Once the user has toggled, the stored choice is sticky and
/// change events are ignored. `on_apply` observes every re-application.
pub fn watch_system(on_apply: impl Fn(Theme) + 'static) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(Some(query)) = window.match_media(SCHEME_QUERY) else {
            return;
        };
        let cb = Closure::wrap(Box::new(move |ev: web_sys::MediaQueryListEvent| {
            if read_preference().is_some() {
                return;
            }
            let next = resolve(None, ev.matches());
            apply(next);
            on_apply(next);
        }) as Box<dyn FnMut(web_sys::MediaQueryListEvent)>);
        let _ = query.add_event_listener_with_callback("change", cb.as_ref().unchecked_ref());
        cb.forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = on_apply;
    }
}
