//! Local UI chrome state (applied theme, mobile navigation).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns in one small model so the header
//! and pages can share them through a single context signal.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::theme::Theme;

/// UI state for the applied theme and the collapsed navigation menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UiState {
    /// Theme currently applied to the document.
    pub theme: Theme,
    /// Whether the small-screen navigation menu is expanded.
    pub menu_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { theme: Theme::Light, menu_open: false }
    }
}
