#![cfg(not(feature = "csr"))]

use super::*;

// =============================================================
// Literal values
// =============================================================

#[test]
fn as_str_uses_the_persisted_literals() {
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Dark.as_str(), "dark");
}

#[test]
fn parse_accepts_only_the_two_literals() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse(""), None);
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse("auto"), None);
}

#[test]
fn parse_round_trips_as_str() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::parse(theme.as_str()), Some(theme));
    }
}

// =============================================================
// Resolution precedence
// =============================================================

#[test]
fn stored_preference_wins_over_system() {
    assert_eq!(resolve(Some(Theme::Light), true), Theme::Light);
    assert_eq!(resolve(Some(Theme::Dark), false), Theme::Dark);
}

#[test]
fn absent_preference_follows_system() {
    assert_eq!(resolve(None, true), Theme::Dark);
    assert_eq!(resolve(None, false), Theme::Light);
}

// =============================================================
// Toggle
// =============================================================

#[test]
fn toggle_inverts() {
    assert_eq!(toggle(Theme::Light), Theme::Dark);
    assert_eq!(toggle(Theme::Dark), Theme::Light);
}

#[test]
fn double_toggle_restores_the_original_theme() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(toggle(toggle(theme)), theme);
    }
}

#[test]
fn toggle_controls_describe_the_opposite_mode() {
    assert_eq!(Theme::Light.toggle_glyph(), "☾");
    assert_eq!(Theme::Dark.toggle_glyph(), "☀");
    assert!(Theme::Light.toggle_label().contains("dark"));
    assert!(Theme::Dark.toggle_label().contains("light"));
}

// =============================================================
// Browser wrappers degrade to no-ops
// =============================================================

#[test]
fn read_preference_is_none_without_a_browser() {
    assert_eq!(read_preference(), None);
}

#[test]
fn current_falls_back_to_light_without_a_browser() {
    assert!(!system_prefers_dark());
    assert_eq!(current(), Theme::Light);
}

#[test]
fn apply_and_watch_are_noop_but_callable() {
    apply(Theme::Dark);
    watch_system(|_| {});
}
