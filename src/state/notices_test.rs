use super::*;

// =============================================================
// Pushing
// =============================================================

#[test]
fn push_appends_a_notice_with_default_duration() {
    let mut state = NoticesState::default();
    let id = state.push("saved", Severity::Success);
    assert_eq!(state.items.len(), 1);
    assert!(state.contains(id));
    assert_eq!(state.items[0].duration_ms, DEFAULT_DURATION_MS);
    assert_eq!(state.items[0].message, "saved");
    assert!(!state.items[0].leaving);
}

#[test]
fn push_with_duration_keeps_explicit_duration() {
    let mut state = NoticesState::default();
    state.push_with_duration("quick", Severity::Info, 1200);
    assert_eq!(state.items[0].duration_ms, 1200);
}

#[test]
fn pushed_notices_have_distinct_ids() {
    let mut state = NoticesState::default();
    let a = state.push("one", Severity::Info);
    let b = state.push("one", Severity::Info);
    assert_ne!(a, b);
}

#[test]
fn notices_render_in_push_order() {
    let mut state = NoticesState::default();
    state.push("first", Severity::Info);
    state.push("second", Severity::Warning);
    assert_eq!(state.items[0].message, "first");
    assert_eq!(state.items[1].message, "second");
}

// =============================================================
// Dismissal
// =============================================================

#[test]
fn dismiss_removes_only_the_target() {
    let mut state = NoticesState::default();
    let a = state.push("keep", Severity::Info);
    let b = state.push("drop", Severity::Error);
    state.dismiss(b);
    assert!(state.contains(a));
    assert!(!state.contains(b));
    assert_eq!(state.items.len(), 1);
}

#[test]
fn dismiss_is_idempotent() {
    let mut state = NoticesState::default();
    let id = state.push("once", Severity::Info);
    state.dismiss(id);
    // The auto-removal timer firing after a manual dismiss hits this path.
    state.dismiss(id);
    assert!(state.items.is_empty());
}

#[test]
fn dismiss_unknown_id_is_a_noop() {
    let mut state = NoticesState::default();
    state.push("present", Severity::Info);
    state.dismiss(Uuid::new_v4());
    assert_eq!(state.items.len(), 1);
}

// =============================================================
// Leaving flag
// =============================================================

#[test]
fn mark_leaving_sets_the_flag() {
    let mut state = NoticesState::default();
    let id = state.push("bye", Severity::Info);
    state.mark_leaving(id);
    assert!(state.items[0].leaving);
}

#[test]
fn mark_leaving_unknown_id_is_a_noop() {
    let mut state = NoticesState::default();
    state.mark_leaving(Uuid::new_v4());
    assert!(state.items.is_empty());
}

// =============================================================
// Severity
// =============================================================

#[test]
fn severity_default_is_info() {
    assert_eq!(Severity::default(), Severity::Info);
}

#[test]
fn severity_css_classes_are_distinct() {
    let classes = [
        Severity::Info.css_class(),
        Severity::Success.css_class(),
        Severity::Warning.css_class(),
        Severity::Error.css_class(),
    ];
    for (i, a) in classes.iter().enumerate() {
        for (j, b) in classes.iter().enumerate() {
            if i != j {
                assert_ne!(a, b);
            }
        }
    }
}
