use super::*;

#[test]
fn empty_value_is_flagged_as_error() {
    assert_eq!(field_state(""), FieldState::Error);
}

#[test]
fn whitespace_only_value_is_flagged_as_error() {
    assert_eq!(field_state("   \t"), FieldState::Error);
}

#[test]
fn non_empty_value_is_flagged_as_success() {
    assert_eq!(field_state("a@b.com"), FieldState::Success);
    assert_eq!(field_state("  padded  "), FieldState::Success);
}

#[test]
fn validate_fails_when_any_required_field_is_empty() {
    // name="" and email="a@b.com": invalid overall, only name flagged.
    let name = "";
    let email = "a@b.com";
    assert!(!validate([name, email]));
    assert_eq!(field_state(name), FieldState::Error);
    assert_eq!(field_state(email), FieldState::Success);
}

#[test]
fn validate_passes_when_all_required_fields_are_filled() {
    assert!(validate(["Ada", "a@b.com", "Hello there"]));
}

#[test]
fn validate_passes_for_no_required_fields() {
    assert!(validate(std::iter::empty::<&str>()));
}

#[test]
fn state_classes_map_to_visual_modifiers() {
    assert_eq!(state_class(Some(FieldState::Error)), "field--error");
    assert_eq!(state_class(Some(FieldState::Success)), "field--success");
    assert_eq!(state_class(None), "");
}
