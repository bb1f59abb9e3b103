//! Required-field form validation.
//!
//! Purely local and synchronous: values are trimmed, empty ones get an
//! error flag and non-empty ones a success flag, and a form is valid when
//! every required value is non-empty. The DOM layer maps flags to visual
//! classes; nothing here touches the document.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Visual validation state for a single required field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldState {
    Success,
    Error,
}

impl FieldState {
    /// CSS modifier class for the field wrapper.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            FieldState::Success => "field--success",
            FieldState::Error => "field--error",
        }
    }
}

/// Flag a single required value: whitespace-only counts as empty.
#[must_use]
pub fn field_state(value: &str) -> FieldState {
    if value.trim().is_empty() {
        FieldState::Error
    } else {
        FieldState::Success
    }
}

/// Whether every required value is non-empty after trimming.
pub fn validate<'a>(values: impl IntoIterator<Item = &'a str>) -> bool {
    values
        .into_iter()
        .all(|value| field_state(value) == FieldState::Success)
}

/// Class fragment for a field that may not have been validated yet.
#[must_use]
pub fn state_class(state: Option<FieldState>) -> &'static str {
    state.map_or("", FieldState::css_class)
}
