//! Transient notification state.
//!
//! DESIGN
//! ======
//! Notices are independent and unordered: pushing appends, dismissal
//! removes by id, and dismissing an id that is already gone is a no-op.
//! That idempotence is what lets the auto-dismiss timer and the manual
//! dismiss button race without coordination. Rendering and timer
//! scheduling live in `components::toast_host`.

#[cfg(test)]
#[path = "notices_test.rs"]
mod notices_test;

use uuid::Uuid;

/// Default display duration before a notice starts leaving.
pub const DEFAULT_DURATION_MS: u32 = 5000;

/// Visual severity of a notice; keys the banner color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// CSS modifier class for the toast element.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Info => "toast--info",
            Severity::Success => "toast--success",
            Severity::Warning => "toast--warning",
            Severity::Error => "toast--error",
        }
    }
}

/// A single transient banner.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: Uuid,
    pub message: String,
    pub severity: Severity,
    pub duration_ms: u32,
    /// Set when the exit transition has started; the notice is removed
    /// once the transition interval elapses.
    pub leaving: bool,
}

/// The live notice list, rendered in document order at a fixed anchor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoticesState {
    pub items: Vec<Notice>,
}

impl NoticesState {
    /// Append a notice with the default display duration.
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> Uuid {
        self.push_with_duration(message, severity, DEFAULT_DURATION_MS)
    }

    /// Append a notice with an explicit display duration.
    pub fn push_with_duration(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        duration_ms: u32,
    ) -> Uuid {
        let id = Uuid::new_v4();
        self.items.push(Notice {
            id,
            message: message.into(),
            severity,
            duration_ms,
            leaving: false,
        });
        id
    }

    /// Start the exit transition for `id`. No-op for unknown ids.
    pub fn mark_leaving(&mut self, id: Uuid) {
        if let Some(notice) = self.items.iter_mut().find(|n| n.id == id) {
            notice.leaving = true;
        }
    }

    /// Remove the notice with `id`. Removing an absent id is a no-op.
    pub fn dismiss(&mut self, id: Uuid) {
        self.items.retain(|n| n.id != id);
    }

    /// Whether `id` is still present.
    #[must_use]
    pub fn contains(&self, id: Uuid) -> bool {
        self.items.iter().any(|n| n.id == id)
    }
}
