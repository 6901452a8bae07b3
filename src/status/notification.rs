//! Single-slot user-facing notification state.

use tokio::sync::watch;

/// Severity/category of a notification, mapped by the UI to visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

/// The one process-wide notification slot.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationState {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
    pub visible: bool,
}

impl NotificationState {
    fn hidden() -> Self {
        Self {
            kind: NotificationKind::Info,
            title: String::new(),
            description: String::new(),
            visible: false,
        }
    }
}

/// Coordinator for the single notification slot.
///
/// Written by any in-flight call (timer warnings, aborts, settle handlers)
/// and by explicit UI action; read by the presentation layer through
/// [`NotificationHub::subscribe`].
pub struct NotificationHub {
    slot: watch::Sender<NotificationState>,
}

impl NotificationHub {
    pub fn new() -> Self {
        let (slot, _) = watch::channel(NotificationState::hidden());
        Self { slot }
    }

    /// Replace the slot with a visible notification.
    pub fn show(
        &self,
        kind: NotificationKind,
        title: impl Into<String>,
        description: impl Into<String>,
    ) {
        self.slot.send_replace(NotificationState {
            kind,
            title: title.into(),
            description: description.into(),
            visible: true,
        });
    }

    /// Hide the slot, keeping its last contents.
    pub fn hide(&self) {
        self.slot.send_modify(|state| state.visible = false);
    }

    /// Show an error unless the slot is already showing a different,
    /// still-visible error.
    ///
    /// Settle handlers call this immediately after an unconditional
    /// [`NotificationHub::hide`], so for a single call the guard never
    /// triggers; it only matters when another call's settle handler
    /// interleaves between the hide and this show. That ordering is the
    /// observed reference behavior and is preserved as-is.
    ///
    /// Returns whether the error was shown.
    pub fn show_error_unless_shadowed(&self, title: &str, description: &str) -> bool {
        let mut shown = false;
        self.slot.send_if_modified(|state| {
            let shadowed = state.visible
                && state.kind == NotificationKind::Error
                && (state.title != title || state.description != description);
            if shadowed {
                return false;
            }
            *state = NotificationState {
                kind: NotificationKind::Error,
                title: title.to_string(),
                description: description.to_string(),
                visible: true,
            };
            shown = true;
            true
        });
        shown
    }

    /// Snapshot of the slot.
    pub fn current(&self) -> NotificationState {
        self.slot.borrow().clone()
    }

    /// Read-only subscription for the presentation layer's toast/banner.
    pub fn subscribe(&self) -> watch::Receiver<NotificationState> {
        self.slot.subscribe()
    }
}

impl Default for NotificationHub {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_then_hide_keeps_contents() {
        let hub = NotificationHub::new();
        hub.show(NotificationKind::Success, "Saved", "Your changes were saved");
        assert!(hub.current().visible);

        hub.hide();
        let state = hub.current();
        assert!(!state.visible);
        assert_eq!(state.title, "Saved");
    }

    #[test]
    fn visible_foreign_error_shadows_new_error() {
        let hub = NotificationHub::new();
        hub.show(NotificationKind::Error, "Request failed", "first failure");

        let shown = hub.show_error_unless_shadowed("Request failed", "second failure");
        assert!(!shown);
        assert_eq!(hub.current().description, "first failure");
    }

    #[test]
    fn hidden_error_does_not_shadow() {
        let hub = NotificationHub::new();
        hub.show(NotificationKind::Error, "Request failed", "first failure");
        hub.hide();

        let shown = hub.show_error_unless_shadowed("Request failed", "second failure");
        assert!(shown);
        let state = hub.current();
        assert!(state.visible);
        assert_eq!(state.description, "second failure");
    }

    #[test]
    fn identical_error_is_reshown() {
        let hub = NotificationHub::new();
        hub.show(NotificationKind::Error, "Request failed", "same failure");

        let shown = hub.show_error_unless_shadowed("Request failed", "same failure");
        assert!(shown);
    }

    #[test]
    fn non_error_notifications_never_shadow() {
        let hub = NotificationHub::new();
        hub.show(NotificationKind::Warning, "Still working", "slow call");

        let shown = hub.show_error_unless_shadowed("Request failed", "failure");
        assert!(shown);
        assert_eq!(hub.current().kind, NotificationKind::Error);
    }
}
