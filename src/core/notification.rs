//! # Transient Notification
//!
//! Reports the outcome of the latest submission and hides itself after
//! [`DISMISS_AFTER`].
//!
//! ```text
//!            show(outcome)            expire(id) / dismiss()
//!   Hidden ───────────────► Visible ─────────────────────────► Hidden
//!                             │  ▲
//!                             └──┘ show(outcome): message replaced,
//!                                  new id, new window
//! ```
//!
//! There is no queue: the latest outcome replaces whatever is on screen.
//! Every `show` hands out a fresh [`NotificationId`]. The dismiss timer is
//! armed with that id, and an expiry only takes effect if the id still
//! matches, so a timer from an earlier display can never hide a later one.

use std::time::Duration;

use crate::core::submission::{FailureReason, SubmissionOutcome};

/// How long a notification stays up without user action.
pub const DISMISS_AFTER: Duration = Duration::from_millis(3000);

pub const SUCCESS_MESSAGE: &str = "Message Sent Successfully!";
pub const REJECTED_MESSAGE: &str = "Something went wrong. Try again.";
pub const NETWORK_MESSAGE: &str = "Network error. Please try again.";
pub const SUBTITLE: &str = "Thank you for reaching out!";

/// Identifies one display of the notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    #[default]
    Success,
    Failure,
}

/// What the overlay shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationState {
    pub visible: bool,
    pub message: String,
    pub kind: NotificationKind,
}

/// The single notification slot and its display generation.
#[derive(Debug, Default)]
pub struct Notification {
    state: NotificationState,
    generation: u64,
}

impl Notification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display `outcome`, replacing anything currently shown.
    pub fn show(&mut self, outcome: SubmissionOutcome) -> NotificationId {
        let (kind, message) = match outcome {
            SubmissionOutcome::Success => (NotificationKind::Success, SUCCESS_MESSAGE),
            SubmissionOutcome::Failure(FailureReason::ServerRejected) => {
                (NotificationKind::Failure, REJECTED_MESSAGE)
            }
            SubmissionOutcome::Failure(FailureReason::NetworkError) => {
                (NotificationKind::Failure, NETWORK_MESSAGE)
            }
        };

        self.generation += 1;
        self.state = NotificationState {
            visible: true,
            message: message.to_string(),
            kind,
        };
        NotificationId(self.generation)
    }

    /// Explicit user dismissal. Returns `true` if something was hidden.
    pub fn dismiss(&mut self) -> bool {
        let was_visible = self.state.visible;
        self.state.visible = false;
        was_visible
    }

    /// Timer expiry for display `id`. Returns `true` if it hid the notification.
    pub fn expire(&mut self, id: NotificationId) -> bool {
        if self.state.visible && self.current_id() == Some(id) {
            self.state.visible = false;
            true
        } else {
            false
        }
    }

    /// Id of the display currently on screen, if any.
    pub fn current_id(&self) -> Option<NotificationId> {
        self.state
            .visible
            .then_some(NotificationId(self.generation))
    }

    pub fn is_visible(&self) -> bool {
        self.state.visible
    }

    pub fn state(&self) -> &NotificationState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let n = Notification::new();
        assert!(!n.is_visible());
        assert_eq!(n.current_id(), None);
    }

    #[test]
    fn test_show_sets_message_and_kind() {
        let mut n = Notification::new();
        n.show(SubmissionOutcome::Success);
        assert!(n.is_visible());
        assert_eq!(n.state().message, SUCCESS_MESSAGE);
        assert_eq!(n.state().kind, NotificationKind::Success);

        n.show(SubmissionOutcome::Failure(FailureReason::ServerRejected));
        assert_eq!(n.state().message, REJECTED_MESSAGE);
        assert_eq!(n.state().kind, NotificationKind::Failure);

        n.show(SubmissionOutcome::Failure(FailureReason::NetworkError));
        assert_eq!(n.state().message, NETWORK_MESSAGE);
        assert_eq!(n.state().kind, NotificationKind::Failure);
    }

    #[test]
    fn test_expire_hides_current_display() {
        let mut n = Notification::new();
        let id = n.show(SubmissionOutcome::Success);
        assert!(n.expire(id));
        assert!(!n.is_visible());
    }

    #[test]
    fn test_dismiss_then_stale_expiry_is_noop() {
        let mut n = Notification::new();
        let id = n.show(SubmissionOutcome::Success);
        assert!(n.dismiss());
        let before = n.state().clone();

        assert!(!n.expire(id));
        assert_eq!(n.state(), &before);
    }

    #[test]
    fn test_dismiss_when_hidden_reports_nothing() {
        let mut n = Notification::new();
        assert!(!n.dismiss());
    }

    #[test]
    fn test_replacement_invalidates_earlier_timer() {
        let mut n = Notification::new();
        let first = n.show(SubmissionOutcome::Failure(FailureReason::NetworkError));
        let second = n.show(SubmissionOutcome::Success);
        assert_ne!(first, second);

        // The first display's timer fires: the replacement stays up.
        assert!(!n.expire(first));
        assert!(n.is_visible());
        assert_eq!(n.state().message, SUCCESS_MESSAGE);

        assert!(n.expire(second));
        assert!(!n.is_visible());
    }
}
