//! # Actions
//!
//! Everything that can happen in Folio becomes an `Action`.
//! User submits the form? That's `Action::Submit`.
//! The relay answers? That's `Action::SubmissionFinished(outcome)`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an [`Effect`] describing the I/O the
//! adapter must perform. No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::form::FormPayload;
use crate::core::notification::NotificationId;
use crate::core::state::App;
use crate::core::submission::{FailureReason, SubmissionOutcome};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// User asked to send the contact form.
    Submit,
    /// A delivery completed (one per `Effect::Deliver`).
    SubmissionFinished(SubmissionOutcome),
    /// User closed the notification.
    DismissNotification,
    /// The dismiss timer for display `id` ran out.
    NotificationExpired(NotificationId),
    Quit,
}

/// I/O requested by `update()`, performed by the adapter.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// POST the payload to the relay.
    Deliver(FormPayload),
    /// Cancel any pending dismiss timer and arm a new one for `id`.
    ScheduleDismiss(NotificationId),
    /// Cancel the pending dismiss timer.
    CancelDismiss,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Submit => match app.form.validate() {
            Ok(payload) => {
                app.form_error = None;
                app.in_flight += 1;
                app.status_message = "Sending message...".to_string();
                info!("Form valid, delivering (in flight: {})", app.in_flight);
                Effect::Deliver(payload)
            }
            Err(e) => {
                info!("Form invalid: {}", e);
                app.status_message = e.to_string();
                app.form_error = Some(e);
                Effect::None
            }
        },
        Action::SubmissionFinished(outcome) => {
            app.in_flight = app.in_flight.saturating_sub(1);
            if outcome.is_success() {
                app.form.clear();
                app.form_error = None;
            }
            app.status_message = match outcome {
                SubmissionOutcome::Success => "Message sent.".to_string(),
                SubmissionOutcome::Failure(FailureReason::ServerRejected) => {
                    "The relay rejected the message.".to_string()
                }
                SubmissionOutcome::Failure(FailureReason::NetworkError) => {
                    "Could not reach the relay.".to_string()
                }
            };
            let id = app.notification.show(outcome);
            info!("Submission finished: {:?} (notification {:?})", outcome, id);
            Effect::ScheduleDismiss(id)
        }
        Action::DismissNotification => {
            if app.notification.dismiss() {
                Effect::CancelDismiss
            } else {
                Effect::None
            }
        }
        Action::NotificationExpired(id) => {
            if !app.notification.expire(id) {
                debug!("Ignoring stale expiry for {:?}", id);
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
