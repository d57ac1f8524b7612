//! # Background Tasks
//!
//! Executes the [`Effect`]s returned by `update()`. Deliveries and dismiss
//! timers run as tokio tasks and report back by sending an [`Action`] over
//! the loop's channel.
//!
//! ```text
//! update() ──Effect──► EffectRunner ──spawn──► task
//!    ▲                                           │
//!    └──────────────── Action (channel) ◄────────┘
//! ```
//!
//! Only one dismiss timer is ever armed. Arming a new one or cancelling
//! aborts the previous task, so a dismissed or replaced notification never
//! receives a late expiry from it.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::AbortHandle;

use crate::core::action::{Action, Effect};
use crate::core::form::FormPayload;
use crate::core::notification::{DISMISS_AFTER, NotificationId};
use crate::core::state::App;
use crate::core::submission::SubmissionOutcome;
use crate::relay::MailRelay;

pub type ActionSender = UnboundedSender<Action>;

/// POST `payload` through `relay` and report the outcome.
pub fn spawn_delivery(
    relay: Arc<dyn MailRelay>,
    payload: FormPayload,
    tx: ActionSender,
) -> AbortHandle {
    info!("Spawning delivery via {}", relay.name());
    let handle = tokio::spawn(async move {
        let result = relay.deliver(&payload).await;
        if let Err(e) = &result {
            warn!("Delivery failed: {}", e);
        }
        let outcome = SubmissionOutcome::from(result);
        if tx.send(Action::SubmissionFinished(outcome)).is_err() {
            warn!("Failed to send submission outcome: receiver dropped");
        }
    });
    handle.abort_handle()
}

/// Report `NotificationExpired(id)` after `after`.
pub fn spawn_dismiss_timer(id: NotificationId, after: Duration, tx: ActionSender) -> AbortHandle {
    let handle = tokio::spawn(async move {
        tokio::time::sleep(after).await;
        debug!("Dismiss timer fired for {:?}", id);
        if tx.send(Action::NotificationExpired(id)).is_err() {
            warn!("Failed to send notification expiry: receiver dropped");
        }
    });
    handle.abort_handle()
}

/// Performs effects and owns the pending dismiss timer.
pub struct EffectRunner {
    tx: ActionSender,
    dismiss_after: Duration,
    dismiss_timer: Option<AbortHandle>,
}

impl EffectRunner {
    pub fn new(tx: ActionSender) -> Self {
        Self::with_dismiss_after(tx, DISMISS_AFTER)
    }

    pub fn with_dismiss_after(tx: ActionSender, dismiss_after: Duration) -> Self {
        Self {
            tx,
            dismiss_after,
            dismiss_timer: None,
        }
    }

    /// Perform `effect`. Returns `true` when the app should quit.
    pub fn run(&mut self, app: &App, effect: Effect) -> bool {
        match effect {
            Effect::None => {}
            Effect::Deliver(payload) => {
                spawn_delivery(app.relay.clone(), payload, self.tx.clone());
            }
            Effect::ScheduleDismiss(id) => {
                self.cancel_dismiss();
                debug!("Arming dismiss timer for {:?} ({:?})", id, self.dismiss_after);
                self.dismiss_timer =
                    Some(spawn_dismiss_timer(id, self.dismiss_after, self.tx.clone()));
            }
            Effect::CancelDismiss => self.cancel_dismiss(),
            Effect::Quit => return true,
        }
        false
    }

    fn cancel_dismiss(&mut self) {
        if let Some(handle) = self.dismiss_timer.take() {
            debug!("Cancelling dismiss timer");
            handle.abort();
        }
    }

    pub fn has_pending_dismiss(&self) -> bool {
        self.dismiss_timer.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for EffectRunner {
    fn drop(&mut self) {
        self.cancel_dismiss();
    }
}
