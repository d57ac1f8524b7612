//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::form::FormPayload;
use crate::core::profile::Profile;
use crate::core::state::App;
use crate::relay::{MailRelay, RelayError};

/// A relay that answers from a script and records what it was sent.
pub struct ScriptedRelay {
    replies: Mutex<Vec<Result<(), RelayError>>>,
    pub delivered: Mutex<Vec<FormPayload>>,
}

impl ScriptedRelay {
    /// Replies are handed out in order; once exhausted every call succeeds.
    pub fn new(replies: Vec<Result<(), RelayError>>) -> Self {
        let mut replies = replies;
        replies.reverse();
        Self {
            replies: Mutex::new(replies),
            delivered: Mutex::new(Vec::new()),
        }
    }

    pub fn accepting() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl MailRelay for ScriptedRelay {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn deliver(&self, payload: &FormPayload) -> Result<(), RelayError> {
        self.delivered.lock().unwrap().push(payload.clone());
        self.replies.lock().unwrap().pop().unwrap_or(Ok(()))
    }
}

pub fn test_profile() -> Profile {
    Profile::bundled().unwrap()
}

/// Creates a test App with an accepting relay and the bundled profile.
pub fn test_app() -> App {
    App::new(Arc::new(ScriptedRelay::accepting()), test_profile())
}

/// Fill every contact field with valid values.
pub fn fill_form(app: &mut App) {
    app.form.name = "Ada Lovelace".to_string();
    app.form.email = "ada@example.com".to_string();
    app.form.message = "I'd love to collaborate.".to_string();
}
