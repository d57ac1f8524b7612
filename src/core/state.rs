//! # Application State
//!
//! Core business state for Folio. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── relay: Arc<dyn MailRelay>     // where the contact form goes
//! ├── profile: Profile              // page content
//! ├── form: ContactForm             // field buffers
//! ├── form_error: Option<FormError> // inline validation message
//! ├── notification: Notification    // outcome overlay
//! ├── in_flight: usize              // deliveries awaiting a response
//! └── status_message: String        // status line text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs,
//! except field editing, which the form component does in place.

use std::sync::Arc;

use crate::core::form::{ContactForm, FormError};
use crate::core::notification::Notification;
use crate::core::profile::Profile;
use crate::relay::MailRelay;

pub struct App {
    pub relay: Arc<dyn MailRelay>,
    pub profile: Profile,
    pub form: ContactForm,
    pub form_error: Option<FormError>,
    pub notification: Notification,
    pub in_flight: usize,
    pub status_message: String,
}

impl App {
    pub fn new(relay: Arc<dyn MailRelay>, profile: Profile) -> Self {
        let status_message = format!("Welcome to {}'s portfolio!", profile.name);
        Self {
            relay,
            profile,
            form: ContactForm::new(),
            form_error: None,
            notification: Notification::new(),
            in_flight: 0,
            status_message,
        }
    }

    pub fn is_sending(&self) -> bool {
        self.in_flight > 0
    }
}
