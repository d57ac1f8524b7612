//! # Contact Form
//!
//! The three field buffers behind the contact section, plus the validation
//! that turns them into a [`FormPayload`].
//!
//! ```text
//! ContactForm { name, email, message }
//!        │
//!        │ validate()
//!        ▼
//! FormPayload [("name", ..), ("email", ..), ("message", ..)]
//! ```
//!
//! The TUI edits these buffers directly through the form component; the
//! reducer is the only place that reads them for submission or clears them.

use thiserror::Error;

/// A field of the contact form, in submission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// All fields in the order they are rendered and sent.
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Multipart field name expected by the relay.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "Your Email",
            Field::Message => "Your Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "you@example.com",
            Field::Message => "I'm interested in...",
        }
    }

    /// Only the message accepts newlines.
    pub fn is_multiline(self) -> bool {
        matches!(self, Field::Message)
    }
}

/// Validation failures. Nothing is sent while one of these is present.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in {}.", .0.label())]
    Missing(Field),
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

impl FormError {
    /// The field the error should be shown against.
    pub fn field(&self) -> Field {
        match self {
            FormError::Missing(field) => *field,
            FormError::InvalidEmail => Field::Email,
        }
    }
}

/// Ordered field name → value pairs collected at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPayload {
    entries: Vec<(Field, String)>,
}

impl FormPayload {
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries
            .iter()
            .map(|(field, value)| (field.key(), value.as_str()))
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, value)| value.as_str())
    }
}

/// Current values of the contact form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    pub fn is_blank(&self) -> bool {
        Field::ALL.iter().all(|f| self.value(*f).trim().is_empty())
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }

    /// Check every field is filled and the email looks deliverable, then
    /// collect the payload. Fields are checked in render order so the first
    /// empty one is reported.
    pub fn validate(&self) -> Result<FormPayload, FormError> {
        for field in Field::ALL {
            if self.value(field).trim().is_empty() {
                return Err(FormError::Missing(field));
            }
        }

        let email = self.email.trim();
        if !is_plausible_email(email) {
            return Err(FormError::InvalidEmail);
        }

        Ok(FormPayload {
            entries: vec![
                (Field::Name, self.name.trim().to_string()),
                (Field::Email, email.to_string()),
                (Field::Message, self.message.clone()),
            ],
        })
    }
}

/// Same shape a browser accepts for `type=email`, plus a dotted domain:
/// one `@`, non-empty local part, no whitespace, domain labels non-empty.
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || !domain.contains('.') {
        return false;
    }
    domain
        .split('.')
        .all(|label| !label.is_empty() && !label.starts_with('-') && !label.ends_with('-'))
}
