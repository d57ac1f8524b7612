use async_trait::async_trait;
use thiserror::Error;

use crate::core::form::FormPayload;

/// Errors that can occur while handing a message to the relay.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Relay misconfigured (bad endpoint, client could not be built).
    #[error("relay config error: {0}")]
    Config(String),
    /// No response received (timeout, DNS, connection refused).
    #[error("network error: {0}")]
    Network(String),
    /// The relay answered with a non-success status.
    #[error("relay rejected the message (HTTP {status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Something that can deliver a contact-form payload.
///
/// A single call is a single attempt; implementations never retry.
#[async_trait]
pub trait MailRelay: Send + Sync {
    /// Returns the name of the relay, for logging.
    fn name(&self) -> &str;

    /// Deliver the payload. `Ok(())` means the relay accepted it.
    async fn deliver(&self, payload: &FormPayload) -> Result<(), RelayError>;
}
