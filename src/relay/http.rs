//! HTTP relay for Formspree-compatible form endpoints.
//!
//! The endpoint receives a plain `multipart/form-data` POST with one text part
//! per form field and `Accept: application/json`, which makes such services
//! answer with a status code instead of redirecting to a thank-you page.
//! Only the status code matters; the body is read for logging.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::Url;
use reqwest::header::ACCEPT;
use reqwest::multipart::Form;

use crate::core::form::FormPayload;
use crate::relay::{MailRelay, RelayError};

/// Converts a payload into multipart text parts, preserving field order.
fn payload_to_form(payload: &FormPayload) -> Form {
    payload
        .iter()
        .fold(Form::new(), |form, (key, value)| form.text(key, value.to_string()))
}

/// Relay that POSTs the form to a fixed endpoint.
pub struct HttpRelay {
    endpoint: Url,
    client: reqwest::Client,
}

impl HttpRelay {
    /// Creates a relay for `endpoint`. `timeout` bounds the whole request;
    /// hitting it counts as a transport failure.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, RelayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RelayError::Config(e.to_string()))?;
        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl MailRelay for HttpRelay {
    fn name(&self) -> &str {
        "http"
    }

    async fn deliver(&self, payload: &FormPayload) -> Result<(), RelayError> {
        info!(
            "Relay request: POST {} ({} fields)",
            self.endpoint,
            payload.iter().count()
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .multipart(payload_to_form(payload))
            .send()
            .await
            .map_err(|e| {
                warn!("Relay transport failure: {}", e);
                RelayError::Network(e.to_string())
            })?;

        let status = response.status();
        debug!("Relay response status: {}", status);

        if status.is_success() {
            info!("Relay accepted message ({})", status);
            return Ok(());
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "unreadable body".to_string());
        warn!("Relay rejected message: {} - {}", status.as_u16(), body);
        Err(RelayError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
