//! Resend REST API provider.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};
use url::Url;

use crate::domain::entities::{OutboundEmail, SendReceipt};
use crate::domain::providers::{EmailProvider, ProviderError};

/// Request body for `POST /emails`.
#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    reply_to: &'a str,
    subject: &'a str,
    text: &'a str,
    html: &'a str,
}

/// Success body: `{ "id": "..." }`.
#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    id: Option<String>,
}

/// Error body: `{ "statusCode": 422, "name": "validation_error", "message": "..." }`.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: Option<String>,
    name: Option<String>,
}

/// Sends email through the Resend HTTP API.
///
/// One `POST {base}/emails` per message, authenticated with a bearer API key.
/// The underlying client enforces a request timeout; a timed-out call is a
/// transport failure and is never retried.
pub struct ResendProvider {
    client: Client,
    endpoint: Url,
    api_key: String,
}

impl ResendProvider {
    /// Builds a provider for the API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint URL cannot be derived from `base_url`
    /// or the HTTP client cannot be constructed.
    pub fn new(base_url: &Url, api_key: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let endpoint = Url::parse(&format!(
            "{}/emails",
            base_url.as_str().trim_end_matches('/')
        ))?;

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("contact-relay/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint,
            api_key: api_key.into(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl EmailProvider for ResendProvider {
    async fn send(&self, email: OutboundEmail) -> Result<SendReceipt, ProviderError> {
        let body = SendEmailRequest {
            from: &email.from,
            to: [&email.to],
            reply_to: &email.reply_to,
            subject: &email.subject,
            text: &email.text,
            html: &email.html,
        };

        debug!("POST {}", self.endpoint);

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        let raw = response
            .text()
            .await
            .map_err(|e| ProviderError::Transport(format!("Failed to read response body: {e}")))?;

        if status.is_success() {
            let id = match serde_json::from_str::<SendEmailResponse>(&raw) {
                Ok(parsed) => parsed.id,
                Err(e) => {
                    warn!("Unreadable Resend success body ({}): {}", e, raw);
                    None
                }
            };

            return Ok(SendReceipt { id });
        }

        let parsed = serde_json::from_str::<ErrorResponse>(&raw).ok();
        let name = parsed.as_ref().and_then(|p| p.name.as_deref());
        error!(
            status = status.as_u16(),
            name, "Resend rejected message: {}", raw
        );

        Err(ProviderError::Rejected {
            status: Some(status.as_u16()),
            message: parsed.and_then(|p| p.message),
        })
    }

    fn name(&self) -> &'static str {
        "resend"
    }
}
