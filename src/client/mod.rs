//! Typed client for the contact form endpoint.
//!
//! Mirrors what the browser form does: one JSON `POST` carrying the flat
//! `{ name, email, message, <honeypot> }` record, a single response, no
//! retries. On success the caller's form is cleared; on failure it is left
//! intact so the user can correct it and resend.
//!
//! ```rust,ignore
//! let client = ContactClient::new(&Url::parse("http://localhost:3000")?, "website")?;
//! let mut form = ContactForm::new("Alice", "alice@example.com", "Hello!");
//!
//! match client.submit_and_reset(&mut form).await {
//!     Ok(_) => println!("sent"),
//!     Err(e) => eprintln!("{}", e.user_message()),
//! }
//! ```

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value};
use url::Url;

/// Shown when the server gives no readable error text.
pub const FALLBACK_ERROR: &str = "Hmm, couldn't send that. Please try again.";
/// Shown when the request never got a response.
pub const NETWORK_ERROR: &str = "Network error. Try again later.";
/// Shown after a successful submission.
pub const SUCCESS_MESSAGE: &str = "Thanks! Your message is on its way.";

/// Editable contact form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Hidden honeypot value. People never fill this in.
    pub honeypot: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
            honeypot: String::new(),
        }
    }

    /// Clears every field.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Flattens the form into the request record. The email is trimmed.
    pub fn to_record(&self, honeypot_field: &str) -> Map<String, Value> {
        let mut record = Map::new();
        record.insert("name".into(), Value::String(self.name.clone()));
        record.insert("email".into(), Value::String(self.email.trim().to_string()));
        record.insert("message".into(), Value::String(self.message.clone()));
        record.insert(honeypot_field.into(), Value::String(self.honeypot.clone()));
        record
    }
}

/// Server acknowledgment of a submission.
///
/// Carries no confirmation id: the server answers a delivered message and a
/// discarded one identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Acknowledgement {
    #[serde(default)]
    pub ok: bool,
}

/// Failures surfaced by [`ContactClient`].
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server answered with a non-success status.
    #[error("server rejected submission ({status}): {}", .message.as_deref().unwrap_or(FALLBACK_ERROR))]
    Rejected { status: u16, message: Option<String> },

    /// No response was received.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ClientError {
    /// Text to show the user: the server's error message if it sent one.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Rejected {
                message: Some(m), ..
            } => m.clone(),
            ClientError::Rejected { message: None, .. } => FALLBACK_ERROR.to_string(),
            ClientError::Transport(_) => NETWORK_ERROR.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorReply {
    error: Option<String>,
}

/// HTTP client for `POST /api/send-email`.
pub struct ContactClient {
    http: Client,
    endpoint: Url,
    honeypot_field: String,
}

impl ContactClient {
    /// Creates a client for the site rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint URL cannot be derived or the HTTP
    /// client cannot be built.
    pub fn new(base_url: &Url, honeypot_field: impl Into<String>) -> anyhow::Result<Self> {
        let endpoint = Url::parse(&format!(
            "{}/api/send-email",
            base_url.as_str().trim_end_matches('/')
        ))?;

        let http = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self {
            http,
            endpoint,
            honeypot_field: honeypot_field.into(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Sends the form once.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Rejected`] for non-2xx responses, carrying the
    /// server's `error` text (or the raw body) when present.
    /// Returns [`ClientError::Transport`] if no response arrives.
    pub async fn submit(&self, form: &ContactForm) -> Result<Acknowledgement, ClientError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&form.to_record(&self.honeypot_field))
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            return Ok(serde_json::from_str(&text).unwrap_or_default());
        }

        let message = match serde_json::from_str::<ErrorReply>(&text) {
            Ok(reply) => reply.error,
            Err(_) => Some(text),
        }
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty());

        Err(ClientError::Rejected {
            status: status.as_u16(),
            message,
        })
    }

    /// Sends the form and clears it on success. On failure the form is left
    /// untouched.
    pub async fn submit_and_reset(
        &self,
        form: &mut ContactForm,
    ) -> Result<Acknowledgement, ClientError> {
        let ack = self.submit(form).await?;
        form.clear();
        Ok(ack)
    }
}
