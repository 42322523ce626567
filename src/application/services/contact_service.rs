//! Contact form submission service.

use std::sync::Arc;

use crate::domain::entities::{
    Classification, ContactSubmission, FieldLimits, OutboundEmail, SendReceipt,
};
use crate::domain::providers::{EmailProvider, ProviderError};
use crate::error::AppError;

/// Server-side settings for composing and routing contact messages.
///
/// Sender and recipient are never taken from the submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSettings {
    /// `From` identity, e.g. `Portfolio <onboarding@resend.dev>`.
    pub sender: String,
    /// Address that receives contact messages.
    pub recipient: String,
    /// Name of the hidden honeypot input.
    pub honeypot_field: String,
    pub limits: FieldLimits,
}

/// Successful result of [`ContactService::submit`].
///
/// `Discarded` and `Delivered` must look the same to the client, apart from
/// the optional confirmation id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Honeypot triggered; nothing was sent.
    Discarded,
    /// The provider accepted the message and confirmed it with `id`.
    Delivered { id: String },
}

/// Decides whether a contact submission is delivered as email.
///
/// Stateless apart from its configuration: every call handles one submission
/// from classification through a single delivery attempt.
pub struct ContactService {
    provider: Option<Arc<dyn EmailProvider>>,
    settings: ContactSettings,
}

impl ContactService {
    /// Creates a new contact service.
    ///
    /// `provider` is `None` when no provider credential is configured; valid
    /// submissions then fail with [`AppError::ServerMisconfigured`].
    pub fn new(provider: Option<Arc<dyn EmailProvider>>, settings: ContactSettings) -> Self {
        Self { provider, settings }
    }

    pub fn settings(&self) -> &ContactSettings {
        &self.settings
    }

    /// Returns whether an email provider is available.
    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// Parses a JSON request body using the configured honeypot field name.
    pub fn parse(&self, body: &[u8]) -> ContactSubmission {
        ContactSubmission::from_json_body(body, &self.settings.honeypot_field)
    }

    /// Classifies, sanitizes, composes, and delivers a submission.
    ///
    /// # Flow
    ///
    /// 1. Honeypot filled → [`SubmissionOutcome::Discarded`], no provider call
    /// 2. Required field missing/malformed → [`AppError::InvalidInput`]
    /// 3. No provider configured → [`AppError::ServerMisconfigured`]
    /// 4. Trim and clip fields, compose text and HTML bodies
    /// 5. One provider call, outcome mapped below
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DeliveryFailed`] if the provider rejects the message
    /// or reports success without a confirmation id.
    /// Returns [`AppError::Internal`] on provider transport faults.
    pub async fn submit(
        &self,
        submission: ContactSubmission,
    ) -> Result<SubmissionOutcome, AppError> {
        match submission.classify() {
            Classification::Bot => {
                tracing::info!("Honeypot triggered, discarding contact submission");
                return Ok(SubmissionOutcome::Discarded);
            }
            Classification::Rejected => {
                tracing::debug!("Contact submission failed validation");
                return Err(AppError::InvalidInput);
            }
            Classification::Valid => {}
        }

        let Some(provider) = &self.provider else {
            tracing::error!("Email provider credential is not configured");
            return Err(AppError::ServerMisconfigured);
        };

        let clean = submission.sanitize(self.settings.limits);
        let email = OutboundEmail::compose(&self.settings.sender, &self.settings.recipient, &clean);

        let result = provider.send(email).await;
        resolve(provider.name(), result)
    }
}

/// Maps a provider result onto the client-facing outcome.
fn resolve(
    provider: &str,
    result: Result<SendReceipt, ProviderError>,
) -> Result<SubmissionOutcome, AppError> {
    match result {
        Ok(receipt) => match receipt.confirmation_id() {
            Some(id) => {
                tracing::info!(provider, id, "Contact message delivered");
                Ok(SubmissionOutcome::Delivered { id: id.to_string() })
            }
            None => {
                tracing::error!(
                    provider,
                    ?receipt,
                    "Provider reported success without a confirmation id"
                );
                Err(AppError::delivery_failed(None))
            }
        },
        Err(ProviderError::Rejected { status, message }) => {
            tracing::error!(provider, ?status, ?message, "Provider rejected contact message");
            Err(AppError::delivery_failed(message))
        }
        Err(err @ ProviderError::Transport(_)) => {
            tracing::error!(provider, error = %err, "Email provider call failed");
            Err(AppError::internal(err.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::providers::MockEmailProvider;

    fn settings() -> ContactSettings {
        ContactSettings {
            sender: "Portfolio <onboarding@resend.dev>".to_string(),
            recipient: "owner@example.com".to_string(),
            honeypot_field: "website".to_string(),
            limits: FieldLimits::default(),
        }
    }

    fn valid_submission() -> ContactSubmission {
        ContactSubmission {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            message: "Hello\nWorld".to_string(),
            honeypot: Some(String::new()),
        }
    }

    fn never_called() -> MockEmailProvider {
        let mut mock = MockEmailProvider::new();
        mock.expect_send().times(0);
        mock.expect_name().return_const("mock");
        mock
    }

    fn service_with(mock: MockEmailProvider) -> ContactService {
        ContactService::new(Some(Arc::new(mock)), settings())
    }

    #[tokio::test]
    async fn test_submit_delivers_valid_submission() {
        let mut mock = MockEmailProvider::new();
        mock.expect_send()
            .withf(|email| {
                email.from == "Portfolio <onboarding@resend.dev>"
                    && email.to == "owner@example.com"
                    && email.reply_to == "alice@example.com"
                    && email.subject == "New message from Alice"
                    && email.text == "From: Alice <alice@example.com>\n\nHello\nWorld"
                    && email.html.contains("Hello<br/>World")
            })
            .times(1)
            .returning(|_| Ok(SendReceipt::confirmed("re_123")));
        mock.expect_name().return_const("mock");

        let service = service_with(mock);

        let result = service.submit(valid_submission()).await;

        assert_eq!(
            result.unwrap(),
            SubmissionOutcome::Delivered {
                id: "re_123".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_submit_honeypot_discards_without_sending() {
        let service = service_with(never_called());

        let mut submission = valid_submission();
        submission.honeypot = Some("https://spam.example".to_string());

        let result = service.submit(submission).await;

        assert_eq!(result.unwrap(), SubmissionOutcome::Discarded);
    }

    #[tokio::test]
    async fn test_submit_honeypot_discards_even_invalid_input() {
        let service = service_with(never_called());

        let submission = ContactSubmission {
            honeypot: Some("bot".to_string()),
            ..ContactSubmission::default()
        };

        let result = service.submit(submission).await;

        assert_eq!(result.unwrap(), SubmissionOutcome::Discarded);
    }

    #[tokio::test]
    async fn test_submit_invalid_email_rejected() {
        let service = service_with(never_called());

        let mut submission = valid_submission();
        submission.email = "alice@localhost".to_string();

        let result = service.submit(submission).await;

        assert!(matches!(result.unwrap_err(), AppError::InvalidInput));
    }

    #[tokio::test]
    async fn test_submit_blank_message_rejected() {
        let service = service_with(never_called());

        let mut submission = valid_submission();
        submission.message = "   ".to_string();

        let result = service.submit(submission).await;

        assert!(matches!(result.unwrap_err(), AppError::InvalidInput));
    }

    #[tokio::test]
    async fn test_submit_without_provider_is_misconfigured() {
        let service = ContactService::new(None, settings());

        let result = service.submit(valid_submission()).await;

        assert!(matches!(result.unwrap_err(), AppError::ServerMisconfigured));
        assert!(!service.is_configured());
    }

    #[tokio::test]
    async fn test_submit_invalid_input_checked_before_configuration() {
        let service = ContactService::new(None, settings());

        let result = service.submit(ContactSubmission::default()).await;

        assert!(matches!(result.unwrap_err(), AppError::InvalidInput));
    }

    #[tokio::test]
    async fn test_submit_provider_rejection_uses_provider_message() {
        let mut mock = MockEmailProvider::new();
        mock.expect_send().times(1).returning(|_| {
            Err(ProviderError::Rejected {
                status: Some(403),
                message: Some("The example.com domain is not verified".to_string()),
            })
        });
        mock.expect_name().return_const("mock");

        let result = service_with(mock).submit(valid_submission()).await;

        match result.unwrap_err() {
            AppError::DeliveryFailed { message } => {
                assert_eq!(message, "The example.com domain is not verified")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_submit_provider_rejection_without_message() {
        let mut mock = MockEmailProvider::new();
        mock.expect_send().times(1).returning(|_| {
            Err(ProviderError::Rejected {
                status: Some(500),
                message: None,
            })
        });
        mock.expect_name().return_const("mock");

        let result = service_with(mock).submit(valid_submission()).await;

        let err = result.unwrap_err();
        assert!(matches!(err, AppError::DeliveryFailed { .. }));
        assert_eq!(err.to_string(), "Failed to send");
    }

    #[tokio::test]
    async fn test_submit_missing_confirmation_id_is_failure() {
        let mut mock = MockEmailProvider::new();
        mock.expect_send()
            .times(1)
            .returning(|_| Ok(SendReceipt::default()));
        mock.expect_name().return_const("mock");

        let result = service_with(mock).submit(valid_submission()).await;

        assert!(matches!(result.unwrap_err(), AppError::DeliveryFailed { .. }));
    }

    #[tokio::test]
    async fn test_submit_transport_failure_is_internal() {
        let mut mock = MockEmailProvider::new();
        mock.expect_send()
            .times(1)
            .returning(|_| Err(ProviderError::Transport("operation timed out".to_string())));
        mock.expect_name().return_const("mock");

        let result = service_with(mock).submit(valid_submission()).await;

        let err = result.unwrap_err();
        assert!(matches!(err, AppError::Internal { .. }));
        assert_eq!(err.to_string(), "Server error");
    }

    #[tokio::test]
    async fn test_submit_clips_long_message() {
        let mut mock = MockEmailProvider::new();
        mock.expect_send()
            .withf(|email| email.text.ends_with(&format!("{}…", "x".repeat(10))))
            .times(1)
            .returning(|_| Ok(SendReceipt::confirmed("re_clip")));
        mock.expect_name().return_const("mock");

        let mut settings = settings();
        settings.limits.message_max_chars = 10;
        let service = ContactService::new(Some(Arc::new(mock)), settings);

        let mut submission = valid_submission();
        submission.message = "x".repeat(25);

        assert!(service.submit(submission).await.is_ok());
    }

    #[test]
    fn test_parse_uses_configured_honeypot_field() {
        let mut settings = settings();
        settings.honeypot_field = "fax".to_string();
        let service = ContactService::new(None, settings);

        let submission = service.parse(br#"{"name":"A","fax":"555-0100","website":""}"#);

        assert!(submission.is_bot());
    }
}
