//! Email delivery capability consumed by the contact service.

use async_trait::async_trait;

use crate::domain::entities::{OutboundEmail, SendReceipt};

/// Failures reported by an [`EmailProvider`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// The provider answered and refused the message.
    #[error("provider rejected message (status: {status:?}): {}", .message.as_deref().unwrap_or("no message"))]
    Rejected {
        status: Option<u16>,
        message: Option<String>,
    },

    /// The provider could not be reached or answered with something unreadable.
    #[error("provider transport failure: {0}")]
    Transport(String),
}

/// Sends one composed email through an external delivery service.
///
/// Implementations perform exactly one attempt per call. A send is not
/// idempotent, so callers must not retry on their own either.
///
/// # Implementations
///
/// - [`crate::infrastructure::email::ResendProvider`] - Resend REST API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailProvider: Send + Sync {
    /// Hands `email` to the provider.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Rejected`] when the provider reports an error.
    /// Returns [`ProviderError::Transport`] on network faults and timeouts.
    async fn send(&self, email: OutboundEmail) -> Result<SendReceipt, ProviderError>;

    /// Short provider name for logs.
    fn name(&self) -> &'static str;
}
