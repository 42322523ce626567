//! Email delivery providers.
//!
//! Provides [`ResendProvider`], an HTTP implementation of
//! [`crate::domain::providers::EmailProvider`] for the Resend REST API.

mod resend;

pub use resend::ResendProvider;
