//! Core domain entities.
//!
//! - [`ContactSubmission`] - Raw contact form fields, classified per request
//! - [`SanitizedSubmission`] - Trimmed and clipped fields of a valid submission
//! - [`OutboundEmail`] - Message composed for the email provider
//! - [`SendReceipt`] - Provider acknowledgment

pub mod outbound_email;
pub mod submission;

pub use outbound_email::{OutboundEmail, SendReceipt};
pub use submission::{Classification, ContactSubmission, FieldLimits, SanitizedSubmission};
