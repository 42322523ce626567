//! Domain layer containing the contact submission model and capabilities.
//!
//! # Architecture
//!
//! - [`entities`] - Submission, sanitized submission, outbound email
//! - [`providers`] - Capability traits for external services
//!
//! The domain layer has no dependency on HTTP or on concrete providers.
//! Implementations live in [`crate::infrastructure`].
//!
//! # Submission Flow
//!
//! 1. Request body is parsed into a [`entities::ContactSubmission`]
//! 2. The submission is classified as bot, rejected, or valid
//! 3. A valid submission is sanitized and composed into an [`entities::OutboundEmail`]
//! 4. The email is handed to an [`providers::EmailProvider`] exactly once

pub mod entities;
pub mod providers;
