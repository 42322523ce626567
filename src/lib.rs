//! # Contact Relay
//!
//! Backend for a portfolio contact form: validates a submission, screens out
//! bots with a honeypot field, and relays the message to the site owner as a
//! transactional email.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Submission model, outbound email, provider trait
//! - **Application Layer** ([`application`]) - Classification and delivery orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Resend HTTP provider
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - Contact page with the browser form client
//! - **Client** ([`client`]) - Typed Rust client for the endpoint
//!
//! ## Request Flow
//!
//! `POST /api/send-email` → content-type check → parse → honeypot check →
//! validation → trim/clip → compose text and HTML bodies → one provider call.
//! No state survives the request, and nothing is retried.
//!
//! ## Quick Start
//!
//! ```bash
//! export RESEND_API_KEY="re_..."
//! export EMAIL_TO="me@example.com"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod client;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ContactService, ContactSettings, SubmissionOutcome};
    pub use crate::domain::entities::{
        ContactSubmission, FieldLimits, OutboundEmail, SendReceipt,
    };
    pub use crate::domain::providers::{EmailProvider, ProviderError};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
