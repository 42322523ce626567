//! Application layer services implementing business logic.
//!
//! Services orchestrate domain operations and external capabilities and
//! provide an HTTP-independent API for handlers.
//!
//! # Available Services
//!
//! - [`services::contact_service::ContactService`] - Contact form classification and delivery

pub mod services;
