//! Infrastructure layer for external integrations.
//!
//! This layer implements capability traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`email`] - Email delivery providers

pub mod email;
