//! External capability traits implemented by the infrastructure layer.
//!
//! Mock implementations are generated via `mockall` for unit tests.

pub mod email_provider;

pub use email_provider::{EmailProvider, ProviderError};

#[cfg(test)]
pub use email_provider::MockEmailProvider;
