//! Data Transfer Objects for API responses.
//!
//! Request bodies are parsed leniently by the contact service itself, so only
//! response shapes live here.

pub mod contact;
pub mod health;
