//! Utility functions for request inspection and text handling.
//!
//! - [`content_type`] - JSON content-type detection
//! - [`email_pattern`] - Syntactic email address check
//! - [`html`] - HTML escaping and line-break conversion
//! - [`clip`] - Length clipping with a visible truncation marker

pub mod clip;
pub mod content_type;
pub mod email_pattern;
pub mod html;
