//! Web layer serving the contact page.
//!
//! The page carries the browser-side form client: it collects the fields,
//! posts them as JSON to `/api/send-email`, clears the form on success, and
//! keeps the input on failure so the visitor can retry.
//! Uses Askama templates for server-side rendering.

pub mod handlers;
pub mod routes;
