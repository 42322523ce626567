//! API route configuration.

use crate::api::handlers::{send_email_handler, send_email_probe_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Public API routes. No authentication: the contact form is open to anyone.
///
/// # Endpoints
///
/// - `GET  /send-email` - Self-describing probe
/// - `POST /send-email` - Submit a contact form
pub fn public_routes() -> Router<AppState> {
    Router::new().route(
        "/send-email",
        get(send_email_probe_handler).post(send_email_handler),
    )
}
