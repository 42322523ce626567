//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::contact_page_handler;
use axum::{Router, routing::get};

/// Public pages.
///
/// # Endpoints
///
/// - `GET /` - Contact page with the submission form
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/", get(contact_page_handler))
}
