//! Contact page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::state::AppState;

/// Template for the contact page.
///
/// Renders `templates/contact.html` with:
/// - Name, email, and message inputs
/// - The hidden honeypot input
/// - The script that posts the form as JSON to `endpoint`
#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactPageTemplate {
    pub endpoint: &'static str,
    pub honeypot_field: String,
    pub name_max_chars: usize,
    pub message_max_chars: usize,
}

/// Renders the contact page.
///
/// # Endpoint
///
/// `GET /`
///
/// The honeypot input name and the `maxlength` hints follow the running
/// configuration, so the page always matches what the API expects.
pub async fn contact_page_handler(State(state): State<AppState>) -> impl IntoResponse {
    let settings = state.contact_service.settings();

    ContactPageTemplate {
        endpoint: "/api/send-email",
        honeypot_field: settings.honeypot_field.clone(),
        name_max_chars: settings.limits.name_max_chars,
        message_max_chars: settings.limits.message_max_chars,
    }
}
