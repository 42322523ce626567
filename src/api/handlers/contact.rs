//! Handlers for the contact form endpoint.

use axum::{Json, body::Bytes, extract::State, http::HeaderMap};

use crate::api::dto::contact::{ProbeResponse, SendEmailResponse};
use crate::application::services::SubmissionOutcome;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::content_type::is_json_content;

/// Self-describing probe with no side effects.
///
/// # Endpoint
///
/// `GET /api/send-email`
///
/// # Response
///
/// ```json
/// { "ok": true, "route": "/api/send-email", "hint": "POST JSON { name, email, message }" }
/// ```
pub async fn send_email_probe_handler() -> Json<ProbeResponse> {
    Json(ProbeResponse {
        ok: true,
        route: "/api/send-email",
        hint: "POST JSON { name, email, message }",
    })
}

/// Validates a contact form submission and relays it as email.
///
/// # Endpoint
///
/// `POST /api/send-email`
///
/// # Request Body
///
/// ```json
/// { "name": "Alice", "email": "alice@example.com", "message": "Hello", "website": "" }
/// ```
///
/// Requires `Content-Type: application/json`. A body that is not a JSON
/// object is treated as having no fields.
///
/// # Response Codes
///
/// - **200 OK**: `{ "ok": true }`, both on delivery and when the honeypot
///   field was filled
/// - **400 Bad Request**: Missing or malformed field
/// - **415 Unsupported Media Type**: Body not declared as JSON
/// - **500 Internal Server Error**: No provider credential, or unexpected fault
/// - **502 Bad Gateway**: Provider refused the message or gave no confirmation
pub async fn send_email_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<SendEmailResponse>, AppError> {
    if !is_json_content(&headers) {
        return Err(AppError::UnsupportedMediaType);
    }

    let submission = state.contact_service.parse(&body);

    match state.contact_service.submit(submission).await? {
        SubmissionOutcome::Discarded | SubmissionOutcome::Delivered { .. } => {
            Ok(Json(SendEmailResponse::accepted()))
        }
    }
}
