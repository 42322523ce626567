//! DTOs for the contact form endpoint.

use serde::Serialize;

/// Body of `GET /api/send-email`.
#[derive(Debug, Serialize)]
pub struct ProbeResponse {
    pub ok: bool,
    pub route: &'static str,
    pub hint: &'static str,
}

/// Body of a successful `POST /api/send-email`.
///
/// Deliveries and honeypot discards share this exact body. The provider
/// confirmation id is logged, never returned.
#[derive(Debug, Serialize)]
pub struct SendEmailResponse {
    pub ok: bool,
}

impl SendEmailResponse {
    pub fn accepted() -> Self {
        Self { ok: true }
    }
}
