//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Email provider is configured
/// - **503 Service Unavailable**: No provider credential, submissions cannot be delivered
///
/// The provider is not contacted; sending a probe email would have side effects.
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let provider_check = check_provider(&state);
    let healthy = provider_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            provider: provider_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

fn check_provider(state: &AppState) -> CheckStatus {
    if state.contact_service.is_configured() {
        CheckStatus {
            status: "ok".to_string(),
            message: Some("Email provider configured".to_string()),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some("RESEND_API_KEY is not set".to_string()),
        }
    }
}
