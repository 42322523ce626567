//! Application error taxonomy and its HTTP mapping.
//!
//! Every error renders as `{ "error": "<message>" }`. Messages are kept
//! deliberately short: client errors never say which field failed, and server
//! errors never carry internal detail (that goes to the log instead).

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON body returned for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request body is not declared as JSON.
    #[error("Invalid Content-Type. Use application/json.")]
    UnsupportedMediaType,

    /// A required field is missing or malformed.
    #[error("Invalid input")]
    InvalidInput,

    /// The provider credential is not configured.
    #[error("Server misconfigured")]
    ServerMisconfigured,

    /// The provider refused the message or returned no confirmation id.
    #[error("{message}")]
    DeliveryFailed { message: String },

    /// Any unexpected fault. `detail` is for logs only.
    #[error("Server error")]
    Internal { detail: String },
}

impl AppError {
    /// Generic message used when the provider gives no usable reason.
    pub const DELIVERY_FAILED_FALLBACK: &'static str = "Failed to send";

    pub fn delivery_failed(message: Option<String>) -> Self {
        let message = message
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| Self::DELIVERY_FAILED_FALLBACK.to_string());

        Self::DeliveryFailed { message }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::InvalidInput => StatusCode::BAD_REQUEST,
            AppError::ServerMisconfigured => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::DeliveryFailed { .. } => StatusCode::BAD_GATEWAY,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal { detail } = &self {
            tracing::debug!("Responding with generic server error: {}", detail);
        }

        let status = self.status();
        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
