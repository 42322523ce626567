//! HTTP server initialization and runtime setup.
//!
//! Builds the email provider and contact service from [`Config`] and runs the
//! Axum server until a shutdown signal arrives.

use crate::application::services::ContactService;
use crate::config::Config;
use crate::domain::providers::EmailProvider;
use crate::infrastructure::email::ResendProvider;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds application state from configuration.
///
/// Without a provider credential the service still starts: the contact page
/// and probe keep working, and valid submissions are answered with
/// `500 Server misconfigured` without any delivery attempt.
///
/// # Errors
///
/// Returns an error if the provider URL is invalid or the HTTP client cannot
/// be built.
pub fn build_state(config: &Config) -> Result<AppState> {
    let provider: Option<Arc<dyn EmailProvider>> = match &config.resend_api_key {
        Some(api_key) => {
            let resend =
                ResendProvider::new(&config.api_url()?, api_key.clone(), config.provider_timeout())?;
            tracing::info!("Email delivery enabled (Resend at {})", resend.endpoint());
            let provider: Arc<dyn EmailProvider> = Arc::new(resend);
            Some(provider)
        }
        None => {
            tracing::warn!("RESEND_API_KEY is not set; contact submissions cannot be delivered");
            None
        }
    };

    let contact_service = Arc::new(ContactService::new(provider, config.contact_settings()));

    Ok(AppState::new(contact_service))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - State construction fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves when Ctrl+C (or SIGTERM on Unix) is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
