//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, validated, and passed into the
//! server explicitly. Request handlers never read the environment.
//!
//! ```bash
//! export RESEND_API_KEY="re_..."
//! export EMAIL_TO="me@example.com"
//! export EMAIL_FROM="Portfolio <onboarding@resend.dev>"
//! ```
//!
//! ## Optional Variables
//!
//! - `RESEND_API_KEY` - Provider credential. Without it every valid submission
//!   is answered with `500 Server misconfigured`
//! - `RESEND_API_URL` - Provider base URL (default: `https://api.resend.com`)
//! - `EMAIL_TO` - Recipient of contact messages
//! - `EMAIL_FROM` - Sender identity
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `PROVIDER_TIMEOUT_SECONDS` - Provider HTTP timeout (default: 10)
//! - `HONEYPOT_FIELD` - Name of the hidden form input (default: `website`)
//! - `NAME_MAX_CHARS` - Clip bound for the name field (default: 256)
//! - `MESSAGE_MAX_CHARS` - Clip bound for the message field (default: 5000)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;
use url::Url;

use crate::application::services::ContactSettings;
use crate::domain::entities::FieldLimits;

pub const DEFAULT_EMAIL_TO: &str = "gyamjosherpa1@gmail.com";
pub const DEFAULT_EMAIL_FROM: &str = "Portfolio <onboarding@resend.dev>";
pub const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Provider credential (`RESEND_API_KEY`). `None` leaves the service
    /// running but unable to deliver.
    pub resend_api_key: Option<String>,
    pub resend_api_url: String,
    pub email_to: String,
    pub email_from: String,
    pub provider_timeout_seconds: u64,
    pub honeypot_field: String,
    pub name_max_chars: usize,
    pub message_max_chars: usize,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        // Empty credential means "not configured"
        let resend_api_key = env::var("RESEND_API_KEY")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let resend_api_url =
            env::var("RESEND_API_URL").unwrap_or_else(|_| DEFAULT_RESEND_API_URL.to_string());
        let email_to = non_empty_var("EMAIL_TO").unwrap_or_else(|| DEFAULT_EMAIL_TO.to_string());
        let email_from =
            non_empty_var("EMAIL_FROM").unwrap_or_else(|| DEFAULT_EMAIL_FROM.to_string());

        let provider_timeout_seconds = parse_var("PROVIDER_TIMEOUT_SECONDS", 10)?;
        let honeypot_field = env::var("HONEYPOT_FIELD").unwrap_or_else(|_| "website".to_string());
        let name_max_chars = parse_var("NAME_MAX_CHARS", 256)?;
        let message_max_chars = parse_var("MESSAGE_MAX_CHARS", 5000)?;

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            resend_api_key,
            resend_api_url,
            email_to,
            email_from,
            provider_timeout_seconds,
            honeypot_field,
            name_max_chars,
            message_max_chars,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `resend_api_url` is not an HTTP(S) URL
    /// - the provider timeout or a clip bound is zero
    /// - the honeypot field name collides with a real field or is blank
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        let url = self.api_url()?;
        if url.scheme() != "http" && url.scheme() != "https" {
            anyhow::bail!(
                "RESEND_API_URL must start with 'http://' or 'https://', got '{}'",
                self.resend_api_url
            );
        }

        if self.provider_timeout_seconds == 0 {
            anyhow::bail!("PROVIDER_TIMEOUT_SECONDS must be greater than 0");
        }

        if self.name_max_chars == 0 || self.message_max_chars == 0 {
            anyhow::bail!("NAME_MAX_CHARS and MESSAGE_MAX_CHARS must be greater than 0");
        }

        let honeypot = self.honeypot_field.trim();
        if honeypot.is_empty() {
            anyhow::bail!("HONEYPOT_FIELD must not be empty");
        }
        if ["name", "email", "message"].contains(&honeypot) {
            anyhow::bail!(
                "HONEYPOT_FIELD must not reuse a visible field name, got '{}'",
                honeypot
            );
        }

        Ok(())
    }

    /// Parses the provider base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if `RESEND_API_URL` is not a valid URL.
    pub fn api_url(&self) -> Result<Url> {
        Url::parse(&self.resend_api_url)
            .with_context(|| format!("RESEND_API_URL is not a valid URL: '{}'", self.resend_api_url))
    }

    pub fn provider_timeout(&self) -> Duration {
        Duration::from_secs(self.provider_timeout_seconds)
    }

    /// Returns whether a provider credential is configured.
    pub fn is_delivery_enabled(&self) -> bool {
        self.resend_api_key.is_some()
    }

    /// Contact service settings derived from this configuration.
    pub fn contact_settings(&self) -> ContactSettings {
        ContactSettings {
            sender: self.email_from.clone(),
            recipient: self.email_to.clone(),
            honeypot_field: self.honeypot_field.trim().to_string(),
            limits: FieldLimits {
                name_max_chars: self.name_max_chars,
                message_max_chars: self.message_max_chars,
            },
        }
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);

        match &self.resend_api_key {
            Some(key) => tracing::info!(
                "  Provider: {} (key {})",
                self.resend_api_url,
                mask_secret(key)
            ),
            None => tracing::warn!("  Provider: RESEND_API_KEY not set, delivery disabled"),
        }

        tracing::info!("  Recipient: {}", self.email_to);
        tracing::info!("  Sender: {}", self.email_from);
        tracing::info!("  Honeypot field: {}", self.honeypot_field);
        tracing::info!(
            "  Limits: name {} chars, message {} chars",
            self.name_max_chars,
            self.message_max_chars
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_var<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} must be a number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

/// Masks a secret for logging, keeping only a short prefix.
///
/// `re_123456789` → `re_1***`
fn mask_secret(secret: &str) -> String {
    let prefix: String = secret.chars().take(4).collect();
    if secret.chars().count() <= 4 {
        "***".to_string()
    } else {
        format!("{prefix}***")
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
