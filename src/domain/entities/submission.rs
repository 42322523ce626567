//! Contact form submission entity.
//!
//! A submission lives for exactly one request: it is parsed from the request
//! body, classified, sanitized, and dropped. It has no identifier and is never
//! stored.

use serde_json::{Map, Value};
use validator::{Validate, ValidationError};

use crate::utils::clip::clip;
use crate::utils::email_pattern::is_email_shaped;

/// Raw contact form fields as received from the client.
///
/// Fields that were absent from the body, or present with a non-string JSON
/// value, are stored as empty strings and fail validation normally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct ContactSubmission {
    #[validate(custom(function = "not_blank"))]
    pub name: String,

    #[validate(custom(function = "email_shaped"))]
    pub email: String,

    #[validate(custom(function = "not_blank"))]
    pub message: String,

    /// Value of the hidden honeypot input, if it was a string.
    pub honeypot: Option<String>,
}

/// Outcome of classifying a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Honeypot was filled in; accept silently and drop.
    Bot,
    /// A required field is missing or malformed.
    Rejected,
    /// All required fields are present and well-formed.
    Valid,
}

/// Upper bounds applied when sanitizing a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLimits {
    pub name_max_chars: usize,
    pub message_max_chars: usize,
}

impl Default for FieldLimits {
    fn default() -> Self {
        Self {
            name_max_chars: 256,
            message_max_chars: 5000,
        }
    }
}

/// A valid submission after trimming and clipping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// Builds a submission from a parsed JSON object.
    ///
    /// `honeypot_field` names the hidden input (usually `website`).
    pub fn from_fields(fields: &Map<String, Value>, honeypot_field: &str) -> Self {
        let text = |key: &str| {
            fields
                .get(key)
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        Self {
            name: text("name").unwrap_or_default(),
            email: text("email").unwrap_or_default(),
            message: text("message").unwrap_or_default(),
            honeypot: text(honeypot_field),
        }
    }

    /// Parses a request body into a submission.
    ///
    /// Anything other than a JSON object (malformed JSON, arrays, scalars)
    /// degrades to a submission with every field absent.
    pub fn from_json_body(body: &[u8], honeypot_field: &str) -> Self {
        let fields = serde_json::from_slice::<Map<String, Value>>(body).unwrap_or_default();
        Self::from_fields(&fields, honeypot_field)
    }

    /// Returns `true` if the honeypot input carries any non-blank text.
    pub fn is_bot(&self) -> bool {
        self.honeypot
            .as_deref()
            .is_some_and(|v| !v.trim().is_empty())
    }

    /// Classifies the submission. The honeypot check takes precedence over
    /// field validation.
    pub fn classify(&self) -> Classification {
        if self.is_bot() {
            Classification::Bot
        } else if self.validate().is_err() {
            Classification::Rejected
        } else {
            Classification::Valid
        }
    }

    /// Trims name and message and clips them to `limits`.
    ///
    /// The email is taken as-is; a valid email carries no whitespace.
    pub fn sanitize(&self, limits: FieldLimits) -> SanitizedSubmission {
        SanitizedSubmission {
            name: clip(self.name.trim(), limits.name_max_chars),
            email: self.email.clone(),
            message: clip(self.message.trim(), limits.message_max_chars),
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn email_shaped(value: &str) -> Result<(), ValidationError> {
    if !is_email_shaped(value) {
        return Err(ValidationError::new("email"));
    }
    Ok(())
}
