//! Outbound email composed from a sanitized submission.

use super::submission::SanitizedSubmission;
use crate::utils::html::{escape_html, newlines_to_br};

/// A fully composed message ready to hand to an email provider.
///
/// `from` and `to` always come from server configuration; only `reply_to`,
/// `subject`, and the bodies carry user-supplied text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

/// Provider acknowledgment for a send call.
///
/// A missing `id` means the provider claimed success without confirming it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendReceipt {
    pub id: Option<String>,
}

impl SendReceipt {
    pub fn confirmed(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
        }
    }

    /// Returns the confirmation id if it is present and non-blank.
    pub fn confirmation_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.trim().is_empty())
    }
}

impl OutboundEmail {
    /// Composes the plain-text and HTML bodies for a contact message.
    pub fn compose(from: &str, to: &str, submission: &SanitizedSubmission) -> Self {
        let SanitizedSubmission {
            name,
            email,
            message,
        } = submission;

        let text = format!("From: {name} <{email}>\n\n{message}");

        let html = format!(
            concat!(
                r#"<div style="font-family:system-ui,-apple-system,Segoe UI,Roboto,Helvetica,Arial,sans-serif;line-height:1.6">"#,
                "<p><strong>From:</strong> {name} &lt;{email}&gt;</p>",
                "<p><strong>Message:</strong></p>",
                "<p>{message}</p>",
                "</div>"
            ),
            name = escape_html(name),
            email = escape_html(email),
            message = newlines_to_br(&escape_html(message)),
        );

        Self {
            from: from.to_string(),
            to: to.to_string(),
            reply_to: email.clone(),
            subject: format!("New message from {}", single_line(name)),
            text,
            html,
        }
    }
}

/// Collapses line breaks so user text cannot spill across header lines.
fn single_line(value: &str) -> String {
    value
        .split(['\r', '\n'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sanitized(name: &str, email: &str, message: &str) -> SanitizedSubmission {
        SanitizedSubmission {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_compose_plain_message() {
        let email = OutboundEmail::compose(
            "Portfolio <onboarding@resend.dev>",
            "owner@example.com",
            &sanitized("Alice", "alice@example.com", "Hello\nWorld"),
        );

        assert_eq!(email.from, "Portfolio <onboarding@resend.dev>");
        assert_eq!(email.to, "owner@example.com");
        assert_eq!(email.reply_to, "alice@example.com");
        assert_eq!(email.subject, "New message from Alice");
        assert_eq!(email.text, "From: Alice <alice@example.com>\n\nHello\nWorld");

        assert!(email.html.contains("Alice"));
        assert!(email.html.contains("alice@example.com"));
        assert!(email.html.contains("Hello<br/>World"));
        assert!(!email.html.contains("Hello\nWorld"));
    }

    #[test]
    fn test_compose_escapes_markup() {
        let email = OutboundEmail::compose(
            "from@example.com",
            "to@example.com",
            &sanitized("<script>", "x@example.com", "<img src=x onerror='alert(1)'>"),
        );

        assert!(email.html.contains("&lt;script&gt;"));
        assert!(!email.html.contains("<script>"));
        assert!(email.html.contains("&lt;img src=x onerror=&#039;alert(1)&#039;&gt;"));
        assert!(!email.html.contains("<img"));
    }

    #[test]
    fn test_plain_body_is_not_escaped() {
        let email = OutboundEmail::compose(
            "from@example.com",
            "to@example.com",
            &sanitized("Tom & Jerry", "tj@example.com", "1 < 2"),
        );

        assert_eq!(email.text, "From: Tom & Jerry <tj@example.com>\n\n1 < 2");
        assert!(email.html.contains("Tom &amp; Jerry"));
    }

    #[test]
    fn test_subject_is_single_line() {
        let email = OutboundEmail::compose(
            "from@example.com",
            "to@example.com",
            &sanitized("Eve\r\nBcc: victim@example.com", "eve@example.com", "hi"),
        );

        assert_eq!(email.subject, "New message from Eve Bcc: victim@example.com");
    }

    #[test]
    fn test_receipt_confirmation_id() {
        assert_eq!(SendReceipt::confirmed("abc").confirmation_id(), Some("abc"));
        assert_eq!(SendReceipt::default().confirmation_id(), None);
        assert_eq!(SendReceipt::confirmed("  ").confirmation_id(), None);
    }
}
