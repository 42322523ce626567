//! Syntactic email address check.

use regex::Regex;
use std::sync::LazyLock;

/// `local@domain.tld`: no whitespace anywhere, exactly one `@`, and at least
/// one dot after it with a non-empty final label.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Returns `true` if `candidate` looks like an email address.
///
/// This is a shape check only; no deliverability or DNS lookup is performed.
pub fn is_email_shaped(candidate: &str) -> bool {
    EMAIL_REGEX.is_match(candidate)
}
