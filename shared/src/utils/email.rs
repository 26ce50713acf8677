//! Email address utilities

use once_cell::sync::Lazy;
use regex::Regex;

// Lowercase-only address pattern. Uppercase addresses do not match.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,4}$").unwrap()
});

/// Check an address against the accepted `local@domain.tld` shape
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Mask an email address for logging
///
/// Keeps the first character of the local part and the full domain,
/// e.g. `user@example.com` becomes `u***@example.com`.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        _ => "****".to_string(),
    }
}
