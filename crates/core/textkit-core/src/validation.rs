//! Format validation
//!
//! Lightweight checks that answer yes or no. None of these propagate errors:
//! anything that fails to parse is simply not valid.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is valid")
});

/// Check whether a string looks like an email address
///
/// A simple pattern match, not RFC 5322 complete: local part of
/// `[a-zA-Z0-9._%+-]`, a domain, and an alphabetic TLD of two or more letters.
pub fn is_email(input: &str) -> bool {
    EMAIL.is_match(input)
}

/// Check whether a string parses as an absolute URL
///
/// Delegates to the WHATWG parser in the `url` crate; parse errors become
/// `false`.
pub fn is_url(input: &str) -> bool {
    match url::Url::parse(input) {
        Ok(_) => true,
        Err(e) => {
            tracing::debug!("Rejected URL {:?}: {}", input, e);
            false
        }
    }
}
