//! Whole-string patterns for the pattern-only credential kinds.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-z0-9_.+-]+)@([\da-z.-]+)\.([a-z.]{2,6})$").expect("Invalid email regex")
});

static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https?://)?([\da-z.-]+)\.([a-z.]{2,6})([/\w .-]*)*/?$")
        .expect("Invalid URL regex")
});

static IP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$",
    )
    .expect("Invalid IP regex")
});

pub(crate) fn is_email(text: &str) -> bool {
    EMAIL_REGEX.is_match(text)
}

pub(crate) fn is_url(text: &str) -> bool {
    URL_REGEX.is_match(text)
}

pub(crate) fn is_ip_address(text: &str) -> bool {
    IP_REGEX.is_match(text)
}
