//! Registered-site host validation.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::AppError;

static HOSTNAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]([a-z0-9-]{0,61}[a-z0-9])?(\.[a-z0-9]([a-z0-9-]{0,61}[a-z0-9])?)*$")
        .expect("hostname pattern is valid")
});

/// Normalizes the site value supplied at registration.
///
/// Accepts a bare hostname, an IPv4 address, a bracketed IPv6 literal, or
/// any of those with a `:port` suffix (the port is dropped, as in a `Host`
/// header). The result is lowercased.
///
/// # Errors
///
/// Returns [`AppError::InvalidSite`] for empty input or a value that is not
/// a plausible hostname.
pub fn normalize_site(input: &str) -> Result<String, AppError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AppError::invalid_site("site must not be empty"));
    }
    if trimmed.contains('/') {
        return Err(AppError::invalid_site(
            "expected a bare host, not a URL or path",
        ));
    }

    let host = if trimmed.starts_with('[') {
        // IPv6 literal, with or without a port suffix
        match trimmed.find(']') {
            Some(end) => &trimmed[..=end],
            None => return Err(AppError::invalid_site("unterminated IPv6 literal")),
        }
    } else {
        trimmed.split(':').next().unwrap_or(trimmed)
    };

    let host = host.to_ascii_lowercase();

    if !host.starts_with('[') && !HOSTNAME.is_match(&host) {
        return Err(AppError::invalid_site(format!(
            "not a valid hostname: {host}"
        )));
    }

    Ok(host)
}
