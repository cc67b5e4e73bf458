//! URL normalization.
//!
//! Long URLs are stored in one canonical form so the `long_url` uniqueness
//! constraint compares like with like.

use crate::error::AppError;
use url::Url;

/// Normalizes a URL before storage and dedup lookup.
///
/// Lowercases the host, strips default ports (80 for HTTP, 443 for HTTPS)
/// and fragments, and rejects anything that is not plain http/https. Path,
/// query, and case within them are preserved.
///
/// # Errors
///
/// Returns [`AppError::InvalidUrl`] for malformed input or a disallowed
/// scheme (`javascript:`, `data:`, `file:` and the like).
pub fn normalize_url(input: &str) -> Result<String, AppError> {
    let mut url = Url::parse(input).map_err(|e| AppError::invalid_url(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::invalid_url(
            "only http and https URLs can be shortened",
        ));
    }

    if let Some(host) = url.host_str() {
        let lowered = host.to_ascii_lowercase();
        url.set_host(Some(&lowered))
            .map_err(|e| AppError::invalid_url(e.to_string()))?;
    }

    url.set_fragment(None);

    if matches!(
        (url.scheme(), url.port()),
        ("http", Some(80)) | ("https", Some(443))
    ) {
        // set_port cannot fail for http/https
        let _ = url.set_port(None);
    }

    Ok(url.to_string())
}
