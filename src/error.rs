//! Application error types shared across all layers.

use thiserror::Error;

/// Errors surfaced by the registration, redirect, and statistics services.
///
/// Each failure mode is a distinct variant so callers can map it to the
/// right client-visible outcome without inspecting message text. Storage
/// failures that are not a recognized uniqueness conflict pass through as
/// [`AppError::Database`] with the original error intact.
#[derive(Debug, Error)]
pub enum AppError {
    /// The long URL is already shortened. Only reachable when two
    /// registrations of the same URL race past the existence pre-check;
    /// sequential callers get the existing code instead.
    #[error("URL is already registered: {url}")]
    UrlAlreadyRegistered { url: String },

    /// The site already has an account.
    #[error("site is already registered: {site}")]
    SiteAlreadyRegistered { site: String },

    /// The allocator ran out of attempts without finding a free value.
    /// Indicates token-space pressure or a misbehaving store; worth alerting
    /// on, unlike the client-caused conflicts above.
    #[error("failed to allocate a unique {field} after {attempts} attempts")]
    GenerationExhausted { field: &'static str, attempts: u32 },

    /// No registered site matches the given login.
    #[error("unknown site login: {login}")]
    OwnerNotFound { login: String },

    #[error("invalid URL: {reason}")]
    InvalidUrl { reason: String },

    #[error("invalid site host: {reason}")]
    InvalidSite { reason: String },

    /// Unclassified storage failure, propagated unchanged.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl AppError {
    pub fn invalid_url(reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            reason: reason.into(),
        }
    }

    pub fn invalid_site(reason: impl Into<String>) -> Self {
        Self::InvalidSite {
            reason: reason.into(),
        }
    }

    pub fn owner_not_found(login: impl Into<String>) -> Self {
        Self::OwnerNotFound {
            login: login.into(),
        }
    }
}
