//! Shortcut registration and redirect resolution.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::services::allocator::{AllocationPolicy, DEFAULT_MAX_ATTEMPTS, allocate};
use crate::domain::entities::{NewShortcut, Shortcut};
use crate::domain::repositories::{InsertError, OwnerRepository, ShortcutRepository};
use crate::error::AppError;
use crate::utils::url_normalizer::normalize_url;

/// Service for registering long URLs under a site and serving redirects.
///
/// Holds no state between calls; all coordination between concurrent
/// registrations and resolutions is delegated to the store.
pub struct ShortcutService<S: ShortcutRepository, O: OwnerRepository> {
    shortcut_repository: Arc<S>,
    owner_repository: Arc<O>,
    max_attempts: u32,
}

impl<S: ShortcutRepository, O: OwnerRepository> ShortcutService<S, O> {
    /// Creates a new shortcut service with the default allocation bound.
    pub fn new(shortcut_repository: Arc<S>, owner_repository: Arc<O>) -> Self {
        Self {
            shortcut_repository,
            owner_repository,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Overrides the allocation attempt bound.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Registers `long_url` for the site identified by `login` and returns
    /// the short code.
    ///
    /// A URL that is already shortened returns its existing code, whoever
    /// registered it, so registration is idempotent by URL. That existence
    /// check is an optimization only: two registrations of the same new URL
    /// racing past it are arbitrated by the `long_url` uniqueness
    /// constraint, and the loser observes
    /// [`AppError::UrlAlreadyRegistered`].
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidUrl`] for unparseable or non-http(s) input
    /// - [`AppError::OwnerNotFound`] for an unknown login
    /// - [`AppError::UrlAlreadyRegistered`] on a lost same-URL race
    /// - [`AppError::GenerationExhausted`] when no free code was found
    /// - [`AppError::Database`] on storage errors
    pub async fn register(&self, login: &str, long_url: &str) -> Result<String, AppError> {
        let long_url = normalize_url(long_url)?;

        if let Some(existing) = self.shortcut_repository.find_by_long_url(&long_url).await? {
            return Ok(existing.code);
        }

        let owner = self
            .owner_repository
            .find_by_login(login)
            .await?
            .ok_or_else(|| AppError::owner_not_found(login))?;

        let policy = CodeAllocation {
            repository: self.shortcut_repository.as_ref(),
            owner_id: owner.id,
            long_url: &long_url,
        };

        let shortcut = allocate(&policy, self.max_attempts).await?;

        tracing::info!(code = %shortcut.code, owner_id = owner.id, "registered shortcut");

        Ok(shortcut.code)
    }

    /// Resolves a short code to its target URL, counting the visit.
    ///
    /// The lookup and the counter increment are one atomic store operation,
    /// so concurrent resolutions of the same code never lose a visit. An
    /// unknown code is a normal `None`, not an error, and mutates nothing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage errors.
    pub async fn resolve_and_track(&self, code: &str) -> Result<Option<String>, AppError> {
        let resolved = self.shortcut_repository.visit_and_fetch(code).await?;

        Ok(resolved.map(|shortcut| shortcut.long_url))
    }
}

/// Allocation policy for shortcut codes: the payload is the long URL.
struct CodeAllocation<'a, S: ShortcutRepository> {
    repository: &'a S,
    owner_id: i64,
    long_url: &'a str,
}

#[async_trait]
impl<S: ShortcutRepository> AllocationPolicy for CodeAllocation<'_, S> {
    type Record = Shortcut;

    const FIELD: &'static str = "code";

    async fn try_insert(&self, candidate: String) -> Result<Shortcut, InsertError> {
        self.repository
            .insert(NewShortcut {
                code: candidate,
                long_url: self.long_url.to_owned(),
                owner_id: self.owner_id,
            })
            .await
    }

    fn duplicate_key_error(&self) -> AppError {
        AppError::UrlAlreadyRegistered {
            url: self.long_url.to_owned(),
        }
    }
}
