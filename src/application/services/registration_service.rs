//! Site account registration.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::services::allocator::{AllocationPolicy, DEFAULT_MAX_ATTEMPTS, allocate};
use crate::domain::entities::{NewOwner, Owner};
use crate::domain::repositories::{InsertError, OwnerRepository};
use crate::error::AppError;
use crate::utils::site::normalize_site;

/// Service for registering sites and allocating their logins.
///
/// The credential arrives already hashed; this service never sees or
/// produces plaintext secrets. Login allocation goes through the same
/// bounded-retry machinery as shortcut codes.
pub struct RegistrationService<O: OwnerRepository> {
    owner_repository: Arc<O>,
    max_attempts: u32,
}

impl<O: OwnerRepository> RegistrationService<O> {
    /// Creates a new registration service with the default allocation bound.
    pub fn new(owner_repository: Arc<O>) -> Self {
        Self {
            owner_repository,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Overrides the allocation attempt bound.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Registers `site` and returns the stored owner, including the
    /// generated login.
    ///
    /// There is no pre-check for an existing site: the `site` uniqueness
    /// constraint arbitrates, and the second registration of the same site
    /// observes [`AppError::SiteAlreadyRegistered`] whether or not it raced
    /// the first.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidSite`] for a value that is not a bare host
    /// - [`AppError::SiteAlreadyRegistered`] when the site has an account
    /// - [`AppError::GenerationExhausted`] when no free login was found
    /// - [`AppError::Database`] on storage errors
    pub async fn register_site(
        &self,
        site: &str,
        password_hash: &str,
    ) -> Result<Owner, AppError> {
        let site = normalize_site(site)?;

        let policy = LoginAllocation {
            repository: self.owner_repository.as_ref(),
            site: &site,
            password_hash,
        };

        let owner = allocate(&policy, self.max_attempts).await?;

        tracing::info!(owner_id = owner.id, site = %owner.site, "registered site");

        Ok(owner)
    }
}

/// Allocation policy for logins: the payload is the site and its credential.
struct LoginAllocation<'a, O: OwnerRepository> {
    repository: &'a O,
    site: &'a str,
    password_hash: &'a str,
}

#[async_trait]
impl<O: OwnerRepository> AllocationPolicy for LoginAllocation<'_, O> {
    type Record = Owner;

    const FIELD: &'static str = "login";

    async fn try_insert(&self, candidate: String) -> Result<Owner, InsertError> {
        self.repository
            .insert(NewOwner {
                login: candidate,
                password_hash: self.password_hash.to_owned(),
                site: self.site.to_owned(),
            })
            .await
    }

    fn duplicate_key_error(&self) -> AppError {
        AppError::SiteAlreadyRegistered {
            site: self.site.to_owned(),
        }
    }
}
