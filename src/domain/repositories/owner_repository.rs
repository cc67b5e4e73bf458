//! Repository trait for owner (registered site) data access.

use async_trait::async_trait;

use crate::domain::entities::{NewOwner, Owner};
use crate::domain::repositories::InsertError;
use crate::error::AppError;

/// Repository interface for owner accounts.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgOwnerRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryStore`] - in-memory
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OwnerRepository: Send + Sync {
    /// Persists a new owner.
    ///
    /// # Errors
    ///
    /// Returns [`InsertError::CodeCollision`] when the login is taken,
    /// [`InsertError::DuplicateKey`] when the site is taken, and
    /// [`InsertError::Other`] for anything else.
    async fn insert(&self, new_owner: NewOwner) -> Result<Owner, InsertError>;

    /// Finds an owner by login.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage errors.
    async fn find_by_login(&self, login: &str) -> Result<Option<Owner>, AppError>;
}
