//! Repository trait for shortcut data access.

use async_trait::async_trait;

use crate::domain::entities::{NewShortcut, Shortcut};
use crate::domain::repositories::InsertError;
use crate::error::AppError;

/// Repository interface for shortcut storage.
///
/// All cross-call coordination is delegated to the store: uniqueness races
/// on insert are reported through [`InsertError`], and the visit counter is
/// only ever touched by the atomic [`visit_and_fetch`] operation.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortcutRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryStore`] - in-memory
/// - Test mocks available with `cfg(test)`
///
/// [`visit_and_fetch`]: ShortcutRepository::visit_and_fetch
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortcutRepository: Send + Sync {
    /// Persists a new shortcut with a zero visit counter.
    ///
    /// # Errors
    ///
    /// Returns [`InsertError::CodeCollision`] when the code is taken,
    /// [`InsertError::DuplicateKey`] when the long URL is taken, and
    /// [`InsertError::Other`] for anything else.
    async fn insert(&self, new_shortcut: NewShortcut) -> Result<Shortcut, InsertError>;

    /// Finds a shortcut by its code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Shortcut>, AppError>;

    /// Finds a shortcut by its canonical long URL.
    ///
    /// Used to answer "is this URL already shortened" before allocating.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage errors.
    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<Shortcut>, AppError>;

    /// Atomically increments the visit counter of `code` and returns the
    /// updated row, or `None` when the code is unknown.
    ///
    /// The increment and the read are one storage operation: concurrent
    /// calls for the same code must all be counted, and the returned row
    /// reflects this call's own increment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage errors.
    async fn visit_and_fetch(&self, code: &str) -> Result<Option<Shortcut>, AppError>;

    /// Lists every shortcut owned by `owner_id`, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage errors.
    async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<Shortcut>, AppError>;
}
