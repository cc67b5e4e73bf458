//! Repository trait definitions for the domain layer.
//!
//! These traits are the storage port: insert-with-uniqueness-enforcement,
//! point lookups, the atomic visit counter, and the per-owner listing.
//! Concrete implementations live in `crate::infrastructure::persistence`;
//! mocks are auto-generated via `mockall` for unit tests.

pub mod owner_repository;
pub mod shortcut_repository;

pub use owner_repository::OwnerRepository;
pub use shortcut_repository::ShortcutRepository;

#[cfg(test)]
pub use owner_repository::MockOwnerRepository;
#[cfg(test)]
pub use shortcut_repository::MockShortcutRepository;

/// Typed outcome of a failed `insert`.
///
/// Both repositories guard two uniqueness invariants: one on the column the
/// allocator fills with random values (`code` / `login`) and one on the
/// caller-supplied business key (`long_url` / `site`). Implementations
/// translate the store's constraint report into one of these reasons so
/// callers never inspect engine errors.
#[derive(Debug)]
pub enum InsertError {
    /// The generated value is already taken. Retrying with a fresh value
    /// can succeed.
    CodeCollision,
    /// The business key is already taken. Retrying cannot succeed.
    DuplicateKey,
    /// Any other storage failure, carried unchanged so upstream diagnostics
    /// are not lost.
    Other(sqlx::Error),
}
