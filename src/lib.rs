//! # url-shortcut
//!
//! The storage-backed core of a URL shortening service: collision-resistant
//! allocation of short random identifiers, atomic visit counting on
//! redirect, and per-site usage statistics, all built on PostgreSQL's
//! transactional guarantees.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and repository traits
//! - **Application Layer** ([`application`]) - Registration, redirect, and
//!   statistics services plus the shared allocation machinery
//! - **Infrastructure Layer** ([`infrastructure`]) - PostgreSQL and
//!   in-memory storage backends
//!
//! The HTTP surface, authentication, and credential hashing belong to the
//! embedding application; services here consume an authenticated site login
//! and a pre-hashed credential.
//!
//! ## How uniqueness is enforced
//!
//! Generated codes and logins are random 8-character tokens. The services
//! hold no locks and no cross-call state: every insert goes straight to the
//! store, whose uniqueness constraints arbitrate races. A failed insert
//! comes back classified by constraint, and only a collision on the
//! generated column is retried (bounded, 5 attempts by default). See
//! [`application::services::allocator`].
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use url_shortcut::config::Config;
//! use url_shortcut::infrastructure::db;
//! use url_shortcut::infrastructure::persistence::{PgOwnerRepository, PgShortcutRepository};
//! use url_shortcut::prelude::*;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::from_env()?;
//! url_shortcut::logging::init(&config);
//!
//! let pool = Arc::new(db::connect(&config).await?);
//! db::migrate(&pool).await?;
//!
//! let owners = Arc::new(PgOwnerRepository::new(pool.clone()));
//! let shortcuts = Arc::new(PgShortcutRepository::new(pool.clone()));
//!
//! let registration = RegistrationService::new(owners.clone())
//!     .with_max_attempts(config.allocation_max_attempts);
//! let service = ShortcutService::new(shortcuts.clone(), owners.clone())
//!     .with_max_attempts(config.allocation_max_attempts);
//!
//! let owner = registration.register_site("example.com", "<hashed credential>").await?;
//! let code = service.register(&owner.login, "https://example.com/article").await?;
//! let target = service.resolve_and_track(&code).await?;
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod utils;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        RegistrationService, ShortcutService, StatsService, UrlStats,
    };
    pub use crate::domain::entities::{NewOwner, NewShortcut, Owner, Shortcut};
    pub use crate::error::AppError;
}
