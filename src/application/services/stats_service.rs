//! Per-site usage statistics.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::repositories::{OwnerRepository, ShortcutRepository};
use crate::error::AppError;

/// One shortcut's usage, as reported to the owning site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlStats {
    pub long_url: String,
    pub visits: i64,
}

/// Service for reporting visit counts to registered sites.
pub struct StatsService<S: ShortcutRepository, O: OwnerRepository> {
    shortcut_repository: Arc<S>,
    owner_repository: Arc<O>,
}

impl<S: ShortcutRepository, O: OwnerRepository> StatsService<S, O> {
    /// Creates a new statistics service.
    pub fn new(shortcut_repository: Arc<S>, owner_repository: Arc<O>) -> Self {
        Self {
            shortcut_repository,
            owner_repository,
        }
    }

    /// Lists every shortcut owned by `login` with its current visit count,
    /// in no particular order.
    ///
    /// A known login with no shortcuts yields an empty list; an unknown
    /// login is an error, so "never registered" and "no shortcuts yet" stay
    /// distinguishable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::OwnerNotFound`] for an unknown login and
    /// [`AppError::Database`] on storage errors.
    pub async fn stats_for(&self, login: &str) -> Result<Vec<UrlStats>, AppError> {
        let owner = self
            .owner_repository
            .find_by_login(login)
            .await?
            .ok_or_else(|| AppError::owner_not_found(login))?;

        let shortcuts = self.shortcut_repository.list_by_owner(owner.id).await?;

        Ok(shortcuts
            .into_iter()
            .map(|shortcut| UrlStats {
                long_url: shortcut.long_url,
                visits: shortcut.visits,
            })
            .collect())
    }
}
