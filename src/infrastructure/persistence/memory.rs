//! A fully in-memory storage backend.
//!
//! Keeps every record in RAM behind a single table lock. Intended for tests
//! and for embedding without a database; uniqueness enforcement and counter
//! atomicity match the PostgreSQL backend's observable behavior, with the
//! lock standing in for the store's transactional guarantees.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::entities::{NewOwner, NewShortcut, Owner, Shortcut};
use crate::domain::repositories::{InsertError, OwnerRepository, ShortcutRepository};
use crate::error::AppError;

#[derive(Debug, Default)]
struct Tables {
    owners: HashMap<i64, Owner>,
    shortcuts: HashMap<i64, Shortcut>,
    owner_seq: i64,
    shortcut_seq: i64,
}

/// In-memory store implementing both repository traits, so one instance can
/// back all services in a test or an embedded setup.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        // A panic while holding the lock leaves plain data, not a broken
        // invariant.
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl OwnerRepository for MemoryStore {
    async fn insert(&self, new_owner: NewOwner) -> Result<Owner, InsertError> {
        let mut tables = self.lock();

        if tables.owners.values().any(|o| o.login == new_owner.login) {
            return Err(InsertError::CodeCollision);
        }
        if tables.owners.values().any(|o| o.site == new_owner.site) {
            return Err(InsertError::DuplicateKey);
        }

        tables.owner_seq += 1;
        let owner = Owner::new(
            tables.owner_seq,
            new_owner.login,
            new_owner.password_hash,
            new_owner.site,
            Utc::now(),
        );
        tables.owners.insert(owner.id, owner.clone());

        Ok(owner)
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<Owner>, AppError> {
        let tables = self.lock();

        Ok(tables.owners.values().find(|o| o.login == login).cloned())
    }
}

#[async_trait]
impl ShortcutRepository for MemoryStore {
    async fn insert(&self, new_shortcut: NewShortcut) -> Result<Shortcut, InsertError> {
        let mut tables = self.lock();

        if tables
            .shortcuts
            .values()
            .any(|s| s.code == new_shortcut.code)
        {
            return Err(InsertError::CodeCollision);
        }
        if tables
            .shortcuts
            .values()
            .any(|s| s.long_url == new_shortcut.long_url)
        {
            return Err(InsertError::DuplicateKey);
        }

        tables.shortcut_seq += 1;
        let shortcut = Shortcut::new(
            tables.shortcut_seq,
            new_shortcut.code,
            new_shortcut.long_url,
            new_shortcut.owner_id,
            0,
            Utc::now(),
        );
        tables.shortcuts.insert(shortcut.id, shortcut.clone());

        Ok(shortcut)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Shortcut>, AppError> {
        let tables = self.lock();

        Ok(tables.shortcuts.values().find(|s| s.code == code).cloned())
    }

    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<Shortcut>, AppError> {
        let tables = self.lock();

        Ok(tables
            .shortcuts
            .values()
            .find(|s| s.long_url == long_url)
            .cloned())
    }

    async fn visit_and_fetch(&self, code: &str) -> Result<Option<Shortcut>, AppError> {
        let mut tables = self.lock();

        Ok(tables
            .shortcuts
            .values_mut()
            .find(|s| s.code == code)
            .map(|s| {
                s.visits += 1;
                s.clone()
            }))
    }

    async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<Shortcut>, AppError> {
        let tables = self.lock();

        Ok(tables
            .shortcuts
            .values()
            .filter(|s| s.owner_id == owner_id)
            .cloned()
            .collect())
    }
}
