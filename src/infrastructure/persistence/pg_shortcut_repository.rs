//! PostgreSQL implementation of the shortcut repository.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::entities::{NewShortcut, Shortcut};
use crate::domain::repositories::{InsertError, ShortcutRepository};
use crate::error::AppError;
use crate::utils::db_error::{UniqueConstraints, classify_insert_error};

/// Constraint names declared by `migrations/0001_init.sql` for `shortcuts`.
const SHORTCUT_CONSTRAINTS: UniqueConstraints = UniqueConstraints {
    generated: "shortcuts_code_key",
    business: "shortcuts_long_url_key",
};

/// PostgreSQL repository for shortcut storage.
///
/// Uniqueness races are left to the table constraints; failed inserts are
/// classified by constraint name before they reach the caller.
pub struct PgShortcutRepository {
    pool: Arc<PgPool>,
}

impl PgShortcutRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShortcutRepository for PgShortcutRepository {
    async fn insert(&self, new_shortcut: NewShortcut) -> Result<Shortcut, InsertError> {
        sqlx::query_as::<_, Shortcut>(
            r#"
            INSERT INTO shortcuts (code, long_url, owner_id)
            VALUES ($1, $2, $3)
            RETURNING id, code, long_url, owner_id, visits, created_at
            "#,
        )
        .bind(&new_shortcut.code)
        .bind(&new_shortcut.long_url)
        .bind(new_shortcut.owner_id)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| classify_insert_error(e, &SHORTCUT_CONSTRAINTS))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Shortcut>, AppError> {
        let row = sqlx::query_as::<_, Shortcut>(
            r#"
            SELECT id, code, long_url, owner_id, visits, created_at
            FROM shortcuts
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<Shortcut>, AppError> {
        let row = sqlx::query_as::<_, Shortcut>(
            r#"
            SELECT id, code, long_url, owner_id, visits, created_at
            FROM shortcuts
            WHERE long_url = $1
            "#,
        )
        .bind(long_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn visit_and_fetch(&self, code: &str) -> Result<Option<Shortcut>, AppError> {
        // One statement: concurrent visits each see their own increment and
        // none is lost.
        let row = sqlx::query_as::<_, Shortcut>(
            r#"
            UPDATE shortcuts
            SET visits = visits + 1
            WHERE code = $1
            RETURNING id, code, long_url, owner_id, visits, created_at
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<Shortcut>, AppError> {
        let rows = sqlx::query_as::<_, Shortcut>(
            r#"
            SELECT id, code, long_url, owner_id, visits, created_at
            FROM shortcuts
            WHERE owner_id = $1
            "#,
        )
        .bind(owner_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }
}
