//! PostgreSQL implementation of the owner repository.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::entities::{NewOwner, Owner};
use crate::domain::repositories::{InsertError, OwnerRepository};
use crate::error::AppError;
use crate::utils::db_error::{UniqueConstraints, classify_insert_error};

/// Constraint names declared by `migrations/0001_init.sql` for `owners`.
const OWNER_CONSTRAINTS: UniqueConstraints = UniqueConstraints {
    generated: "owners_login_key",
    business: "owners_site_key",
};

/// PostgreSQL repository for owner accounts.
pub struct PgOwnerRepository {
    pool: Arc<PgPool>,
}

impl PgOwnerRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OwnerRepository for PgOwnerRepository {
    async fn insert(&self, new_owner: NewOwner) -> Result<Owner, InsertError> {
        sqlx::query_as::<_, Owner>(
            r#"
            INSERT INTO owners (login, password_hash, site)
            VALUES ($1, $2, $3)
            RETURNING id, login, password_hash, site, created_at
            "#,
        )
        .bind(&new_owner.login)
        .bind(&new_owner.password_hash)
        .bind(&new_owner.site)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| classify_insert_error(e, &OWNER_CONSTRAINTS))
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<Owner>, AppError> {
        let row = sqlx::query_as::<_, Owner>(
            r#"
            SELECT id, login, password_hash, site, created_at
            FROM owners
            WHERE login = $1
            "#,
        )
        .bind(login)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }
}
