//! Owner entity: a registered site account.

use chrono::{DateTime, Utc};

/// A registered site that owns shortcuts.
///
/// `login` is the generated identifier the site authenticates with; `site`
/// is the registering domain. Both are unique across owners. The credential
/// arrives already hashed from the surrounding application.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Owner {
    pub id: i64,
    pub login: String,
    pub password_hash: String,
    pub site: String,
    pub created_at: DateTime<Utc>,
}

impl Owner {
    pub fn new(
        id: i64,
        login: String,
        password_hash: String,
        site: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            login,
            password_hash,
            site,
            created_at,
        }
    }
}

/// Input data for creating a new owner.
#[derive(Debug, Clone)]
pub struct NewOwner {
    pub login: String,
    pub password_hash: String,
    pub site: String,
}
