//! Shortcut entity: a short code mapped to a long URL.

use chrono::{DateTime, Utc};

/// A stored short code with its target URL and visit counter.
///
/// `code` and `long_url` are each unique across all shortcuts; `visits`
/// never goes below zero and is only ever changed by the atomic
/// resolve-and-count operation.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Shortcut {
    pub id: i64,
    pub code: String,
    pub long_url: String,
    pub owner_id: i64,
    pub visits: i64,
    pub created_at: DateTime<Utc>,
}

impl Shortcut {
    pub fn new(
        id: i64,
        code: String,
        long_url: String,
        owner_id: i64,
        visits: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            code,
            long_url,
            owner_id,
            visits,
            created_at,
        }
    }
}

/// Input data for creating a new shortcut. Visits start at zero.
#[derive(Debug, Clone)]
pub struct NewShortcut {
    pub code: String,
    pub long_url: String,
    pub owner_id: i64,
}
