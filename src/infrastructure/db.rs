//! Database pool construction and migrations.

use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::Config;

/// Embedded migrations for the `owners` and `shortcuts` tables.
///
/// The uniqueness constraint names these migrations declare are what the
/// insert-failure classifier matches on.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Opens a PostgreSQL pool using the tuning knobs from `config`.
///
/// # Errors
///
/// Returns the underlying `sqlx::Error` when the database is unreachable.
pub async fn connect(config: &Config) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
}

/// Applies pending migrations.
///
/// # Errors
///
/// Returns a `MigrateError` when a migration fails or the recorded history
/// diverges from the embedded files.
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}
