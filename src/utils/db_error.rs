//! Classification of failed inserts against uniqueness constraints.

use crate::domain::repositories::InsertError;

/// The two uniqueness constraints guarding a table that receives generated
/// values: one on the generated column, one on the caller-supplied business
/// key.
#[derive(Debug, Clone, Copy)]
pub struct UniqueConstraints {
    pub generated: &'static str,
    pub business: &'static str,
}

/// Maps a failed insert to a typed reason.
///
/// Uses the structured constraint name PostgreSQL reports for unique
/// violations; the error message text is never inspected. Violations of
/// constraints other than the two known ones, and every non-constraint
/// failure, pass through unchanged as [`InsertError::Other`].
pub fn classify_insert_error(error: sqlx::Error, constraints: &UniqueConstraints) -> InsertError {
    let constraint = error
        .as_database_error()
        .filter(|db| db.is_unique_violation())
        .and_then(|db| db.constraint())
        .map(str::to_owned);

    match constraint.as_deref() {
        Some(name) if name == constraints.generated => InsertError::CodeCollision,
        Some(name) if name == constraints.business => InsertError::DuplicateKey,
        _ => InsertError::Other(error),
    }
}
