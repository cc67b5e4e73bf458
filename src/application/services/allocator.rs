//! Bounded-retry allocation of store-unique random values.

use async_trait::async_trait;

use crate::domain::repositories::InsertError;
use crate::error::AppError;
use crate::utils::token::generate_token;

/// Default number of insert attempts before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// One kind of unique value the allocator can hand out.
///
/// A policy knows the column it fills (for logs and errors), how to attempt
/// an insert with a candidate value, and which error a duplicate business
/// key maps to. The retry loop in [`allocate`] is shared by every policy;
/// shortcut codes and owner logins differ only in their policy.
#[async_trait]
pub trait AllocationPolicy: Sync {
    /// The record produced by a successful insert.
    type Record;

    /// Generated column name, used in logs and exhaustion errors.
    const FIELD: &'static str;

    /// Attempts to persist a record carrying `candidate` in the generated
    /// column. Uniqueness races are reported through [`InsertError`].
    async fn try_insert(&self, candidate: String) -> Result<Self::Record, InsertError>;

    /// Error raised when the payload's own unique key is already taken.
    fn duplicate_key_error(&self) -> AppError;
}

/// Allocates a unique value under `policy`, retrying with fresh candidates
/// on collision.
///
/// Each attempt draws a new random token and tries one insert; concurrent
/// allocations racing for the same token are serialized by the store's
/// uniqueness constraint, so exactly one wins and the other retries. A
/// collision on the generated column consumes an attempt; a duplicate
/// business key or an unclassified storage failure aborts immediately
/// without retrying.
///
/// # Errors
///
/// - [`AppError::GenerationExhausted`] after `max_attempts` collisions
/// - the policy's duplicate-key error on a business-key conflict
/// - [`AppError::Database`] for unclassified storage failures, unchanged
pub async fn allocate<P: AllocationPolicy>(
    policy: &P,
    max_attempts: u32,
) -> Result<P::Record, AppError> {
    let max_attempts = max_attempts.max(1);

    for attempt in 1..=max_attempts {
        let candidate = generate_token();

        match policy.try_insert(candidate).await {
            Ok(record) => return Ok(record),
            Err(InsertError::CodeCollision) => {
                tracing::warn!(
                    field = P::FIELD,
                    attempt,
                    max_attempts,
                    "generated value collided, retrying"
                );
            }
            Err(InsertError::DuplicateKey) => return Err(policy.duplicate_key_error()),
            Err(InsertError::Other(e)) => return Err(AppError::Database(e)),
        }
    }

    tracing::error!(field = P::FIELD, max_attempts, "allocation attempts exhausted");

    Err(AppError::GenerationExhausted {
        field: P::FIELD,
        attempts: max_attempts,
    })
}
