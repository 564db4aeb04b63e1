//! Shared helper utilities for factory methods.
//!
//! Common utilities used across all factory modules, including ID generation and
//! convenience methods for creating entities with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Provides monotonically increasing values for use in generating unique test
/// identifiers (e-mails, inquiry codes) across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user together with a review written by that user.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, review))` - Tuple of the created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_review_with_user(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::review::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let review = crate::factory::review::create_review(db, user.id).await?;

    Ok((user, review))
}
