//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation, password hashing and convenience methods for
//! creating entities with their dependencies.

use sea_orm::{ConnectionTrait, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Cheapest cost bcrypt accepts.
pub const TEST_BCRYPT_COST: u32 = 4;

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Hashes a password at [`TEST_BCRYPT_COST`].
pub fn hash_password(password: &str) -> Result<String, DbErr> {
    bcrypt::hash(password, TEST_BCRYPT_COST).map_err(|e| DbErr::Custom(e.to_string()))
}

/// Creates a teacher together with one course they own.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((teacher, course))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_course_with_teacher<C: ConnectionTrait>(
    db: &C,
) -> Result<(entity::user::Model, entity::course::Model), DbErr> {
    let teacher = crate::factory::user::create_teacher(db).await?;
    let course = crate::factory::course::create_course(db, &teacher.id_card).await?;

    Ok((teacher, course))
}
