//! Password hashing and strength rules.
//!
//! bcrypt is CPU-bound for hundreds of milliseconds at the default cost, so hashing
//! and verification run on tokio's blocking pool instead of an async worker.

use bcrypt::{hash, verify};
use tokio::task::spawn_blocking;

use crate::server::error::{internal::InternalError, AppError};

/// Hashes a password with bcrypt at the configured cost.
pub async fn hash_password(password: &str, cost: u32) -> Result<String, AppError> {
    let password = password.to_owned();
    let hashed = spawn_blocking(move || hash(password, cost))
        .await
        .map_err(InternalError::BlockingTask)?
        .map_err(InternalError::PasswordHash)?;

    Ok(hashed)
}

/// Compares a plaintext password against a stored bcrypt hash.
pub async fn verify_password(password: &str, password_hash: &str) -> Result<bool, AppError> {
    let password = password.to_owned();
    let password_hash = password_hash.to_owned();
    let matches = spawn_blocking(move || verify(password, &password_hash))
        .await
        .map_err(InternalError::BlockingTask)?
        .map_err(InternalError::PasswordHash)?;

    Ok(matches)
}

/// Requires at least one lowercase letter, one uppercase letter and one digit.
pub fn is_strong_password(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
}
