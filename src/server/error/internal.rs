use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// bcrypt failed to hash or verify a password.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to process password hash: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// A task on the blocking pool panicked or was cancelled.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Blocking task failed: {0}")]
    BlockingTask(#[from] tokio::task::JoinError),
}
