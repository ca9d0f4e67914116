//! Type-safe session management wrappers.
//!
//! Students, teachers and admins live in separate tables, so their session keys are
//! kept apart as well. A session carries at most one user ID and at most one admin ID.

use tower_sessions::Session;

use crate::server::error::AppError;

// Session key constants
const SESSION_AUTH_USER_ID: &str = "auth:user";
const SESSION_AUTH_ADMIN_ID: &str = "auth:admin";

/// Authentication session management.
///
/// Handles storing and retrieving the logged-in student/teacher and admin IDs and
/// the session lifecycle.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's surrogate ID in the session.
    ///
    /// The session ID is cycled first so a login never reuses a pre-login session ID.
    ///
    /// # Returns
    /// - `Ok(())` - User ID successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the user's surrogate ID from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - A student or teacher is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_USER_ID).await?)
    }

    /// Stores the admin's ID in the session.
    pub async fn set_admin_id(&self, admin_id: i32) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_AUTH_ADMIN_ID, admin_id).await?;
        Ok(())
    }

    pub async fn get_admin_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_ADMIN_ID).await?)
    }

    /// Clears all data from the session.
    ///
    /// Used during logout to remove both user and admin state.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
