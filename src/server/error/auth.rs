use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID is stored in the session.
    #[error("User not found in session")]
    UserNotInSession,

    /// The session references a user ID that no longer exists.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// No admin ID is stored in the session.
    #[error("Admin not found in session")]
    AdminNotInSession,

    /// The session references an admin ID that no longer exists.
    #[error("Admin {0} from session not found in database")]
    AdminNotInDatabase(i32),

    /// The logged-in user lacks the role an endpoint requires.
    ///
    /// # Fields
    /// - User ID
    /// - Description of the missing permission, logged only
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Unknown account or wrong password. Deliberately indistinguishable.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Registration with an `id_card` that is already taken.
    #[error("User with id card '{0}' already exists")]
    UserAlreadyExists(String),

    /// Admin creation or rename with a job number that is already taken.
    #[error("Admin with job number '{0}' already exists")]
    AdminAlreadyExists(String),

    /// Password lacks a lowercase letter, an uppercase letter or a digit.
    #[error("Password must contain a lowercase letter, an uppercase letter and a digit")]
    WeakPassword,

    /// Role other than `student` or `teacher`.
    #[error("Invalid role '{0}', expected 'student' or 'teacher'")]
    InvalidRole(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Session and database lookups of the caller are logged at debug level and answered
/// with a generic "Not logged in" message; the remaining variants are safe to echo.
///
/// # Returns
/// - 400 Bad Request - Weak password or invalid role
/// - 401 Unauthorized - Missing session, stale session, bad credentials
/// - 403 Forbidden - Wrong role for the endpoint
/// - 409 Conflict - Duplicate `id_card` or job number
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession
            | Self::UserNotInDatabase(_)
            | Self::AdminNotInSession
            | Self::AdminNotInDatabase(_) => {
                tracing::debug!("{}", self);
                error_response(StatusCode::UNAUTHORIZED, "Not logged in".to_string())
            }
            Self::AccessDenied(_, _) => {
                tracing::debug!("{}", self);
                error_response(StatusCode::FORBIDDEN, "Access denied".to_string())
            }
            Self::InvalidCredentials => error_response(StatusCode::UNAUTHORIZED, self.to_string()),
            Self::UserAlreadyExists(_) | Self::AdminAlreadyExists(_) => {
                error_response(StatusCode::CONFLICT, self.to_string())
            }
            Self::WeakPassword | Self::InvalidRole(_) => {
                error_response(StatusCode::BAD_REQUEST, self.to_string())
            }
        }
    }
}
