use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::{admin::AdminRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::{admin::Admin, user::User},
};

/// Role a route requires of the logged-in user.
pub enum Permission {
    Student,
    Teacher,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the logged-in student or teacher and checks every permission.
    ///
    /// An empty permission list accepts any logged-in user.
    ///
    /// # Returns
    /// - `Ok(User)` - The caller
    /// - `Err(AuthError::UserNotInSession)` - Not logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Session points at a deleted user
    /// - `Err(AuthError::AccessDenied)` - Caller lacks a required role
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Student => {
                    if !user.is_student() {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "Endpoint requires the student role".to_string(),
                        )
                        .into());
                    }
                }
                Permission::Teacher => {
                    if !user.is_teacher() {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "Endpoint requires the teacher role".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }

    /// Resolves the logged-in admin.
    ///
    /// # Returns
    /// - `Ok(Admin)` - The calling admin
    /// - `Err(AuthError::AdminNotInSession | AdminNotInDatabase)`
    pub async fn require_admin(&self) -> Result<Admin, AppError> {
        let Some(admin_id) = AuthSession::new(self.session).get_admin_id().await? else {
            return Err(AuthError::AdminNotInSession.into());
        };

        let Some(admin) = AdminRepository::new(self.db).find_by_id(admin_id).await? else {
            return Err(AuthError::AdminNotInDatabase(admin_id).into());
        };

        Ok(admin)
    }
}
