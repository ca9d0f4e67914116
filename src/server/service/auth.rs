//! Student and teacher accounts: registration and credential checks.
//!
//! Session handling lives in the controller; this service only decides whether a
//! registration is acceptable and whether a login attempt matches a stored hash.

use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParam, RegisterParams, User, UserRole},
    util::password::{hash_password, is_strong_password, verify_password},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    bcrypt_cost: u32,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `bcrypt_cost` - Work factor used when hashing new passwords
    pub fn new(db: &'a DatabaseConnection, bcrypt_cost: u32) -> Self {
        Self { db, bcrypt_cost }
    }

    /// Registers a student or teacher.
    ///
    /// # Returns
    /// - `Ok(User)` - The registered user
    /// - `Err(AppError::BadRequest)` - Empty `id_card` or name
    /// - `Err(AuthError::InvalidRole)` - Role is not `student` or `teacher`
    /// - `Err(AuthError::UserAlreadyExists)` - The `id_card` is taken
    /// - `Err(AuthError::WeakPassword)` - Password lacks a required character class
    pub async fn register(&self, params: RegisterParams) -> Result<User, AppError> {
        if params.id_card.is_empty() {
            return Err(AppError::BadRequest("id_card is required".to_string()));
        }
        if params.name.is_empty() {
            return Err(AppError::BadRequest("name is required".to_string()));
        }

        let role =
            UserRole::parse(&params.role).ok_or(AuthError::InvalidRole(params.role.clone()))?;

        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_id_card(&params.id_card).await?.is_some() {
            return Err(AuthError::UserAlreadyExists(params.id_card).into());
        }

        if !is_strong_password(&params.password) {
            return Err(AuthError::WeakPassword.into());
        }

        let password_hash = hash_password(&params.password, self.bcrypt_cost).await?;

        let user = user_repo
            .create(CreateUserParam {
                id_card: params.id_card.clone(),
                name: params.name,
                password_hash,
                role,
            })
            .await
            .map_err(|err| match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    AuthError::UserAlreadyExists(params.id_card).into()
                }
                _ => AppError::from(err),
            })?;

        tracing::info!("Registered {} {}", user.role.as_str(), user.id_card);

        Ok(user)
    }

    /// Checks a login attempt.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials match
    /// - `Err(AuthError::InvalidCredentials)` - Unknown `id_card` or wrong password
    pub async fn login(&self, id_card: &str, password: &str) -> Result<User, AppError> {
        let Some(user) = UserRepository::new(self.db)
            .find_by_id_card(id_card.trim())
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &user.password_hash).await? {
            tracing::debug!("Failed login for {}", user.id_card);
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }
}
