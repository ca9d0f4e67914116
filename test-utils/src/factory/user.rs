//! User factory for creating students and teachers.
//!
//! Every factory-built user gets a bcrypt hash of [`DEFAULT_PASSWORD`] (hashed at the
//! minimum cost to keep tests fast) unless a different password is supplied.

use crate::factory::helpers::{hash_password, next_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

/// Password given to every factory-built user by default.
pub const DEFAULT_PASSWORD: &str = "Password123";

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let teacher = UserFactory::new(&db)
///     .id_card("T1001")
///     .name("Ada Lovelace")
///     .role("teacher")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a, C: ConnectionTrait> {
    db: &'a C,
    id_card: String,
    name: String,
    password: String,
    role: String,
}

impl<'a, C: ConnectionTrait> UserFactory<'a, C> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - id_card: `"U{id}"` where id is auto-incremented
    /// - name: `"User {id}"`
    /// - password: [`DEFAULT_PASSWORD`]
    /// - role: `"student"`
    pub fn new(db: &'a C) -> Self {
        let id = next_id();
        Self {
            db,
            id_card: format!("U{}", id),
            name: format!("User {}", id),
            password: DEFAULT_PASSWORD.to_string(),
            role: "student".to_string(),
        }
    }

    pub fn id_card(mut self, id_card: impl Into<String>) -> Self {
        self.id_card = id_card.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Sets the stored role string (`"student"` or `"teacher"`).
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Hashing failed or the insert was rejected
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id_card: ActiveValue::Set(self.id_card),
            name: ActiveValue::Set(self.name),
            password_hash: ActiveValue::Set(hash_password(&self.password)?),
            role: ActiveValue::Set(self.role),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with default values.
pub async fn create_student<C: ConnectionTrait>(db: &C) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).role("student").build().await
}

/// Creates a teacher with default values.
pub async fn create_teacher<C: ConnectionTrait>(db: &C) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).role("teacher").build().await
}
