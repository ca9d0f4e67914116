//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing student and teacher records
//! with conversion between entity models and domain models at the infrastructure boundary.
//! The repository is generic over `ConnectionTrait` like every other repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QuerySelect,
};

use crate::server::model::user::{CreateUserParam, User, UserRole};

/// Repository providing database operations for user management.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Arguments
    /// - `param` - Identity, display name, bcrypt hash and role
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on `id_card`
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            id_card: ActiveValue::Set(param.id_card),
            name: ActiveValue::Set(param.name),
            password_hash: ActiveValue::Set(param.password_hash),
            role: ActiveValue::Set(param.role.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        User::from_entity(entity)
    }

    /// Finds a user by surrogate ID, as stored in the session.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error or unreadable stored role
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Finds a user by external identifier.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that `id_card`
    /// - `Err(DbErr)` - Database error or unreadable stored role
    pub async fn find_by_id_card(&self, id_card: &str) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::IdCard.eq(id_card))
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Returns the `id_card` of every teacher whose name contains `name`.
    pub async fn find_teacher_ids_by_name(&self, name: &str) -> Result<Vec<String>, DbErr> {
        entity::prelude::User::find()
            .select_only()
            .column(entity::user::Column::IdCard)
            .filter(entity::user::Column::Role.eq(UserRole::Teacher.as_str()))
            .filter(entity::user::Column::Name.contains(name))
            .into_tuple::<String>()
            .all(self.db)
            .await
    }
}
