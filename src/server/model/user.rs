//! User domain models and parameters.
//!
//! Users are either students or teachers; the role is fixed at registration. The
//! `id_card` is the identity shown to other users and stored on courses, while the
//! surrogate `id` is what sessions and enrollments reference.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::model::user::UserDto;

/// Role of a registered user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Student,
    Teacher,
}

impl UserRole {
    /// Parses the stored or submitted role string.
    ///
    /// # Returns
    /// - `Some(UserRole)` - `"student"` or `"teacher"`
    /// - `None` - Any other value
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "student" => Some(Self::Student),
            "teacher" => Some(Self::Teacher),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
        }
    }
}

/// A registered student or teacher.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Surrogate key referenced by sessions and enrollments.
    pub id: i32,
    /// Immutable external identifier, unique across users.
    pub id_card: String,
    pub name: String,
    /// bcrypt hash; never leaves the server.
    pub password_hash: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(DbErr::Type)` - The stored role is neither `student` nor `teacher`
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, DbErr> {
        let role = UserRole::parse(&entity.role).ok_or_else(|| {
            DbErr::Type(format!(
                "user {} has unknown role '{}'",
                entity.id, entity.role
            ))
        })?;

        Ok(Self {
            id: entity.id,
            id_card: entity.id_card,
            name: entity.name,
            password_hash: entity.password_hash,
            role,
            created_at: entity.created_at,
        })
    }

    /// Converts the user domain model to a DTO for API responses, dropping the hash.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            id_card: self.id_card,
            name: self.name,
            role: self.role.as_str().to_string(),
            created_at: self.created_at,
        }
    }

    pub fn is_student(&self) -> bool {
        self.role == UserRole::Student
    }

    pub fn is_teacher(&self) -> bool {
        self.role == UserRole::Teacher
    }
}

/// Parameters for inserting a user row; the password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub id_card: String,
    pub name: String,
    pub password_hash: String,
    pub role: UserRole,
}

/// Registration request as submitted by the client.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub id_card: String,
    pub name: String,
    pub password: String,
    pub role: String,
}

impl RegisterParams {
    pub fn from_dto(dto: crate::model::user::RegisterDto) -> Self {
        Self {
            id_card: dto.id_card.trim().to_string(),
            name: dto.name.trim().to_string(),
            password: dto.password,
            role: dto.role.trim().to_lowercase(),
        }
    }
}
