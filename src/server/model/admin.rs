//! Admin account domain models.
//!
//! Admins live in their own table, log in with a job number, and only manage other
//! admin accounts. They never own courses or enroll.

use chrono::{DateTime, Utc};

use crate::model::admin::{AdminDto, UpdateAdminDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Admin {
    pub id: i32,
    pub job_no: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl Admin {
    pub fn from_entity(entity: entity::admin::Model) -> Self {
        Self {
            id: entity.id,
            job_no: entity.job_no,
            password_hash: entity.password_hash,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> AdminDto {
        AdminDto {
            id: self.id,
            job_no: self.job_no,
            created_at: self.created_at,
        }
    }
}

/// Repository update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateAdminParam {
    pub job_no: Option<String>,
    pub password_hash: Option<String>,
}

/// Client-facing update carrying a plaintext password.
#[derive(Debug, Clone, Default)]
pub struct UpdateAdminParams {
    pub job_no: Option<String>,
    pub password: Option<String>,
}

impl UpdateAdminParams {
    pub fn from_dto(dto: UpdateAdminDto) -> Self {
        Self {
            job_no: dto
                .job_no
                .map(|job_no| job_no.trim().to_string())
                .filter(|job_no| !job_no.is_empty()),
            password: dto.password.filter(|password| !password.is_empty()),
        }
    }
}
