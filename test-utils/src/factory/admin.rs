//! Admin account factory.

use crate::factory::helpers::{hash_password, next_id};
use crate::factory::user::DEFAULT_PASSWORD;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

/// Factory for creating admin accounts.
///
/// Defaults to job number `"A{id}"` and [`DEFAULT_PASSWORD`].
pub struct AdminFactory<'a, C: ConnectionTrait> {
    db: &'a C,
    job_no: String,
    password: String,
}

impl<'a, C: ConnectionTrait> AdminFactory<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self {
            db,
            job_no: format!("A{}", next_id()),
            password: DEFAULT_PASSWORD.to_string(),
        }
    }

    pub fn job_no(mut self, job_no: impl Into<String>) -> Self {
        self.job_no = job_no.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub async fn build(self) -> Result<entity::admin::Model, DbErr> {
        entity::admin::ActiveModel {
            job_no: ActiveValue::Set(self.job_no),
            password_hash: ActiveValue::Set(hash_password(&self.password)?),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an admin with default values.
pub async fn create_admin<C: ConnectionTrait>(db: &C) -> Result<entity::admin::Model, DbErr> {
    AdminFactory::new(db).build().await
}
