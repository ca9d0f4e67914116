//! Admin account repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::admin::{Admin, UpdateAdminParam};

pub struct AdminRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AdminRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, job_no: String, password_hash: String) -> Result<Admin, DbErr> {
        let entity = entity::admin::ActiveModel {
            job_no: ActiveValue::Set(job_no),
            password_hash: ActiveValue::Set(password_hash),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Admin::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Admin>, DbErr> {
        let entity = entity::prelude::Admin::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Admin::from_entity))
    }

    pub async fn find_by_job_no(&self, job_no: &str) -> Result<Option<Admin>, DbErr> {
        let entity = entity::prelude::Admin::find()
            .filter(entity::admin::Column::JobNo.eq(job_no))
            .one(self.db)
            .await?;

        Ok(entity.map(Admin::from_entity))
    }

    /// All admins ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Admin>, DbErr> {
        let admins = entity::prelude::Admin::find()
            .order_by_asc(entity::admin::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Admin::from_entity)
            .collect();

        Ok(admins)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Admin::find().count(self.db).await
    }

    /// Applies the supplied changes to an admin.
    ///
    /// # Returns
    /// - `Ok(Some(Admin))` - The updated admin
    /// - `Ok(None)` - No admin with that ID
    /// - `Err(DbErr)` - Database error, including a unique violation on `job_no`
    pub async fn update(&self, id: i32, param: UpdateAdminParam) -> Result<Option<Admin>, DbErr> {
        let Some(admin) = entity::prelude::Admin::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::admin::ActiveModel = admin.clone().into();

        if let Some(job_no) = param.job_no {
            active_model.job_no = ActiveValue::Set(job_no);
        }
        if let Some(password_hash) = param.password_hash {
            active_model.password_hash = ActiveValue::Set(password_hash);
        }

        if !active_model.is_changed() {
            return Ok(Some(Admin::from_entity(admin)));
        }

        let updated = active_model.update(self.db).await?;

        Ok(Some(Admin::from_entity(updated)))
    }

    /// # Returns
    /// - `Ok(true)` - The admin was deleted
    /// - `Ok(false)` - No admin with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Admin::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
