//! Admin account management.
//!
//! Admins authenticate with a job number and manage each other's accounts. The first
//! admin comes from the `ADMIN_JOB_NO` / `ADMIN_PASSWORD` bootstrap at startup.

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::admin::AdminRepository,
    error::{auth::AuthError, AppError},
    model::admin::{Admin, UpdateAdminParam, UpdateAdminParams},
    util::password::{hash_password, is_strong_password, verify_password},
};

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
    bcrypt_cost: u32,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection, bcrypt_cost: u32) -> Self {
        Self { db, bcrypt_cost }
    }

    /// Checks admin credentials.
    ///
    /// # Returns
    /// - `Ok(Admin)` - Credentials match
    /// - `Err(AuthError::InvalidCredentials)` - Unknown job number or wrong password
    pub async fn login(&self, job_no: &str, password: &str) -> Result<Admin, AppError> {
        let Some(admin) = AdminRepository::new(self.db)
            .find_by_job_no(job_no.trim())
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &admin.password_hash).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(admin)
    }

    /// Creates an admin account.
    ///
    /// # Returns
    /// - `Ok(Admin)` - The new admin
    /// - `Err(AppError::BadRequest)` - Empty job number
    /// - `Err(AuthError::WeakPassword)` - Password lacks a required character class
    /// - `Err(AuthError::AdminAlreadyExists)` - Job number taken
    pub async fn create(&self, job_no: &str, password: &str) -> Result<Admin, AppError> {
        let job_no = job_no.trim();
        if job_no.is_empty() {
            return Err(AppError::BadRequest("job_no is required".to_string()));
        }
        if !is_strong_password(password) {
            return Err(AuthError::WeakPassword.into());
        }

        let repo = AdminRepository::new(self.db);
        if repo.find_by_job_no(job_no).await?.is_some() {
            return Err(AuthError::AdminAlreadyExists(job_no.to_string()).into());
        }

        let password_hash = hash_password(password, self.bcrypt_cost).await?;
        let admin = repo
            .create(job_no.to_string(), password_hash)
            .await
            .map_err(|err| map_duplicate_job_no(err, job_no))?;

        tracing::info!("Created admin {}", admin.job_no);

        Ok(admin)
    }

    pub async fn get_all(&self) -> Result<Vec<Admin>, AppError> {
        Ok(AdminRepository::new(self.db).get_all().await?)
    }

    pub async fn get(&self, id: i32) -> Result<Admin, AppError> {
        AdminRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Admin {} not found", id)))
    }

    /// Changes an admin's job number and/or password.
    ///
    /// # Returns
    /// - `Ok(Admin)` - The updated admin
    /// - `Err(AppError::NotFound)` - No admin with that ID
    /// - `Err(AuthError::WeakPassword | AdminAlreadyExists)`
    pub async fn update(&self, id: i32, params: UpdateAdminParams) -> Result<Admin, AppError> {
        let repo = AdminRepository::new(self.db);

        if let Some(job_no) = &params.job_no {
            if let Some(existing) = repo.find_by_job_no(job_no).await? {
                if existing.id != id {
                    return Err(AuthError::AdminAlreadyExists(job_no.clone()).into());
                }
            }
        }

        let password_hash = match &params.password {
            Some(password) if !is_strong_password(password) => {
                return Err(AuthError::WeakPassword.into());
            }
            Some(password) => Some(hash_password(password, self.bcrypt_cost).await?),
            None => None,
        };

        let job_no = params.job_no.clone();
        let admin = repo
            .update(
                id,
                UpdateAdminParam {
                    job_no: params.job_no,
                    password_hash,
                },
            )
            .await
            .map_err(|err| map_duplicate_job_no(err, job_no.as_deref().unwrap_or_default()))?
            .ok_or_else(|| AppError::NotFound(format!("Admin {} not found", id)))?;

        Ok(admin)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !AdminRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Admin {} not found", id)));
        }

        tracing::info!("Deleted admin {}", id);

        Ok(())
    }

    /// Creates the first admin if the admin table is empty.
    ///
    /// The bootstrap password is taken as configured; the strength rule only applies
    /// to accounts created through the API.
    ///
    /// # Returns
    /// - `Ok(Some(Admin))` - A bootstrap admin was created
    /// - `Ok(None)` - Admins already exist
    pub async fn bootstrap(&self, job_no: &str, password: &str) -> Result<Option<Admin>, AppError> {
        let repo = AdminRepository::new(self.db);
        if repo.count().await? > 0 {
            return Ok(None);
        }

        let password_hash = hash_password(password, self.bcrypt_cost).await?;
        let admin = repo.create(job_no.trim().to_string(), password_hash).await?;

        tracing::info!("Created bootstrap admin {}", admin.job_no);

        Ok(Some(admin))
    }
}

fn map_duplicate_job_no(err: DbErr, job_no: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AuthError::AdminAlreadyExists(job_no.to_string()).into()
        }
        _ => err.into(),
    }
}
