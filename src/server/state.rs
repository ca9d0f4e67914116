//! Application state shared across all request handlers.
//!
//! `AppState` is built once at startup from `Config` and cloned into each handler
//! through Axum's state extraction. Every field is cheap to clone.

use sea_orm::DatabaseConnection;

use crate::server::config::{Config, CourseRules};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// Clones share the same pool.
    pub db: DatabaseConnection,

    /// Semester calendar and timezone used by the course rules.
    pub rules: CourseRules,

    /// bcrypt work factor for newly hashed passwords.
    pub bcrypt_cost: u32,
}

impl AppState {
    /// Creates the application state from the database pool and loaded configuration.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `config` - Configuration supplying the course rules and bcrypt cost
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        Self {
            db,
            rules: config.rules,
            bcrypt_cost: config.bcrypt_cost,
        }
    }
}
