//! Initialization of logging, database, sessions and the bootstrap admin.

use axum::http::{header, HeaderValue, Method};
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_http::cors::CorsLayer;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    service::admin::AdminService,
};

/// Installs the global tracing subscriber.
///
/// Filtering follows `RUST_LOG` and defaults to `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions expire after a week of inactivity. Cookies are marked secure when the
/// application is served over https.
///
/// # Returns
/// - `Ok(SessionManagerLayer<SqliteStore>)` - Layer ready to wrap the router
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store.migrate().await?;

    let session = SessionManagerLayer::new(session_store)
        .with_secure(config.app_url.starts_with("https://"))
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session)
}

/// Builds the CORS layer allowing credentialed requests from `APP_URL`.
pub fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let origin = config
        .app_url
        .trim_end_matches('/')
        .parse::<HeaderValue>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: "APP_URL".to_string(),
            value: config.app_url.clone(),
            reason: e.to_string(),
        })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]))
}

/// Creates the first admin from `ADMIN_JOB_NO` / `ADMIN_PASSWORD` if none exists.
///
/// Does nothing when admins already exist. Logs a warning when the table is empty and
/// the bootstrap credentials are incomplete, since the admin API is then unreachable.
pub async fn bootstrap_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let service = AdminService::new(db, config.bcrypt_cost);

    match (&config.admin_job_no, &config.admin_password) {
        (Some(job_no), Some(password)) => {
            if service.bootstrap(job_no, password).await?.is_none() {
                tracing::debug!("Admins already exist, skipping bootstrap admin");
            }
        }
        _ => {
            if service.get_all().await?.is_empty() {
                tracing::warn!(
                    "No admin exists; set ADMIN_JOB_NO and ADMIN_PASSWORD to create one"
                );
            }
        }
    }

    Ok(())
}
