use sea_orm::{
    sea_query::TableCreateStatement, ConnectOptions, ConnectionTrait, Database, DatabaseConnection,
    DbErr,
};
use std::{path::PathBuf, sync::Arc};
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::{error::TestError, factory::helpers::next_id};

/// Where a test database lives.
#[derive(Debug, Clone)]
pub enum TestDatabase {
    /// `sqlite::memory:`; SeaORM keeps a single pooled connection.
    Memory,
    /// A temporary SQLite file shared by a pool of `max_connections`, for tests that
    /// need requests to really run side by side. The file is removed on drop.
    File { path: PathBuf, max_connections: u32 },
}

impl TestDatabase {
    /// A fresh temporary file database.
    pub fn temp_file(max_connections: u32) -> Self {
        let path = std::env::temp_dir().join(format!(
            "courseboard-test-{}-{}.sqlite",
            std::process::id(),
            next_id()
        ));

        Self::File {
            path,
            max_connections,
        }
    }
}

/// Database connection and session shared by one test.
///
/// Both are created on first use. The session store lives in the same database, so
/// session tests see the accounts their factories created.
pub struct TestContext {
    pub db: Option<DatabaseConnection>,
    pub session: Option<Session>,
    database: TestDatabase,
}

impl TestContext {
    /// A context backed by an in-memory database.
    pub fn new() -> Self {
        Self::on(TestDatabase::Memory)
    }

    pub fn on(database: TestDatabase) -> Self {
        Self {
            db: None,
            session: None,
            database,
        }
    }

    /// Gets the database connection, connecting on first call.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - The connection for this context
    /// - `Err(TestError::Database)` - Connecting failed
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        if self.db.is_none() {
            let db = match &self.database {
                TestDatabase::Memory => Database::connect("sqlite::memory:").await?,
                TestDatabase::File {
                    path,
                    max_connections,
                } => {
                    let mut options =
                        ConnectOptions::new(format!("sqlite://{}?mode=rwc", path.display()));
                    options
                        .max_connections(*max_connections)
                        .sqlx_logging(false);

                    Database::connect(options).await?
                }
            };
            self.db = Some(db);
        }

        self.db
            .as_ref()
            .ok_or_else(|| TestError::Database(DbErr::Custom("no test database".to_string())))
    }

    /// Runs the CREATE TABLE statements collected by `TestBuilder`, in order.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Gets the session, creating the `tower_sessions` table on first call.
    ///
    /// Middleware tests store `auth:user` / `auth:admin` in it the way the login
    /// handlers do.
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        if self.session.is_none() {
            let pool = self.database().await?.get_sqlite_connection_pool().clone();

            let store = SqliteStore::new(pool);
            store
                .migrate()
                .await
                .map_err(|e| DbErr::Custom(e.to_string()))?;

            self.session = Some(Session::new(
                None,
                Arc::new(store),
                Some(Expiry::OnInactivity(Duration::days(7))),
            ));
        }

        self.session
            .as_ref()
            .ok_or_else(|| TestError::Database(DbErr::Custom("no test session".to_string())))
    }

    /// Both handles at once, for tests that pass the session and query the database.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.session().await?;

        match (self.db.as_ref(), self.session.as_ref()) {
            (Some(db), Some(session)) => Ok((db, session)),
            _ => Err(TestError::Database(DbErr::Custom(
                "test context failed to initialize".to_string(),
            ))),
        }
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        if let TestDatabase::File { path, .. } = &self.database {
            for suffix in ["", "-journal", "-wal", "-shm"] {
                let mut file = path.clone().into_os_string();
                file.push(suffix);
                let _ = std::fs::remove_file(file);
            }
        }
    }
}
