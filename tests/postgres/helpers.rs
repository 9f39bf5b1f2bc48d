//! Shared test helpers for `PostgreSQL` integration tests.

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use pg_embedded_setup_unpriv::TestCluster;
use rstest::fixture;
use tasktrack::task::adapters::postgres::{PostgresTaskRepository, TaskPgPool};
use tokio::runtime::Runtime;

/// Boxed error type for setup helpers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// SQL creating the tasks table.
pub const CREATE_SCHEMA_SQL: &str =
    include_str!("../../migrations/2024-05-22-000000_create_tasks/up.sql");

/// Template database name for the pre-migrated schema.
pub const TEMPLATE_DB: &str = "tasktrack_test_template";

/// Provides a [`DefaultClock`] for test fixtures.
#[fixture]
pub fn clock() -> DefaultClock {
    DefaultClock
}

/// Creates a tokio runtime for driving the async repository in sync tests.
pub fn test_runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to create test runtime")
}

/// Ensures the template database exists with the schema applied.
///
/// # Errors
///
/// Returns an error if template creation or migration fails.
pub fn ensure_template(cluster: &TestCluster) -> Result<(), BoxError> {
    cluster
        .ensure_template_exists(TEMPLATE_DB, |db_name| {
            let url = cluster.connection().database_url(db_name);
            let mut conn = PgConnection::establish(&url).map_err(|e| eyre::eyre!("{e}"))?;
            conn.batch_execute(CREATE_SCHEMA_SQL)
                .map_err(|e| eyre::eyre!("migration failed: {e}"))?;
            Ok(())
        })
        .map_err(|e| Box::new(e) as BoxError)?;
    Ok(())
}

/// Repository and pool over a database cloned from the template.
pub struct TestDatabase {
    /// Repository under test.
    pub repository: PostgresTaskRepository,
    /// Pool backing the repository, for direct SQL access.
    pub pool: TaskPgPool,
}

/// Creates a test database from the template and returns a repository.
///
/// # Errors
///
/// Returns an error if database creation or pool construction fails.
pub fn setup_repository(cluster: &TestCluster, db_name: &str) -> Result<TestDatabase, BoxError> {
    cluster
        .create_database_from_template(db_name, TEMPLATE_DB)
        .map_err(|e| Box::new(e) as BoxError)?;
    let url = cluster.connection().database_url(db_name);
    let pool = Pool::builder()
        .max_size(2)
        .build(ConnectionManager::<PgConnection>::new(url))
        .map_err(|e| Box::new(e) as BoxError)?;
    Ok(TestDatabase {
        repository: PostgresTaskRepository::new(pool.clone()),
        pool,
    })
}

/// Runs raw SQL against a test database.
///
/// # Errors
///
/// Returns an error when no connection is available or the SQL fails.
pub fn execute_sql(pool: &TaskPgPool, sql: &str) -> Result<(), BoxError> {
    let mut conn = pool.get().map_err(|e| Box::new(e) as BoxError)?;
    conn.batch_execute(sql).map_err(|e| Box::new(e) as BoxError)?;
    Ok(())
}

/// Guard that drops the test database even if the test panics.
pub struct CleanupGuard<'a> {
    cluster: &'a TestCluster,
    db_name: String,
}

impl<'a> CleanupGuard<'a> {
    /// Registers `db_name` for removal when the guard drops.
    #[must_use]
    pub const fn new(cluster: &'a TestCluster, db_name: String) -> Self {
        Self { cluster, db_name }
    }
}

impl Drop for CleanupGuard<'_> {
    fn drop(&mut self) {
        if let Err(err) = self.cluster.drop_database(self.db_name.as_str()) {
            tracing::warn!(database = %self.db_name, error = %err, "failed to drop test database");
        }
    }
}
