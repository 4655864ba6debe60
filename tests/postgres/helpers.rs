//! Shared test helpers for `PostgreSQL` integration tests.

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use mockable::DefaultClock;
use servicebay::config::{StoreBackend, StoreSettings};
use servicebay::maintenance::adapters::postgres::{
    PostgresMaintenanceTaskRepository, build_pool,
};
use std::sync::{Mutex, MutexGuard, OnceLock};

/// Environment variable naming the disposable test database.
pub const DATABASE_URL_VAR: &str = "SERVICEBAY_TEST_DATABASE_URL";

/// SQL creating the maintenance task table.
pub const CREATE_SCHEMA_SQL: &str =
    include_str!("../../migrations/2026-10-01-000000_create_maintenance_tasks/up.sql");

/// SQL dropping the maintenance task table.
pub const DROP_SCHEMA_SQL: &str =
    include_str!("../../migrations/2026-10-01-000000_create_maintenance_tasks/down.sql");

static DATABASE_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();

/// Repository bound to a freshly migrated database.
pub struct TestDatabase {
    pub repository: PostgresMaintenanceTaskRepository,
    pub database_url: String,
    _lock: MutexGuard<'static, ()>,
}

/// Resets the schema and returns a repository, or `None` when no test
/// database is configured.
///
/// # Errors
///
/// Returns an error if the database cannot be reached or migrated.
pub fn setup_repository() -> eyre::Result<Option<TestDatabase>> {
    let Some(database_url) = std::env::var_os(DATABASE_URL_VAR) else {
        return Ok(None);
    };
    let database_url = database_url
        .into_string()
        .map_err(|_| eyre::eyre!("{DATABASE_URL_VAR} must be valid UTF-8"))?;

    let lock = DATABASE_MUTEX
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);

    let mut conn = PgConnection::establish(&database_url)?;
    conn.batch_execute(DROP_SCHEMA_SQL)?;
    conn.batch_execute(CREATE_SCHEMA_SQL)?;

    let pool = build_pool(&StoreSettings {
        backend: StoreBackend::Postgres,
        database_url: Some(database_url.clone()),
        max_connections: 4,
    })?;

    Ok(Some(TestDatabase {
        repository: PostgresMaintenanceTaskRepository::new(pool, DefaultClock),
        database_url,
        _lock: lock,
    }))
}

#[derive(QueryableByName)]
struct SchemaVersionRow {
    #[diesel(sql_type = diesel::sql_types::Integer)]
    schema_version: i32,
}

impl TestDatabase {
    /// Reads the `schema_version` column of a stored task row.
    ///
    /// # Errors
    ///
    /// Returns an error if the row cannot be read.
    pub fn stored_schema_version(&self, id: i64) -> eyre::Result<i32> {
        let mut conn = PgConnection::establish(&self.database_url)?;
        let row = diesel::sql_query("SELECT schema_version FROM maintenance_tasks WHERE id = $1")
            .bind::<diesel::sql_types::BigInt, _>(id)
            .get_result::<SchemaVersionRow>(&mut conn)?;
        Ok(row.schema_version)
    }
}
