//! `PostgreSQL` adapters for maintenance task persistence.
//!
//! Enabled with the `postgres` cargo feature. The table layout lives in
//! `migrations/`.

mod models;
mod pool;
mod repository;
mod schema;

pub use pool::build_pool;
pub use repository::{MaintenancePgPool, PostgresMaintenanceTaskRepository};
