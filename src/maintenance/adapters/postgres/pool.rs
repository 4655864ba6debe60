//! Connection pool construction from store settings.

use super::MaintenancePgPool;
use crate::config::{SettingsError, StoreSettings};
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};

/// Builds a connection pool for the configured database.
///
/// # Errors
///
/// Returns [`SettingsError::MissingDatabaseUrl`] when no URL is configured
/// and [`SettingsError::Pool`] when the pool cannot open its connections.
pub fn build_pool(settings: &StoreSettings) -> Result<MaintenancePgPool, SettingsError> {
    let database_url = settings
        .database_url
        .as_deref()
        .ok_or(SettingsError::MissingDatabaseUrl(settings.backend))?;
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = Pool::builder()
        .max_size(settings.max_connections)
        .build(manager)?;
    tracing::info!(
        max_connections = settings.max_connections,
        "maintenance task connection pool ready"
    );
    Ok(pool)
}
