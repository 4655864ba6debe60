//! Runtime configuration for the maintenance task tracker.
//!
//! Settings are layered from built-in defaults and `SERVICEBAY__*`
//! environment variables, with `__` separating nested keys. For example,
//! `SERVICEBAY__STORE__BACKEND=postgres` selects the `PostgreSQL` store.

use ::config::{Config, ConfigError, Environment};
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Environment variable prefix for all settings.
pub const ENV_PREFIX: &str = "SERVICEBAY";

const DEFAULT_MAX_CONNECTIONS: u32 = 8;

/// Storage backend used for maintenance task records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackend {
    /// Process-local storage; contents are lost on exit.
    #[default]
    Memory,
    /// `PostgreSQL` storage (requires the `postgres` feature).
    Postgres,
}

impl StoreBackend {
    /// Returns the configuration value naming this backend.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Postgres => "postgres",
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task store settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoreSettings {
    /// Selected storage backend.
    #[serde(default)]
    pub backend: StoreBackend,
    /// Database connection URL, required by the `PostgreSQL` backend.
    #[serde(default)]
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

const fn default_max_connections() -> u32 {
    DEFAULT_MAX_CONNECTIONS
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            database_url: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl StoreSettings {
    /// Checks that the settings describe a usable store.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::MissingDatabaseUrl`] when the `PostgreSQL`
    /// backend has no (or a blank) URL, and
    /// [`SettingsError::InvalidPoolSize`] when `max_connections` is zero.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.max_connections == 0 {
            return Err(SettingsError::InvalidPoolSize);
        }
        let has_url = self
            .database_url
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty());
        if self.backend == StoreBackend::Postgres && !has_url {
            return Err(SettingsError::MissingDatabaseUrl(self.backend));
        }
        Ok(())
    }
}

/// Top-level application settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Task store settings.
    #[serde(default)]
    pub store: StoreSettings,
}

impl Settings {
    /// Loads settings from defaults and the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Load`] when a value cannot be read or
    /// deserialized, or a validation error from [`StoreSettings::validate`].
    pub fn load() -> Result<Self, SettingsError> {
        let config = Config::builder()
            .set_default("store.backend", StoreBackend::Memory.as_str())?
            .set_default("store.max_connections", DEFAULT_MAX_CONNECTIONS)?
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        let settings: Self = config.try_deserialize()?;
        settings.store.validate()?;
        tracing::debug!(backend = %settings.store.backend, "loaded settings");
        Ok(settings)
    }
}

/// Errors raised while loading or applying settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A configuration source could not be read or deserialized.
    #[error("failed to load settings: {0}")]
    Load(#[from] ConfigError),

    /// The selected backend needs a database URL and none was given.
    #[error("store backend '{0}' requires a database URL")]
    MissingDatabaseUrl(StoreBackend),

    /// `max_connections` was zero.
    #[error("max_connections must be greater than zero")]
    InvalidPoolSize,

    /// The database connection pool could not be created.
    #[cfg(feature = "postgres")]
    #[error("failed to build connection pool: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
}
