//! Diesel row models for maintenance task persistence.

use super::schema::maintenance_tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = maintenance_tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRecordRow {
    /// Task identifier.
    pub id: i64,
    /// Serialized envelope.
    pub aggregate: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = maintenance_tasks)]
pub struct NewTaskRecordRow {
    /// Task identifier.
    pub id: i64,
    /// Serialized envelope.
    pub aggregate: String,
    /// Version tag read from the serialized envelope.
    pub schema_version: i32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Result of drawing the next value from the identifier sequence.
#[derive(Debug, QueryableByName)]
pub struct NextIdRow {
    /// Next identifier.
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    pub id: i64,
}
