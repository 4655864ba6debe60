//! `PostgreSQL` repository implementation for maintenance task storage.

use super::{
    models::{NewTaskRecordRow, NextIdRow, TaskRecordRow},
    schema::maintenance_tasks,
};
use crate::maintenance::{
    domain::{MaintenanceTask, TaskId, TaskStatus},
    ports::{MaintenanceTaskRepository, TaskRecord, TaskRepositoryError, TaskRepositoryResult},
    schema::{
        JsonSerializer, TaskEnvelope, VersionedSchemaSerDes, schema_version_of, to_aggregate,
        to_envelope,
    },
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::Error as DieselError;
use mockable::{Clock, DefaultClock};
use std::sync::Arc;

/// `PostgreSQL` connection pool type used by maintenance task adapters.
pub type MaintenancePgPool = Pool<ConnectionManager<PgConnection>>;

const NEXT_ID_QUERY: &str = "SELECT nextval('maintenance_tasks_id_seq') AS id";

/// `PostgreSQL`-backed maintenance task repository.
///
/// Identifiers come from a database sequence. The `schema_version` column
/// mirrors the tag of the stored document. Updates lock the target row
/// with `SELECT ... FOR UPDATE` inside a transaction, so concurrent writers
/// to one task are serialized by the database.
#[derive(Debug)]
pub struct PostgresMaintenanceTaskRepository<C = DefaultClock> {
    pool: MaintenancePgPool,
    clock: Arc<C>,
    serializer: JsonSerializer,
}

impl<C> Clone for PostgresMaintenanceTaskRepository<C> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            clock: Arc::clone(&self.clock),
            serializer: self.serializer,
        }
    }
}

impl From<DieselError> for TaskRepositoryError {
    fn from(err: DieselError) -> Self {
        Self::persistence(err)
    }
}

impl<C> PostgresMaintenanceTaskRepository<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub fn new(pool: MaintenancePgPool, clock: C) -> Self {
        Self {
            pool,
            clock: Arc::new(clock),
            serializer: JsonSerializer::new(),
        }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }

    async fn modify<F>(&self, id: TaskId, mutate: F) -> TaskRepositoryResult<MaintenanceTask>
    where
        F: FnOnce(&mut TaskEnvelope) + Send + 'static,
    {
        let serializer = self.serializer;
        let now = self.clock.utc();
        self.run_blocking(move |connection| {
            connection.transaction(|tx| {
                let row = maintenance_tasks::table
                    .find(raw_id(id)?)
                    .select(TaskRecordRow::as_select())
                    .for_update()
                    .first::<TaskRecordRow>(tx)
                    .optional()?
                    .ok_or(TaskRepositoryError::NotFound(id))?;

                let mut envelope: TaskEnvelope = serializer.deserialize(&row.aggregate)?;
                mutate(&mut envelope);
                let aggregate = serializer.serialize(&envelope)?;
                let schema_version = stored_version(&aggregate)?;

                diesel::update(maintenance_tasks::table.find(row.id))
                    .set((
                        maintenance_tasks::aggregate.eq(aggregate),
                        maintenance_tasks::schema_version.eq(schema_version),
                        maintenance_tasks::updated_at.eq(now),
                    ))
                    .execute(tx)?;
                Ok(to_aggregate(envelope))
            })
        })
        .await
    }

    async fn load_all(&self) -> TaskRepositoryResult<Vec<MaintenanceTask>> {
        let serializer = self.serializer;
        self.run_blocking(move |connection| {
            let rows = maintenance_tasks::table
                .order(maintenance_tasks::id.asc())
                .select(TaskRecordRow::as_select())
                .load::<TaskRecordRow>(connection)?;
            rows.iter()
                .map(|row| -> TaskRepositoryResult<MaintenanceTask> {
                    let envelope: TaskEnvelope = serializer.deserialize(&row.aggregate)?;
                    Ok(to_aggregate(envelope))
                })
                .collect()
        })
        .await
    }
}

#[async_trait]
impl<C> MaintenanceTaskRepository for PostgresMaintenanceTaskRepository<C>
where
    C: Clock + Send + Sync,
{
    async fn create(&self, task: &MaintenanceTask) -> TaskRepositoryResult<MaintenanceTask> {
        let mut envelope = to_envelope(task);
        let serializer = self.serializer;
        let now = self.clock.utc();

        let created = self
            .run_blocking(move |connection| {
                connection.transaction(|tx| {
                    let NextIdRow { id: next_id } =
                        diesel::sql_query(NEXT_ID_QUERY).get_result::<NextIdRow>(tx)?;
                    let id = task_id_from_row(next_id)?;

                    envelope.task_id = Some(id);
                    let aggregate = serializer.serialize(&envelope)?;
                    let schema_version = stored_version(&aggregate)?;
                    diesel::insert_into(maintenance_tasks::table)
                        .values(&NewTaskRecordRow {
                            id: next_id,
                            aggregate,
                            schema_version,
                            created_at: now,
                            updated_at: now,
                        })
                        .execute(tx)?;
                    Ok(to_aggregate(envelope))
                })
            })
            .await?;

        tracing::debug!(
            task_id = ?created.id(),
            task_type = %created.task_type(),
            "stored maintenance task row"
        );
        Ok(created)
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<MaintenanceTask> {
        let record = self.find_record(id).await?;
        let envelope: TaskEnvelope = self.serializer.deserialize(&record.aggregate)?;
        Ok(to_aggregate(envelope))
    }

    async fn find_record(&self, id: TaskId) -> TaskRepositoryResult<TaskRecord> {
        self.run_blocking(move |connection| {
            let row = maintenance_tasks::table
                .find(raw_id(id)?)
                .select(TaskRecordRow::as_select())
                .first::<TaskRecordRow>(connection)
                .optional()?
                .ok_or(TaskRepositoryError::NotFound(id))?;
            row_to_record(row)
        })
        .await
    }

    async fn update_status(
        &self,
        id: TaskId,
        status: TaskStatus,
    ) -> TaskRepositoryResult<MaintenanceTask> {
        self.modify(id, move |envelope| envelope.status = status).await
    }

    async fn upsert_notes(
        &self,
        id: TaskId,
        notes: Option<String>,
    ) -> TaskRepositoryResult<MaintenanceTask> {
        self.modify(id, move |envelope| envelope.notes = notes).await
    }

    async fn find_all(&self) -> TaskRepositoryResult<Vec<MaintenanceTask>> {
        self.load_all().await
    }

    async fn find_by_vin(&self, vin: &str) -> TaskRepositoryResult<Vec<MaintenanceTask>> {
        let mut tasks = self.load_all().await?;
        tasks.retain(|task| task.vin() == vin);
        Ok(tasks)
    }
}

fn raw_id(id: TaskId) -> TaskRepositoryResult<i64> {
    i64::try_from(id.value()).map_err(TaskRepositoryError::persistence)
}

fn stored_version(aggregate: &str) -> TaskRepositoryResult<i32> {
    i32::try_from(schema_version_of(aggregate)?).map_err(TaskRepositoryError::persistence)
}

fn task_id_from_row(value: i64) -> TaskRepositoryResult<TaskId> {
    u64::try_from(value)
        .ok()
        .and_then(TaskId::new)
        .ok_or_else(|| {
            TaskRepositoryError::persistence(std::io::Error::other(format!(
                "sequence produced invalid task identifier {value}"
            )))
        })
}

fn row_to_record(row: TaskRecordRow) -> TaskRepositoryResult<TaskRecord> {
    let TaskRecordRow {
        id,
        aggregate,
        created_at,
        updated_at,
    } = row;

    Ok(TaskRecord {
        id: task_id_from_row(id)?,
        aggregate,
        created_at,
        updated_at,
    })
}
