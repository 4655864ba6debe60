//! Thread-safe in-memory maintenance task repository.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::maintenance::{
    domain::{MaintenanceTask, TaskId, TaskStatus},
    ports::{MaintenanceTaskRepository, TaskRecord, TaskRepositoryError, TaskRepositoryResult},
    schema::{JsonSerializer, TaskEnvelope, VersionedSchemaSerDes, to_aggregate, to_envelope},
};

/// In-memory repository storing serialized task envelopes.
///
/// A single lock guards the record map and the identifier counter. Writers
/// hold the write lock for the whole read-modify-write, so identifier
/// assignment is race-free and concurrent updates to one record never act
/// on a stale read. Readers share the read lock and only ever see complete
/// records.
#[derive(Debug)]
pub struct InMemoryMaintenanceTaskRepository<C = DefaultClock> {
    state: Arc<RwLock<InMemoryTaskState>>,
    clock: Arc<C>,
    serializer: JsonSerializer,
}

#[derive(Debug)]
struct InMemoryTaskState {
    records: BTreeMap<TaskId, TaskRecord>,
    next_id: Option<TaskId>,
}

impl Default for InMemoryTaskState {
    fn default() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: Some(TaskId::FIRST),
        }
    }
}

impl<C> Clone for InMemoryMaintenanceTaskRepository<C> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            clock: Arc::clone(&self.clock),
            serializer: self.serializer,
        }
    }
}

impl Default for InMemoryMaintenanceTaskRepository<DefaultClock> {
    fn default() -> Self {
        Self::new(DefaultClock)
    }
}

impl<C> InMemoryMaintenanceTaskRepository<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty repository stamping records with `clock`.
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryTaskState::default())),
            clock: Arc::new(clock),
            serializer: JsonSerializer::new(),
        }
    }

    fn read_state(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write_state(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn decode(&self, record: &TaskRecord) -> TaskRepositoryResult<TaskEnvelope> {
        Ok(self.serializer.deserialize(&record.aggregate)?)
    }

    fn insert(&self, task: &MaintenanceTask) -> TaskRepositoryResult<MaintenanceTask> {
        let mut state = self.write_state()?;
        let id = state
            .next_id
            .ok_or(TaskRepositoryError::IdentifiersExhausted)?;

        let mut envelope = to_envelope(task);
        envelope.task_id = Some(id);
        let aggregate = self.serializer.serialize(&envelope)?;
        let now = self.clock.utc();

        state.records.insert(
            id,
            TaskRecord {
                id,
                aggregate,
                created_at: now,
                updated_at: now,
            },
        );
        state.next_id = id.next();
        Ok(to_aggregate(envelope))
    }

    /// Applies `mutate` to the stored envelope of `id` under the write lock.
    ///
    /// The record is only overwritten once the new envelope has encoded
    /// successfully.
    fn modify(
        &self,
        id: TaskId,
        mutate: impl FnOnce(&mut TaskEnvelope),
    ) -> TaskRepositoryResult<MaintenanceTask> {
        let mut state = self.write_state()?;
        let record = state
            .records
            .get_mut(&id)
            .ok_or(TaskRepositoryError::NotFound(id))?;

        let mut envelope = self.decode(record)?;
        mutate(&mut envelope);
        record.aggregate = self.serializer.serialize(&envelope)?;
        record.updated_at = self.clock.utc();
        Ok(to_aggregate(envelope))
    }

    fn get_record(&self, id: TaskId) -> TaskRepositoryResult<TaskRecord> {
        let state = self.read_state()?;
        state
            .records
            .get(&id)
            .cloned()
            .ok_or(TaskRepositoryError::NotFound(id))
    }

    fn collect_matching(
        &self,
        predicate: impl Fn(&MaintenanceTask) -> bool,
    ) -> TaskRepositoryResult<Vec<MaintenanceTask>> {
        let state = self.read_state()?;
        let mut tasks = Vec::with_capacity(state.records.len());
        for record in state.records.values() {
            let task = to_aggregate(self.decode(record)?);
            if predicate(&task) {
                tasks.push(task);
            }
        }
        Ok(tasks)
    }
}

#[async_trait]
impl<C> MaintenanceTaskRepository for InMemoryMaintenanceTaskRepository<C>
where
    C: Clock + Send + Sync,
{
    async fn create(&self, task: &MaintenanceTask) -> TaskRepositoryResult<MaintenanceTask> {
        let created = self.insert(task)?;
        tracing::debug!(
            task_id = ?created.id(),
            task_type = %created.task_type(),
            "stored maintenance task record"
        );
        Ok(created)
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<MaintenanceTask> {
        let record = self.get_record(id)?;
        Ok(to_aggregate(self.decode(&record)?))
    }

    async fn find_record(&self, id: TaskId) -> TaskRepositoryResult<TaskRecord> {
        self.get_record(id)
    }

    async fn update_status(
        &self,
        id: TaskId,
        status: TaskStatus,
    ) -> TaskRepositoryResult<MaintenanceTask> {
        self.modify(id, |envelope| envelope.status = status)
    }

    async fn upsert_notes(
        &self,
        id: TaskId,
        notes: Option<String>,
    ) -> TaskRepositoryResult<MaintenanceTask> {
        self.modify(id, |envelope| envelope.notes = notes)
    }

    async fn find_all(&self) -> TaskRepositoryResult<Vec<MaintenanceTask>> {
        self.collect_matching(|_| true)
    }

    async fn find_by_vin(&self, vin: &str) -> TaskRepositoryResult<Vec<MaintenanceTask>> {
        self.collect_matching(|task| task.vin() == vin)
    }
}
