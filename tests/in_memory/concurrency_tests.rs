//! Concurrency tests for the in-memory maintenance task repository.

use std::collections::BTreeSet;
use std::sync::Arc;

use rstest::rstest;
use servicebay::maintenance::{
    adapters::memory::InMemoryMaintenanceTaskRepository,
    domain::{TaskId, TaskStatus},
    ports::MaintenanceTaskRepository,
    services::{CreateTaskRequest, MaintenanceTaskService},
};

use super::helpers::{VIN, repo};

const WRITERS: u64 = 32;

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_receive_unique_identifiers(
    repo: Arc<InMemoryMaintenanceTaskRepository>,
) -> eyre::Result<()> {
    let service = MaintenanceTaskService::new(repo);
    let mut handles = Vec::new();
    for _ in 0..WRITERS {
        let worker = service.clone();
        handles.push(tokio::spawn(async move {
            worker
                .create_task(CreateTaskRequest::new(VIN, "BRAKE_INSPECTION"))
                .await
        }));
    }

    let mut ids = BTreeSet::new();
    for handle in handles {
        ids.insert(handle.await??.value());
    }

    let expected: BTreeSet<u64> = (1..=WRITERS).collect();
    eyre::ensure!(ids == expected, "identifiers must be 1..={WRITERS} without gaps");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_updates_to_one_task_lose_no_fields(
    repo: Arc<InMemoryMaintenanceTaskRepository>,
) -> eyre::Result<()> {
    let service = MaintenanceTaskService::new(Arc::clone(&repo));
    let id = service
        .create_task(CreateTaskRequest::new(VIN, "OIL_CHANGE"))
        .await?
        .to_string();

    let status_writer = {
        let worker = service.clone();
        let task_id = id.clone();
        tokio::spawn(async move {
            worker
                .update_task_status(&task_id, TaskStatus::Completed)
                .await
        })
    };
    let notes_writer = {
        let worker = service.clone();
        let task_id = id.clone();
        tokio::spawn(async move { worker.add_or_update_notes(&task_id, "filter swapped").await })
    };
    status_writer.await??;
    notes_writer.await??;

    let task = repo
        .find_by_id(TaskId::FIRST)
        .await?;
    eyre::ensure!(task.status() == TaskStatus::Completed, "status write kept");
    eyre::ensure!(task.notes() == Some("filter swapped"), "notes write kept");
    Ok(())
}
