//! In-memory integration tests for the maintenance task lifecycle.

use std::sync::Arc;

use rstest::rstest;
use servicebay::maintenance::{
    adapters::memory::InMemoryMaintenanceTaskRepository,
    domain::{TaskId, TaskStatus},
    ports::MaintenanceTaskRepository,
    schema::schema_version_of,
    services::{CreateTaskRequest, MaintenanceTaskService},
};

use super::helpers::{OTHER_VIN, TestService, VIN, repo, service};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn oil_change_runs_from_creation_to_completion(service: TestService) -> eyre::Result<()> {
    let id = service
        .create_task(CreateTaskRequest::new(VIN, "OIL_CHANGE").with_notes("routine"))
        .await?;
    eyre::ensure!(id == TaskId::FIRST, "first task should receive identifier 1");

    let created = service.get_task_by_id("1").await?;
    eyre::ensure!(
        created.status == TaskStatus::InProgress,
        "new tasks start in progress"
    );

    let completed = service
        .update_task_status("1", TaskStatus::Completed)
        .await?;
    eyre::ensure!(completed.status == TaskStatus::Completed, "status updated");
    eyre::ensure!(
        completed.notes.as_deref() == Some("routine"),
        "notes survive status updates"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stored_record_survives_a_fresh_service(
    repo: Arc<InMemoryMaintenanceTaskRepository>,
) -> eyre::Result<()> {
    let writer = MaintenanceTaskService::new(Arc::clone(&repo));
    let id = writer
        .create_task(
            CreateTaskRequest::new(VIN, "TIRE_SERVICE")
                .with_detail("tirePosition", "REAR_RIGHT")
                .with_detail("tireServiceType", "ALIGNMENT"),
        )
        .await?;

    let reader = MaintenanceTaskService::new(Arc::clone(&repo));
    let snapshot = reader.get_task_by_id(&id.to_string()).await?;
    let record = repo.find_record(id).await?;

    eyre::ensure!(snapshot.task_id == Some(id), "identifier preserved");
    eyre::ensure!(
        schema_version_of(&record.aggregate)? == 1,
        "record is tagged with the current schema version"
    );
    eyre::ensure!(
        record.aggregate.contains("\"tirePosition\":\"REAR_RIGHT\""),
        "details are stored in the envelope"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_without_filter_returns_every_vehicle(service: TestService) -> eyre::Result<()> {
    service
        .create_task(CreateTaskRequest::new(VIN, "OIL_CHANGE"))
        .await?;
    service
        .create_task(CreateTaskRequest::new(OTHER_VIN, "BRAKE_INSPECTION"))
        .await?;

    let all = service.list_tasks(None).await?;
    let blank = service.list_tasks(Some("  ")).await?;
    let other = service.list_tasks(Some(OTHER_VIN)).await?;

    eyre::ensure!(all.len() == 2, "expected two tasks, found {}", all.len());
    eyre::ensure!(blank == all, "blank filter lists everything");
    eyre::ensure!(
        other.len() == 1 && other.iter().all(|task| task.vin == OTHER_VIN),
        "filter restricts to one vehicle"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn notes_update_touches_only_the_target_task(service: TestService) -> eyre::Result<()> {
    let first = service
        .create_task(CreateTaskRequest::new(VIN, "OIL_CHANGE").with_notes("first"))
        .await?;
    let second = service
        .create_task(CreateTaskRequest::new(VIN, "OIL_CHANGE").with_notes("second"))
        .await?;

    service
        .add_or_update_notes(&first.to_string(), "replaced")
        .await?;
    let untouched = service.get_task_by_id(&second.to_string()).await?;

    eyre::ensure!(
        untouched.notes.as_deref() == Some("second"),
        "other tasks keep their notes"
    );
    Ok(())
}
