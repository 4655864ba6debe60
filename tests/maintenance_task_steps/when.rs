//! When steps for maintenance task BDD scenarios.

use super::world::{MaintenanceWorld, run_async};
use rstest_bdd_macros::when;
use servicebay::maintenance::{
    domain::TaskStatus,
    services::{CreateTaskRequest, MaintenanceTaskResult, TaskSnapshot},
};
use serde_json::Value;

fn create_and_fetch(
    world: &MaintenanceWorld,
    request: CreateTaskRequest,
) -> MaintenanceTaskResult<TaskSnapshot> {
    run_async(async {
        let id = world.service.create_task(request).await?;
        world.service.get_task_by_id(&id.to_string()).await
    })
}

#[when(r#"an "{task_type}" task is created for VIN "{vin}" with notes "{notes}""#)]
fn create_task_with_notes(world: &mut MaintenanceWorld, task_type: String, vin: String, notes: String) {
    let result = create_and_fetch(world, CreateTaskRequest::new(vin, task_type).with_notes(notes));
    world.record(result);
}

#[when(r#"a tire service is created for VIN "{vin}" at "{position}" as "{service_type}""#)]
fn create_tire_service(
    world: &mut MaintenanceWorld,
    vin: String,
    position: String,
    service_type: String,
) {
    let request = CreateTaskRequest::new(vin, "TIRE_SERVICE")
        .with_detail("tirePosition", position)
        .with_detail("tireServiceType", service_type);
    let result = create_and_fetch(world, request);
    world.record(result);
}

#[when(r#"a tire service is created for VIN "{vin}" with only service type "{service_type}""#)]
fn create_tire_service_without_position(
    world: &mut MaintenanceWorld,
    vin: String,
    service_type: String,
) {
    let request =
        CreateTaskRequest::new(vin, "TIRE_SERVICE").with_detail("tireServiceType", service_type);
    let result = create_and_fetch(world, request);
    world.record(result);
}

#[when(r#"a diagnostic scan is created for VIN "{vin}" with codes "{codes}" using "{scanner}""#)]
fn create_diagnostic_scan(world: &mut MaintenanceWorld, vin: String, codes: String, scanner: String) {
    let error_codes: Vec<Value> = codes
        .split(',')
        .map(|code| Value::String(code.trim().to_owned()))
        .collect();
    let request = CreateTaskRequest::new(vin, "DIAGNOSTIC_SCAN")
        .with_detail("errorCodes", error_codes)
        .with_detail("scannerType", scanner);
    let result = create_and_fetch(world, request);
    world.record(result);
}

#[when(r#"the task is marked "{status}""#)]
fn mark_task(world: &mut MaintenanceWorld, status: String) -> Result<(), eyre::Report> {
    let target = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let task_id = world
        .current_task()?
        .task_id
        .ok_or_else(|| eyre::eyre!("current task has no identifier"))?
        .to_string();

    let result = run_async(world.service.update_task_status(&task_id, target));
    world.record(result);
    Ok(())
}

#[when(r#"task "{task_id}" is looked up"#)]
fn look_up_task(world: &mut MaintenanceWorld, task_id: String) {
    let result = run_async(world.service.get_task_by_id(&task_id));
    world.record(result);
}

#[when(r#"tasks are listed for VIN "{vin}""#)]
fn list_tasks_for_vin(world: &mut MaintenanceWorld, vin: String) -> Result<(), eyre::Report> {
    world.listed = run_async(world.service.list_tasks(Some(&vin)))?;
    Ok(())
}
