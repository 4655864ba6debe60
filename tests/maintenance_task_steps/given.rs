//! Given steps for maintenance task BDD scenarios.

use super::world::{MaintenanceWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use servicebay::maintenance::services::CreateTaskRequest;

#[given(r#"an "{task_type}" task exists for VIN "{vin}""#)]
fn an_existing_task(
    world: &mut MaintenanceWorld,
    task_type: String,
    vin: String,
) -> Result<(), eyre::Report> {
    seed_task(world, &task_type, &vin)
}

#[given(r#"a "{task_type}" task exists for VIN "{vin}""#)]
fn a_existing_task(
    world: &mut MaintenanceWorld,
    task_type: String,
    vin: String,
) -> Result<(), eyre::Report> {
    seed_task(world, &task_type, &vin)
}

fn seed_task(world: &MaintenanceWorld, task_type: &str, vin: &str) -> Result<(), eyre::Report> {
    run_async(
        world
            .service
            .create_task(CreateTaskRequest::new(vin, task_type)),
    )
    .wrap_err("seed maintenance task for scenario")?;
    Ok(())
}
