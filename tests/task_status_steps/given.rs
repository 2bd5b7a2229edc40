//! Given steps for task status BDD scenarios.

use super::world::{TaskStatusWorld, run_async};
use eyre::WrapErr;
use fms::project::services::{StartProjectRequest, UpdateTaskStatusRequest};
use fms::template::services::{CreateTemplateRequest, StepInput};
use rstest_bdd_macros::given;

#[given("the onboarding template")]
fn onboarding_template(world: &mut TaskStatusWorld) -> Result<(), eyre::Report> {
    let request = CreateTemplateRequest::new("Onboarding", "alice")
        .with_step(StepInput::new("Collect docs", "HR", "Email", 2))
        .with_step(StepInput::new("Issue badge", "Security", "In person", 1));
    let template = run_async(world.catalogue.create_template(request))
        .wrap_err("create onboarding template")?;
    world.template = Some(template);
    Ok(())
}

#[given(r#"a project "{name}" started on "{start_date}""#)]
fn project_started(
    world: &mut TaskStatusWorld,
    name: String,
    start_date: String,
) -> Result<(), eyre::Report> {
    let template_id = world
        .template
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing template in scenario world"))?
        .id();
    let request = StartProjectRequest::parse(template_id, name, &start_date, "alice")?;
    let launch = run_async(world.instantiation.start_project(request))
        .wrap_err("start project for scenario")?;
    world.launch = Some(launch);
    Ok(())
}

#[given(r#""{actor}" has set step {position:u32} to "{status}""#)]
fn step_already_set(
    world: &mut TaskStatusWorld,
    actor: String,
    position: u32,
    status: String,
) -> Result<(), eyre::Report> {
    let task_id = world.task_at_step(position)?.id();
    run_async(
        world
            .lifecycle
            .update_status(UpdateTaskStatusRequest::new(task_id, status, actor)),
    )
    .wrap_err("update task status in scenario setup")?;
    Ok(())
}
