//! End-to-end flows across template, project, and task services.

use super::helpers::{Engine, engine, task_at};
use chrono::NaiveDate;
use fms::activity::{domain::ActivityKind, ports::ActivityLog};
use fms::error::ErrorKind;
use fms::project::{
    domain::TaskStatus,
    ports::ProjectRepository,
    services::{
        InstantiationError, StartProjectRequest, TaskLifecycleError, UpdateTaskStatusRequest,
    },
};
use fms::template::domain::TemplateId;
use rstest::rstest;

fn date(year: i32, month: u32, day: u32) -> eyre::Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| eyre::eyre!("invalid date"))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn onboarding_project_gets_cumulative_due_dates(
    engine: eyre::Result<Engine>,
) -> eyre::Result<()> {
    let env = engine?;
    let template = env.onboarding().await?;

    let launch = env.start(&template, "New Hire A").await?;

    let overview = env.queries.get_project(launch.project().id()).await?;
    let due: Vec<NaiveDate> = overview.tasks.iter().map(|task| task.due_date()).collect();
    eyre::ensure!(due == vec![date(2024, 1, 3)?, date(2024, 1, 4)?]);
    eyre::ensure!(
        overview
            .tasks
            .iter()
            .all(|task| task.status() == TaskStatus::Pending && task.completed_at().is_none())
    );

    let kinds: Vec<ActivityKind> = env
        .activity
        .list_recent(10)
        .await?
        .iter()
        .map(|entry| entry.kind())
        .collect();
    eyre::ensure!(kinds == vec![ActivityKind::ProjectCreated, ActivityKind::TemplateCreated]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completed_task_cannot_reopen(engine: eyre::Result<Engine>) -> eyre::Result<()> {
    let env = engine?;
    let template = env.onboarding().await?;
    let launch = env.start(&template, "New Hire A").await?;
    let first = task_at(&launch, 0)?;

    let done = env
        .lifecycle
        .update_status(UpdateTaskStatusRequest::new(first.id(), "Done", "bob"))
        .await?;
    eyre::ensure!(done.status() == TaskStatus::Done);
    let Some(completed_at) = done.completed_at() else {
        eyre::bail!("completion time was not stamped");
    };

    let result = env
        .lifecycle
        .update_status(UpdateTaskStatusRequest::new(first.id(), "In Progress", "bob"))
        .await;
    let Err(err) = result else {
        eyre::bail!("completed task was reopened");
    };
    eyre::ensure!(matches!(err, TaskLifecycleError::Domain(_)));
    eyre::ensure!(err.kind() == ErrorKind::IllegalTransition);

    let stored = env.projects.find_task(first.id()).await?;
    eyre::ensure!(stored.is_some_and(|task| {
        task.status() == TaskStatus::Done && task.completed_at() == Some(completed_at)
    }));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_template_leaves_no_trace(engine: eyre::Result<Engine>) -> eyre::Result<()> {
    let env = engine?;
    env.onboarding().await?;
    let before = env.activity.list_recent(10).await?.len();

    let request =
        StartProjectRequest::parse(TemplateId::new(), "New Hire A", "2024-01-01", "alice")?;
    let result = env.instantiation.start_project(request).await;

    let Err(err) = result else {
        eyre::bail!("project started from an unknown template");
    };
    eyre::ensure!(matches!(err, InstantiationError::TemplateNotFound(_)));
    eyre::ensure!(err.kind() == ErrorKind::NotFound);
    eyre::ensure!(env.queries.list_projects().await?.is_empty());
    eyre::ensure!(env.activity.list_recent(10).await?.len() == before);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_lifecycle_completes_the_project(engine: eyre::Result<Engine>) -> eyre::Result<()> {
    let env = engine?;
    let template = env.onboarding().await?;
    let launch = env.start(&template, "New Hire A").await?;

    for (index, actor) in [(0, "bob"), (1, "carol")] {
        let task = task_at(&launch, index)?;
        env.lifecycle
            .update_status(UpdateTaskStatusRequest::new(task.id(), "In Progress", actor))
            .await?;
        env.lifecycle
            .update_status(UpdateTaskStatusRequest::new(task.id(), "Done", actor))
            .await?;
    }

    let overview = env.queries.get_project(launch.project().id()).await?;
    eyre::ensure!(overview.is_complete());
    eyre::ensure!(overview.completed_count() == 2);
    let updates = env
        .activity
        .list_recent(10)
        .await?
        .iter()
        .filter(|entry| entry.kind() == ActivityKind::TaskUpdated)
        .count();
    eyre::ensure!(updates == 4);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn templates_and_projects_list_newest_first(
    engine: eyre::Result<Engine>,
) -> eyre::Result<()> {
    let env = engine?;
    let template = env.onboarding().await?;
    env.start(&template, "New Hire A").await?;
    env.start(&template, "New Hire B").await?;

    let names: Vec<String> = env
        .queries
        .list_projects()
        .await?
        .iter()
        .map(|overview| overview.project.name().to_string())
        .collect();
    eyre::ensure!(names == vec!["New Hire B", "New Hire A"]);

    let summaries = env.catalogue.list_templates().await?;
    eyre::ensure!(summaries.len() == 1);
    eyre::ensure!(summaries.iter().all(|summary| summary.step_count == 2));
    Ok(())
}
