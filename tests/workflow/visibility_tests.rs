//! Personal task lists under the backlog and step-gated policies.

use super::helpers::{Engine, engine, task_at};
use fms::config::EngineConfig;
use fms::error::ErrorKind;
use fms::project::{
    domain::{TaskView, VisibilityPolicy},
    services::{TaskLifecycleError, UpdateTaskStatusRequest, WorkflowQueryError},
};
use rstest::rstest;

fn rows(views: &[TaskView]) -> Vec<(String, String, bool)> {
    views
        .iter()
        .map(|view| {
            (
                view.project_name.to_string(),
                view.task.description().to_owned(),
                view.locked,
            )
        })
        .collect()
}

fn row(project: &str, description: &str, locked: bool) -> (String, String, bool) {
    (project.to_owned(), description.to_owned(), locked)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn backlog_shows_every_task_of_the_department(
    engine: eyre::Result<Engine>,
) -> eyre::Result<()> {
    let env = engine?;
    let template = env.onboarding().await?;
    env.start(&template, "New Hire A").await?;

    let security = env.queries.list_tasks_for_department("Security").await?;

    eyre::ensure!(rows(&security) == vec![row("New Hire A", "Issue badge", true)]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn user_list_unions_their_departments(engine: eyre::Result<Engine>) -> eyre::Result<()> {
    let env = engine?;
    let template = env.onboarding().await?;
    env.start(&template, "New Hire A").await?;

    let dana = env.queries.list_tasks_for_user("dana").await?;
    let bob = env.queries.list_tasks_for_user("bob").await?;

    eyre::ensure!(
        rows(&dana)
            == vec![
                row("New Hire A", "Collect docs", false),
                row("New Hire A", "Issue badge", true),
            ]
    );
    eyre::ensure!(rows(&bob) == vec![row("New Hire A", "Collect docs", false)]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_user_is_not_found(engine: eyre::Result<Engine>) -> eyre::Result<()> {
    let env = engine?;

    let result = env.queries.list_tasks_for_user("mallory").await;

    let Err(err) = result else {
        eyre::bail!("unknown user resolved");
    };
    eyre::ensure!(matches!(err, WorkflowQueryError::Directory(_)));
    eyre::ensure!(err.kind() == ErrorKind::NotFound);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn step_gating_reveals_tasks_in_order() -> eyre::Result<()> {
    let config = EngineConfig::default().with_visibility(VisibilityPolicy::StepGated);
    let env = Engine::with_config(&config)?;
    let template = env.onboarding().await?;
    let launch = env.start(&template, "New Hire A").await?;
    let second = task_at(&launch, 1)?;

    eyre::ensure!(env.queries.list_tasks_for_user("carol").await?.is_empty());
    let refused = env
        .lifecycle
        .update_status(UpdateTaskStatusRequest::new(second.id(), "Done", "carol"))
        .await;
    eyre::ensure!(matches!(refused, Err(TaskLifecycleError::Domain(_))));
    eyre::ensure!(refused.is_err_and(|err| err.kind() == ErrorKind::IllegalTransition));

    let first = task_at(&launch, 0)?;
    env.lifecycle
        .update_status(UpdateTaskStatusRequest::new(first.id(), "Done", "bob"))
        .await?;

    let carol = env.queries.list_tasks_for_user("carol").await?;
    eyre::ensure!(rows(&carol) == vec![row("New Hire A", "Issue badge", false)]);
    env.lifecycle
        .update_status(UpdateTaskStatusRequest::new(second.id(), "Done", "carol"))
        .await?;
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn departments_come_from_the_directory(engine: eyre::Result<Engine>) -> eyre::Result<()> {
    let env = engine?;

    let departments: Vec<String> = env
        .queries
        .list_departments()
        .await?
        .iter()
        .map(ToString::to_string)
        .collect();

    eyre::ensure!(departments == vec!["HR", "Security"]);
    Ok(())
}
