//! Racing writers against shared in-memory storage.

use std::sync::Arc;

use super::helpers::{Engine, engine, task_at};
use fms::activity::{domain::ActivityKind, ports::ActivityLog};
use fms::error::ErrorKind;
use fms::project::{
    domain::TaskStatus, ports::ProjectRepository, services::UpdateTaskStatusRequest,
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn simultaneous_done_requests_complete_exactly_once(
    engine: eyre::Result<Engine>,
) -> eyre::Result<()> {
    let env = engine?;
    let template = env.onboarding().await?;
    let launch = env.start(&template, "New Hire A").await?;
    let task_id = task_at(&launch, 0)?.id();

    let handles: Vec<_> = (0..8)
        .map(|attempt| {
            let lifecycle = Arc::clone(&env.lifecycle);
            tokio::spawn(async move {
                let actor = format!("clerk-{attempt}");
                lifecycle
                    .update_status(UpdateTaskStatusRequest::new(task_id, "Done", actor))
                    .await
            })
        })
        .collect();
    let mut outcomes = Vec::with_capacity(handles.len());
    for handle in handles {
        outcomes.push(handle.await?);
    }

    let winners = outcomes.iter().filter(|outcome| outcome.is_ok()).count();
    eyre::ensure!(winners == 1, "expected one winner, got {winners}");
    eyre::ensure!(outcomes.iter().all(|outcome| match outcome {
        Ok(_) => true,
        Err(err) => err.kind() == ErrorKind::IllegalTransition,
    }));

    let stored = env
        .projects
        .find_task(task_id)
        .await?
        .ok_or_else(|| eyre::eyre!("task vanished"))?;
    eyre::ensure!(stored.status() == TaskStatus::Done);
    eyre::ensure!(stored.completed_at().is_some());

    let completions = env
        .activity
        .list_recent(50)
        .await?
        .iter()
        .filter(|entry| entry.kind() == ActivityKind::TaskUpdated)
        .count();
    eyre::ensure!(completions == 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn parallel_launches_each_get_a_full_task_set(
    engine: eyre::Result<Engine>,
) -> eyre::Result<()> {
    let env = Arc::new(engine?);
    let template = Arc::new(env.onboarding().await?);

    let handles: Vec<_> = (0..6)
        .map(|index| {
            let shared = Arc::clone(&env);
            let source = Arc::clone(&template);
            tokio::spawn(async move {
                shared
                    .start(&source, &format!("New Hire {index}"))
                    .await
                    .map(|launch| launch.project().id())
            })
        })
        .collect();
    for handle in handles {
        handle.await??;
    }

    let overviews = env.queries.list_projects().await?;
    eyre::ensure!(overviews.len() == 6);
    eyre::ensure!(overviews.iter().all(|overview| overview.tasks.len() == 2));
    Ok(())
}
