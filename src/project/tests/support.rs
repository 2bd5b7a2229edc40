//! Builders shared by the project unit tests.

use crate::directory::domain::ActorId;
use crate::project::domain::{ProjectLaunch, ProjectName};
use crate::template::domain::{StepDefinition, Template, TemplateName};
use crate::test_support::FixedClock;
use chrono::NaiveDate;

/// Two-step onboarding template: HR for two days, then Security for one.
pub(super) fn onboarding_template() -> eyre::Result<Template> {
    Ok(Template::new(
        TemplateName::new("Onboarding")?,
        vec![
            StepDefinition::new("Collect docs", "HR", "Email", 2)?,
            StepDefinition::new("Issue badge", "Security", "In person", 1)?,
        ],
        ActorId::new("alice")?,
        &FixedClock::new_year(),
    )?)
}

pub(super) fn new_year() -> eyre::Result<NaiveDate> {
    NaiveDate::from_ymd_opt(2024, 1, 1).ok_or_else(|| eyre::eyre!("invalid fixture date"))
}

pub(super) fn date(year: i32, month: u32, day: u32) -> eyre::Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| eyre::eyre!("invalid fixture date"))
}

/// Launch named `name` from a fresh [`onboarding_template`] on 2024-01-01.
pub(super) fn launch(name: &str) -> eyre::Result<ProjectLaunch> {
    launch_from(&onboarding_template()?, name)
}

/// Launch named `name` from `template` on 2024-01-01.
pub(super) fn launch_from(template: &Template, name: &str) -> eyre::Result<ProjectLaunch> {
    Ok(ProjectLaunch::from_template(
        template,
        ProjectName::new(name)?,
        new_year()?,
        ActorId::new("alice")?,
        &FixedClock::new_year(),
    )?)
}
