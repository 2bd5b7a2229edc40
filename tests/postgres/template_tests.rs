//! Template storage against `PostgreSQL`.

use super::helpers::{TestDatabase, onboarding_template, test_runtime};
use fms::error::ErrorKind;
use fms::template::{
    adapters::postgres::PostgresTemplateRepository,
    domain::TemplateId,
    ports::{TemplateRepository, TemplateRepositoryError},
};
use pg_embedded_setup_unpriv::TestCluster;
use pg_embedded_setup_unpriv::test_support::shared_test_cluster;
use rstest::rstest;

#[rstest]
fn stored_template_is_rebuilt_with_ordered_steps(
    shared_test_cluster: &'static TestCluster,
) -> eyre::Result<()> {
    let database = TestDatabase::create(shared_test_cluster, "template_round_trip")?;
    let repository = PostgresTemplateRepository::new(database.pool()?);
    let template = onboarding_template()?;
    let rt = test_runtime()?;

    rt.block_on(repository.store(&template))?;
    let found = rt.block_on(repository.find_by_id(template.id()))?;
    let listed = rt.block_on(repository.list())?;

    eyre::ensure!(found.as_ref() == Some(&template));
    eyre::ensure!(listed == vec![template]);
    eyre::ensure!(rt.block_on(repository.find_by_id(TemplateId::new()))?.is_none());
    Ok(())
}

#[rstest]
fn storing_a_template_twice_is_a_duplicate(
    shared_test_cluster: &'static TestCluster,
) -> eyre::Result<()> {
    let database = TestDatabase::create(shared_test_cluster, "template_duplicate")?;
    let repository = PostgresTemplateRepository::new(database.pool()?);
    let template = onboarding_template()?;
    let rt = test_runtime()?;
    rt.block_on(repository.store(&template))?;

    let result = rt.block_on(repository.store(&template));

    let Err(err) = result else {
        eyre::bail!("second store of the same template succeeded");
    };
    eyre::ensure!(matches!(
        err,
        TemplateRepositoryError::DuplicateTemplate(id) if id == template.id()
    ));
    eyre::ensure!(err.kind() == ErrorKind::Persistence);
    eyre::ensure!(rt.block_on(repository.list())?.len() == 1);
    Ok(())
}
