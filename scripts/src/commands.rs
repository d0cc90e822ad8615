//! Implementations of the deploy scripts

use std::{io, time::Duration};

use tracing::info;

use crate::{
    artifacts::ArtifactStore, cli::DeployArgs, errors::ScriptError, plan::DeploymentPlan,
    runner::DeploymentRunner, utils::setup_client,
};

/// Deploy the DAO contracts in order, printing each deployed address
pub async fn deploy_dao(args: DeployArgs, rpc_url: &str) -> Result<(), ScriptError> {
    let deployer = setup_client(
        rpc_url,
        args.priv_key.as_deref(),
        args.confirmations,
        args.receipt_timeout_secs.map(Duration::from_secs),
    )
    .await?;

    let runner = DeploymentRunner::new(deployer, ArtifactStore::new(args.artifacts))
        .with_router(args.router)
        .with_deployments_path(&args.deployments_path);

    let deployed = runner.run(&DeploymentPlan::dao(), &mut io::stdout()).await?;
    info!(
        "Deployed {} contracts, addresses recorded in {}",
        deployed.len(),
        args.deployments_path.display()
    );

    Ok(())
}

/// Print the DAO deployment plan
pub fn print_plan() -> Result<(), ScriptError> {
    for line in DeploymentPlan::dao().describe() {
        println!("{}", line);
    }

    Ok(())
}
