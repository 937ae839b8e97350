//! Implementations of the CLI commands

use std::io;

use tracing::info;

use crate::{
    artifacts::ArtifactStore, cli::DeployContractsArgs, deploy::rpc::RpcDeployer,
    errors::DeploymentError, runner::DeploymentRunner, tx::client::RpcProvider,
};

/// Deploy the staking and token contracts and print their addresses
pub async fn deploy_contracts(
    args: DeployContractsArgs,
    client: RpcProvider,
) -> Result<(), DeploymentError> {
    // Wire the live deployer over the artifact store
    let artifacts = ArtifactStore::new(args.artifacts);
    let deployer = RpcDeployer::new(client, artifacts);

    // Run the two deployments
    let runner = DeploymentRunner::new(deployer);
    runner.run(&mut io::stdout()).await?;
    info!("Deployed with success");

    Ok(())
}
