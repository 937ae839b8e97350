//! Definitions of CLI arguments and commands for the deploy scripts

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::{
    commands::deploy_contracts, constants::DEFAULT_ARTIFACTS_DIR, errors::DeploymentError,
    tx::client::RpcProvider,
};

/// Scripts for deploying the staking and token contracts
#[derive(Parser)]
pub struct Cli {
    /// Network RPC URL, overriding the `RPC_URL` environment variable
    #[arg(short, long)]
    pub rpc_url: Option<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

/// The possible CLI commands
#[derive(Subcommand)]
pub enum Command {
    /// Deploy the staking and token contracts
    DeployContracts(DeployContractsArgs),
}

impl Command {
    /// Run the command
    pub async fn run(self, client: RpcProvider) -> Result<(), DeploymentError> {
        match self {
            Command::DeployContracts(args) => {
                info!("Deploying contracts...");
                deploy_contracts(args, client).await?;

                Ok(())
            }
        }
    }
}

/// Deploy contracts
#[derive(Args)]
pub struct DeployContractsArgs {
    /// Directory holding the compiled contract artifacts
    #[arg(short, long, default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts: PathBuf,
}
