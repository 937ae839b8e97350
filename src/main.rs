use clap::Parser;
use dotenv::dotenv;
use staking_scripts::{cli::Cli, errors::DeploymentError, tx::client::create_rpc_provider};

#[tokio::main]
async fn main() -> Result<(), DeploymentError> {
    // Load .env file
    dotenv().ok();

    let Cli { rpc_url, command } = Cli::parse();

    // Logs go to stderr, the deployed addresses are the only stdout output
    tracing_subscriber::fmt()
        .pretty()
        .with_writer(std::io::stderr)
        .init();

    // Build our RPC client with signer
    let client = create_rpc_provider(rpc_url.as_deref()).await?;

    command.run(client).await
}
