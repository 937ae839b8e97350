//! Construction of the signing RPC client used for every deployment

use std::env;

use alloy::{
    hex,
    network::{Ethereum, EthereumWallet},
    primitives::B256,
    providers::{
        fillers::{ChainIdFiller, FillProvider, GasFiller, JoinFill, NonceFiller, WalletFiller},
        Identity, Provider, ProviderBuilder, ReqwestProvider,
    },
    signers::local::PrivateKeySigner,
};
use reqwest::{Client, Url};
use tracing::info;

use crate::{constants::DEFAULT_RPC, errors::DeploymentError};

/// Re-export from alloy recommend filler
type RecommendFiller =
    JoinFill<JoinFill<JoinFill<Identity, GasFiller>, NonceFiller>, ChainIdFiller>;

/// An alloy provider that uses a local wallet to generate signatures
/// & interfaces with the RPC endpoint over HTTP
pub type RpcProvider = FillProvider<
    JoinFill<RecommendFiller, WalletFiller<EthereumWallet>>,
    ReqwestProvider,
    alloy::transports::http::Http<Client>,
    Ethereum,
>;

/// Sets up the client with which the contracts are deployed, reading the
/// deployer private key from the environment. The RPC url is taken from the
/// CLI override when given, then the `RPC_URL` environment variable, then the
/// built-in default endpoint.
pub async fn create_rpc_provider(rpc_url: Option<&str>) -> Result<RpcProvider, DeploymentError> {
    // Find our private key and map it to a B256
    let raw_key = hex::decode(
        env::var("PRIVATE_KEY").map_err(|e| DeploymentError::ClientInitialization(e.to_string()))?,
    )
    .map_err(|e| DeploymentError::ClientInitialization(e.to_string()))?;
    if raw_key.len() != 32 {
        return Err(DeploymentError::ClientInitialization(String::from(
            "private key must be 32 bytes",
        )));
    }
    let private_key = B256::from_slice(&raw_key);

    // Create our signer
    let signer = PrivateKeySigner::from_bytes(&private_key)
        .map_err(|e| DeploymentError::ClientInitialization(e.to_string()))?;

    let wallet = EthereumWallet::from(signer);

    // Resolve the endpoint to hit
    let rpc_url = match rpc_url {
        Some(url) => url.to_string(),
        None => env::var("RPC_URL").unwrap_or_else(|_| DEFAULT_RPC.to_string()),
    };
    let rpc_url = rpc_url
        .parse::<Url>()
        .map_err(|e| DeploymentError::ClientInitialization(e.to_string()))?;

    // Create our provider with the rpc client + signer
    let provider = ProviderBuilder::new()
        .with_recommended_fillers()
        .wallet(wallet)
        .on_http(rpc_url);

    // Fetch chain id
    let chain_id = provider
        .get_chain_id()
        .await
        .map_err(|e| DeploymentError::ClientInitialization(e.to_string()))?;

    info!("Built client on chain ID: {}", chain_id);

    Ok(provider)
}
