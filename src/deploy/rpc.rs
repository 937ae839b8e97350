//! Live deployment provider submitting transactions through the RPC client

use alloy::{
    network::TransactionBuilder,
    primitives::{keccak256, Address, Bytes, TxHash},
    providers::{PendingTransactionBuilder, Provider, WalletProvider},
    rpc::types::eth::TransactionRequest,
};
use ethers::{prelude::U256, utils::rlp};
use tracing::info;

use crate::{
    artifacts::ArtifactStore,
    deploy::{ConfirmedAddress, DeploymentHandle, DeploymentProvider, DeploymentRequest},
    errors::DeploymentError,
    tx::client::RpcProvider,
};

/// Deployment provider backed by the signing RPC client.
///
/// Artifact names are resolved to creation bytecode through the store, then
/// submitted as plain deploy transactions.
pub struct RpcDeployer {
    /// The signing provider used for every submission
    client: RpcProvider,
    /// Store resolving artifact names to creation bytecode
    artifacts: ArtifactStore,
}

impl RpcDeployer {
    /// Build a deployer over the given client and artifact store
    pub fn new(client: RpcProvider, artifacts: ArtifactStore) -> Self {
        Self { client, artifacts }
    }
}

impl DeploymentProvider for RpcDeployer {
    type Handle = PendingDeployment;

    async fn deploy_contract(
        &self,
        request: &DeploymentRequest,
    ) -> Result<PendingDeployment, DeploymentError> {
        // Resolve the creation bytecode of the requested artifact
        let creation_code = self.artifacts.creation_code(request.artifact())?;

        // Predict the address the contract will land on
        let address = predict_contract_address(&self.client).await?;

        // Build the deploy tx and send it
        let tx_request = TransactionRequest::default().with_deploy_code(Bytes::from(creation_code));
        let pending_tx = self
            .client
            .send_transaction(tx_request)
            .await
            .map_err(|e| DeploymentError::ContractDeployment(e.to_string()))?;
        info!(
            "Pending {} deployment transaction... {}",
            request.artifact(),
            pending_tx.tx_hash()
        );

        Ok(PendingDeployment {
            client: self.client.clone(),
            tx_hash: *pending_tx.tx_hash(),
            address,
        })
    }
}

/// An in-flight deployment: the submitted transaction hash plus the address
/// the contract is expected to land on once the network includes it.
pub struct PendingDeployment {
    /// Client used to watch the submitted transaction
    client: RpcProvider,
    /// Hash of the submitted deployment transaction
    tx_hash: TxHash,
    /// Predicted contract address, not yet confirmed
    address: Address,
}

impl DeploymentHandle for PendingDeployment {
    async fn wait_for_confirmation(self) -> Result<ConfirmedAddress, DeploymentError> {
        // Wait for the transaction to be included
        let receipt = PendingTransactionBuilder::new(self.client.root(), self.tx_hash)
            .get_receipt()
            .await
            .map_err(|e| DeploymentError::Confirmation(e.to_string()))?;

        if let Some(block) = receipt.block_number {
            info!("Deployment confirmed on block: {}", block);
        }

        // Prefer the address reported by the node, fall back on the prediction
        let address = receipt.contract_address.unwrap_or(self.address);

        Ok(ConfirmedAddress::new(address.to_string()))
    }
}

/// Predict the address of the next deployment sent by the client's signer,
/// from the signer address and its current nonce
async fn predict_contract_address(client: &RpcProvider) -> Result<Address, DeploymentError> {
    // Get signer
    let signer = client.default_signer_address();

    // Get the signer nonce
    let signer_nonce = client
        .get_transaction_count(signer)
        .await
        .map_err(|e| DeploymentError::NonceFetching(e.to_string()))?;

    Ok(create_address(&signer, signer_nonce))
}

/// Compute the CREATE address for the given sender and nonce: keccak of the
/// RLP list `[sender, nonce]`, low 20 bytes
fn create_address(sender: &Address, nonce: u64) -> Address {
    let mut stream = rlp::RlpStream::new();
    stream.begin_list(2);
    stream.append(&sender.to_vec());
    stream.append(&U256::from(nonce));
    let hash = keccak256(&stream.out());

    let mut bytes = [0u8; 20];
    bytes.copy_from_slice(&hash[12..]);
    Address::from(bytes)
}
