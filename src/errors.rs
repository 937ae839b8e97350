//! Definitions of errors that can occur during the execution of the deploy scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur while deploying the contracts
#[derive(Debug)]
pub enum DeploymentError {
    /// Error when creating the client
    ClientInitialization(String),
    /// Error when fetching the nonce used to predict a contract address
    NonceFetching(String),
    /// The requested artifact is not known to the store
    UnknownArtifact(String),
    /// Error reading or decoding a compiled artifact
    ArtifactResolution(String),
    /// Error submitting a deployment
    ContractDeployment(String),
    /// Error waiting for a deployment to confirm
    Confirmation(String),
    /// Error reporting a deployed address
    AddressReport(String),
}

impl Display for DeploymentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DeploymentError::ClientInitialization(s) => {
                write!(f, "error during client init: {}", s)
            }
            DeploymentError::NonceFetching(s) => {
                write!(f, "error during nonce fetching for address prediction: {}", s)
            }
            DeploymentError::UnknownArtifact(s) => write!(f, "unknown artifact: {}", s),
            DeploymentError::ArtifactResolution(s) => write!(f, "error reading artifact: {}", s),
            DeploymentError::ContractDeployment(s) => write!(f, "error deploying contract: {}", s),
            DeploymentError::Confirmation(s) => {
                write!(f, "error waiting for deployment confirmation: {}", s)
            }
            DeploymentError::AddressReport(s) => {
                write!(f, "error reporting deployed address: {}", s)
            }
        }
    }
}

impl Error for DeploymentError {}
