//! Deployment provider seam used by the runner.
//!
//! The runner only ever talks to a [`DeploymentProvider`]; the live RPC
//! implementation lives in [`rpc`], and tests script their own.

use std::{fmt, future::Future};

use crate::errors::DeploymentError;

pub mod rpc;

/// Identifies a contract artifact to deploy, by the name the provider knows
/// it under. Built once per artifact and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentRequest {
    /// Name of the artifact to instantiate
    name: String,
}

impl DeploymentRequest {
    /// Build a request for the given artifact name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The artifact name this request targets
    pub fn artifact(&self) -> &str {
        &self.name
    }
}

/// A confirmed network address in string form. Only produced by a successful
/// confirmation, so holding one proves the deployment it came from is final.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmedAddress(String);

impl ConfirmedAddress {
    /// Wrap the address of a deployment that just confirmed
    pub(crate) fn new(address: String) -> Self {
        Self(address)
    }

    /// The address as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfirmedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A provider able to instantiate named artifacts on a network.
pub trait DeploymentProvider {
    /// Handle to an in-flight deployment submitted through this provider
    type Handle: DeploymentHandle;

    /// Submit a deployment for the requested artifact, returning a handle to
    /// the in-flight transaction. Fails if the artifact is unknown or the
    /// submission is rejected.
    fn deploy_contract(
        &self,
        request: &DeploymentRequest,
    ) -> impl Future<Output = Result<Self::Handle, DeploymentError>>;
}

/// An in-flight deployment that can be awaited until the network confirms it.
pub trait DeploymentHandle {
    /// Suspend until the network confirms the deployment, yielding the final
    /// address. Consumes the handle: the address of an unconfirmed deployment
    /// is not observable.
    fn wait_for_confirmation(
        self,
    ) -> impl Future<Output = Result<ConfirmedAddress, DeploymentError>>;
}
