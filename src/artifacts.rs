//! Lookup of compiled contract artifacts on disk

use std::{fs, path::PathBuf};

use crate::errors::DeploymentError;

/// Resolves artifact names to their compiled EVM creation bytecode.
///
/// Artifacts are expected as `<dir>/<Name>.bin` files holding the hex output
/// of the contract build.
pub struct ArtifactStore {
    /// Directory holding the compiled `.bin` files
    dir: PathBuf,
}

impl ArtifactStore {
    /// Build a store over the given artifacts directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Read the creation bytecode of the named artifact
    pub fn creation_code(&self, name: &str) -> Result<Vec<u8>, DeploymentError> {
        let path = self.dir.join(format!("{name}.bin"));
        if !path.exists() {
            return Err(DeploymentError::UnknownArtifact(name.to_string()));
        }

        let raw = fs::read_to_string(&path)
            .map_err(|e| DeploymentError::ArtifactResolution(e.to_string()))?;

        // The build leaves whitespace around the hex blob
        alloy::hex::decode(raw.trim())
            .map_err(|e| DeploymentError::ArtifactResolution(e.to_string()))
    }
}
