//! Constants used in the deploy scripts

/// Default RPC endpoint
pub const DEFAULT_RPC: &str = "http://localhost:8545";

/// Default directory holding the compiled contract artifacts
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// Artifact name of the staking contract
pub const STAKING_ARTIFACT: &str = "StakingContract";

/// Artifact name of the token contract
pub const TOKEN_ARTIFACT: &str = "TokenContract";
