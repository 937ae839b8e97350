//! Scripts for deploying the staking and token contracts.

#![deny(clippy::missing_docs_in_private_items)]

pub mod cli;
pub mod commands;
pub mod constants;
pub mod errors;

/// Compiled artifact lookup
pub mod artifacts;

/// Our deployment provider seam and its live RPC implementation
pub mod deploy;

/// The sequential deployment runner
pub mod runner;

pub mod tx;
