//! Transaction plumbing shared by the deploy scripts

pub mod client;
