//! Sequential deployment of the staking and token contracts

use std::io::Write;

use tracing::info;

use crate::{
    constants::{STAKING_ARTIFACT, TOKEN_ARTIFACT},
    deploy::{DeploymentHandle, DeploymentProvider, DeploymentRequest},
    errors::DeploymentError,
};

/// Deploys the staking contract, then the token contract, against the
/// injected provider, reporting the confirmed addresses on an injected sink.
pub struct DeploymentRunner<P> {
    /// Provider handling the actual submissions
    provider: P,
}

impl<P: DeploymentProvider> DeploymentRunner<P> {
    /// Build a runner over the given provider
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Deploy both contracts and report their addresses, one line each.
    ///
    /// The token deployment is only submitted once the staking deployment has
    /// confirmed. Any failure aborts the remaining steps; nothing is retried
    /// or rolled back. The staking address is reported twice: once right
    /// after its confirmation and again in the final summary.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<(), DeploymentError> {
        // Deploy the staking contract and wait for it to land
        info!("Deploying the staking contract...");
        let staking_request = DeploymentRequest::new(STAKING_ARTIFACT);
        let staking = self.provider.deploy_contract(&staking_request).await?;
        let staking = staking.wait_for_confirmation().await?;

        writeln!(out, " STACKING: {staking}")
            .map_err(|e| DeploymentError::AddressReport(e.to_string()))?;

        // Then the token contract
        info!("Deploying the token contract...");
        let token_request = DeploymentRequest::new(TOKEN_ARTIFACT);
        let token = self.provider.deploy_contract(&token_request).await?;
        let token = token.wait_for_confirmation().await?;

        // Final summary, staking address first
        writeln!(out, " STACKING: {staking}")
            .map_err(|e| DeploymentError::AddressReport(e.to_string()))?;
        writeln!(out, " TOKEN: {token}")
            .map_err(|e| DeploymentError::AddressReport(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::deploy::ConfirmedAddress;

    /// Journal of the calls a scripted provider has seen
    type CallLog = Rc<RefCell<Vec<String>>>;

    /// Scripted provider: every call is journaled, and submissions or
    /// confirmations can be made to fail per artifact name
    struct ScriptedProvider {
        /// Call journal, shared with the handles
        log: CallLog,
        /// Artifact names whose submission fails
        fail_submit: Vec<String>,
        /// Artifact names whose confirmation fails
        fail_confirm: Vec<String>,
    }

    impl ScriptedProvider {
        /// A provider where everything succeeds
        fn new() -> Self {
            Self {
                log: Rc::new(RefCell::new(Vec::new())),
                fail_submit: Vec::new(),
                fail_confirm: Vec::new(),
            }
        }

        /// The address reported for the given artifact
        fn address_for(artifact: &str) -> String {
            match artifact {
                "StakingContract" => String::from("0xAAA...1"),
                "TokenContract" => String::from("0xBBB...2"),
                other => format!("0x{other}"),
            }
        }
    }

    impl DeploymentProvider for ScriptedProvider {
        type Handle = ScriptedHandle;

        async fn deploy_contract(
            &self,
            request: &DeploymentRequest,
        ) -> Result<ScriptedHandle, DeploymentError> {
            let artifact = request.artifact().to_string();
            self.log.borrow_mut().push(format!("submit:{artifact}"));

            if self.fail_submit.contains(&artifact) {
                return Err(DeploymentError::ContractDeployment(artifact));
            }

            Ok(ScriptedHandle {
                log: Rc::clone(&self.log),
                address: Self::address_for(&artifact),
                fail: self.fail_confirm.contains(&artifact),
                artifact,
            })
        }
    }

    /// Handle produced by the scripted provider
    struct ScriptedHandle {
        /// Call journal, shared with the provider
        log: CallLog,
        /// Address reported on confirmation
        address: String,
        /// Whether the confirmation fails
        fail: bool,
        /// Artifact this handle belongs to
        artifact: String,
    }

    impl DeploymentHandle for ScriptedHandle {
        async fn wait_for_confirmation(self) -> Result<ConfirmedAddress, DeploymentError> {
            self.log
                .borrow_mut()
                .push(format!("confirm:{}", self.artifact));

            if self.fail {
                return Err(DeploymentError::Confirmation(self.artifact));
            }

            Ok(ConfirmedAddress::new(self.address))
        }
    }

    #[tokio::test]
    async fn test_success_prints_three_lines_in_order() {
        let provider = ScriptedProvider::new();
        let log = Rc::clone(&provider.log);
        let runner = DeploymentRunner::new(provider);

        let mut out: Vec<u8> = Vec::new();
        runner.run(&mut out).await.unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            " STACKING: 0xAAA...1\n STACKING: 0xAAA...1\n TOKEN: 0xBBB...2\n"
        );
        assert_eq!(
            *log.borrow(),
            vec![
                "submit:StakingContract",
                "confirm:StakingContract",
                "submit:TokenContract",
                "confirm:TokenContract",
            ]
        );
    }

    #[tokio::test]
    async fn test_token_submitted_only_after_staking_confirms() {
        let provider = ScriptedProvider::new();
        let log = Rc::clone(&provider.log);
        let runner = DeploymentRunner::new(provider);

        let mut out: Vec<u8> = Vec::new();
        runner.run(&mut out).await.unwrap();

        let log = log.borrow();
        let staking_confirmed = log
            .iter()
            .position(|call| call == "confirm:StakingContract")
            .unwrap();
        let token_submitted = log
            .iter()
            .position(|call| call == "submit:TokenContract")
            .unwrap();
        assert!(staking_confirmed < token_submitted);
    }

    #[tokio::test]
    async fn test_staking_submission_failure_skips_token() {
        let mut provider = ScriptedProvider::new();
        provider.fail_submit.push(String::from("StakingContract"));
        let log = Rc::clone(&provider.log);
        let runner = DeploymentRunner::new(provider);

        let mut out: Vec<u8> = Vec::new();
        runner.run(&mut out).await.unwrap_err();

        assert!(out.is_empty());
        assert_eq!(*log.borrow(), vec!["submit:StakingContract"]);
    }

    #[tokio::test]
    async fn test_staking_confirmation_failure_prints_nothing() {
        let mut provider = ScriptedProvider::new();
        provider.fail_confirm.push(String::from("StakingContract"));
        let log = Rc::clone(&provider.log);
        let runner = DeploymentRunner::new(provider);

        let mut out: Vec<u8> = Vec::new();
        runner.run(&mut out).await.unwrap_err();

        assert!(out.is_empty());
        assert_eq!(
            *log.borrow(),
            vec!["submit:StakingContract", "confirm:StakingContract"]
        );
    }

    #[tokio::test]
    async fn test_token_failure_reports_only_the_first_staking_line() {
        let mut provider = ScriptedProvider::new();
        provider.fail_confirm.push(String::from("TokenContract"));
        let runner = DeploymentRunner::new(provider);

        let mut out: Vec<u8> = Vec::new();
        runner.run(&mut out).await.unwrap_err();

        // The token address never shows up, only the first staking line does
        assert_eq!(String::from_utf8(out).unwrap(), " STACKING: 0xAAA...1\n");
    }
}
