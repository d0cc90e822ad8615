//! The deployment runner, which executes a [`DeploymentPlan`] step by step.
//!
//! The runner acquires a signer, resolves a factory for every contract in the
//! plan, and then deploys the contracts strictly in order, feeding the addresses
//! of earlier deployments into the constructors of later ones. Nothing is rolled
//! back on failure: contracts deployed before a failing step stay deployed, and
//! their addresses stay reported and recorded.

use std::{collections::HashMap, io::Write, path::PathBuf};

use alloy_primitives::Address;
use tracing::{info, warn};

use crate::{
    artifacts::{ArtifactStore, ContractFactory},
    deployer::Deployer,
    errors::ScriptError,
    plan::{DeploymentPlan, DeploymentStep},
    types::{ConstructorArg, DaoContract, DeployedContract},
    utils::{check_deployments_file, write_deployed_address},
};

/// Executes deployment plans against a [`Deployer`]
pub struct DeploymentRunner<D> {
    /// The backend submitting deployments
    deployer: D,
    /// Where contract factories are resolved from
    artifacts: ArtifactStore,
    /// The router address passed to the treasury, if configured
    router: Option<Address>,
    /// The file in which to record deployed addresses, if any
    deployments_path: Option<PathBuf>,
}

impl<D: Deployer> DeploymentRunner<D> {
    /// Create a runner deploying through `deployer` with factories from `artifacts`
    pub fn new(deployer: D, artifacts: ArtifactStore) -> Self {
        Self {
            deployer,
            artifacts,
            router: None,
            deployments_path: None,
        }
    }

    /// Set the router address passed to the treasury
    pub fn with_router(mut self, router: Option<Address>) -> Self {
        self.router = router;
        self
    }

    /// Record each deployed address in the given deployments file
    pub fn with_deployments_path(mut self, deployments_path: impl Into<PathBuf>) -> Self {
        self.deployments_path = Some(deployments_path.into());
        self
    }

    /// The backend submitting deployments
    pub fn deployer(&self) -> &D {
        &self.deployer
    }

    /// Run the plan, writing a status line for the signer and one line per
    /// deployed contract to `out`, and return the deployed contracts in order
    pub async fn run(
        &self,
        plan: &DeploymentPlan,
        out: &mut impl Write,
    ) -> Result<Vec<DeployedContract>, ScriptError> {
        let signer = self.acquire_signer().await?;
        info!("Using deployer account {}", signer);
        writeln!(out, "Deploying contracts with the account: {}", signer)
            .map_err(|e| ScriptError::Output(e.to_string()))?;

        let factories = self.resolve_factories(plan)?;
        if let Some(deployments_path) = &self.deployments_path {
            check_deployments_file(deployments_path)?;
        }

        if plan.requires_router() && self.router.is_none() {
            warn!("No router address configured, contracts taking the router will fail to deploy");
        }

        let mut addresses = HashMap::new();
        let mut deployed = Vec::with_capacity(factories.len());
        for (step, factory) in plan.steps().iter().zip(factories) {
            let args = self.resolve_args(step, &addresses)?;
            let init_code = factory.deploy_code(&args)?;

            info!("Deploying {}", step.contract);
            let address = self.deployer.deploy(signer, init_code).await?;
            addresses.insert(step.contract, address);

            let contract = DeployedContract {
                contract: step.contract,
                address,
            };
            writeln!(out, "{}", contract).map_err(|e| ScriptError::Output(e.to_string()))?;

            if let Some(deployments_path) = &self.deployments_path {
                write_deployed_address(deployments_path, step.contract.artifact_name(), address)?;
            }

            deployed.push(contract);
        }

        Ok(deployed)
    }

    /// Take the first account available to the deployer
    async fn acquire_signer(&self) -> Result<Address, ScriptError> {
        self.deployer
            .accounts()
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| {
                ScriptError::Environment(
                    "no signer configured, provide a private key or an RPC node with unlocked accounts"
                        .to_string(),
                )
            })
    }

    /// Resolve the factory of every contract in the plan, before anything is deployed
    fn resolve_factories(&self, plan: &DeploymentPlan) -> Result<Vec<ContractFactory>, ScriptError> {
        plan.contracts()
            .map(|contract| self.artifacts.factory(contract))
            .collect()
    }

    /// Resolve the constructor arguments of a step to addresses
    fn resolve_args(
        &self,
        step: &DeploymentStep,
        addresses: &HashMap<DaoContract, Address>,
    ) -> Result<Vec<Address>, ScriptError> {
        step.args
            .iter()
            .map(|arg| match arg {
                ConstructorArg::Deployed(dep) => addresses.get(dep).copied().ok_or_else(|| {
                    ScriptError::UnresolvedReference(format!(
                        "{} needs the address of {}, which has not been deployed",
                        step.contract, dep
                    ))
                }),
                ConstructorArg::Router => self.router.ok_or_else(|| {
                    ScriptError::UnresolvedReference(format!(
                        "{} needs a router address, none was configured",
                        step.contract
                    ))
                }),
            })
            .collect()
    }
}
