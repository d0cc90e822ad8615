//! The ordered sequence of deployments making up the DAO

use std::collections::HashSet;

use itertools::Itertools;

use crate::{
    errors::ScriptError,
    types::{ConstructorArg, DaoContract},
};

/// A single contract deployment within a plan
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeploymentStep {
    /// The contract to deploy
    pub contract: DaoContract,
    /// The constructor arguments, in declaration order
    pub args: Vec<ConstructorArg>,
}

impl DeploymentStep {
    /// Create a new deployment step
    pub fn new(contract: DaoContract, args: Vec<ConstructorArg>) -> Self {
        Self { contract, args }
    }

    /// The contracts this step must be deployed after
    pub fn dependencies(&self) -> impl Iterator<Item = DaoContract> + '_ {
        self.args.iter().filter_map(|arg| match arg {
            ConstructorArg::Deployed(contract) => Some(*contract),
            ConstructorArg::Router => None,
        })
    }
}

/// An ordered list of deployment steps.
///
/// Every step only depends on contracts deployed by earlier steps, and
/// each contract is deployed at most once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeploymentPlan {
    /// The steps, in deployment order
    steps: Vec<DeploymentStep>,
}

impl DeploymentPlan {
    /// Create a plan from the given steps, validating their ordering
    pub fn new(steps: Vec<DeploymentStep>) -> Result<Self, ScriptError> {
        let mut deployed = HashSet::new();
        for step in &steps {
            if let Some(missing) = step.dependencies().find(|dep| !deployed.contains(dep)) {
                return Err(ScriptError::InvalidPlan(format!(
                    "{} depends on {}, which is not deployed before it",
                    step.contract, missing
                )));
            }

            if !deployed.insert(step.contract) {
                return Err(ScriptError::InvalidPlan(format!(
                    "{} is deployed more than once",
                    step.contract
                )));
            }
        }

        Ok(Self { steps })
    }

    /// The DAO deployment plan:
    /// SDAO, then Governance, then Voting, then Treasury
    pub fn dao() -> Self {
        use ConstructorArg::{Deployed, Router};
        use DaoContract::{Governance, Sdao, Treasury, Voting};

        Self {
            steps: vec![
                DeploymentStep::new(Sdao, vec![]),
                DeploymentStep::new(Governance, vec![Deployed(Sdao)]),
                DeploymentStep::new(Voting, vec![Deployed(Sdao), Deployed(Governance)]),
                DeploymentStep::new(Treasury, vec![Deployed(Governance), Deployed(Sdao), Router]),
            ],
        }
    }

    /// The steps of the plan, in deployment order
    pub fn steps(&self) -> &[DeploymentStep] {
        &self.steps
    }

    /// The contracts deployed by the plan, in deployment order
    pub fn contracts(&self) -> impl Iterator<Item = DaoContract> + '_ {
        self.steps.iter().map(|step| step.contract)
    }

    /// Whether any step takes the externally provided router address
    pub fn requires_router(&self) -> bool {
        self.steps
            .iter()
            .any(|step| step.args.contains(&ConstructorArg::Router))
    }

    /// A human-readable rendering of the plan, one step per line
    pub fn describe(&self) -> Vec<String> {
        self.steps
            .iter()
            .enumerate()
            .map(|(i, step)| {
                format!("{}. {}({})", i + 1, step.contract, step.args.iter().join(", "))
            })
            .collect()
    }
}
