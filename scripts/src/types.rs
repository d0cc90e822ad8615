//! Type definitions used throughout the scripts

use std::fmt::{self, Display};

use alloy_primitives::Address;

use crate::constants::{
    GOVERNANCE_CONTRACT_NAME, SDAO_CONTRACT_NAME, TREASURY_CONTRACT_NAME, VOTING_CONTRACT_NAME,
};

/// The contracts making up the DAO
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DaoContract {
    /// The SDAO token contract
    Sdao,
    /// The governance contract
    Governance,
    /// The voting contract
    Voting,
    /// The treasury contract
    Treasury,
}

impl DaoContract {
    /// The name under which the contract's compiled artifact is stored.
    ///
    /// This is also the key of the contract in the deployments file.
    pub fn artifact_name(&self) -> &'static str {
        match self {
            DaoContract::Sdao => SDAO_CONTRACT_NAME,
            DaoContract::Governance => GOVERNANCE_CONTRACT_NAME,
            DaoContract::Voting => VOTING_CONTRACT_NAME,
            DaoContract::Treasury => TREASURY_CONTRACT_NAME,
        }
    }
}

impl Display for DaoContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.artifact_name())
    }
}

/// A single constructor argument of a deployment step
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConstructorArg {
    /// The address of a contract deployed earlier in the plan
    Deployed(DaoContract),
    /// The address of the router, which must be provided externally
    Router,
}

impl Display for ConstructorArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstructorArg::Deployed(contract) => write!(f, "{}", contract),
            ConstructorArg::Router => write!(f, "router"),
        }
    }
}

/// A contract that has been deployed and confirmed on-chain
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DeployedContract {
    /// Which contract was deployed
    pub contract: DaoContract,
    /// The address at which it was deployed
    pub address: Address,
}

impl Display for DeployedContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} deployed to: {}", self.contract, self.address)
    }
}
