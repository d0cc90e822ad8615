//! Helpers for testing the deployment runner without a live node

use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use alloy_primitives::{address, hex, Address, Bytes};
use dao_scripts::{
    artifacts::ArtifactStore, deployer::Deployer, errors::ScriptError, runner::DeploymentRunner,
    types::DaoContract,
};
use rand::{distributions::Alphanumeric, thread_rng, Rng};

/// The first default account of a local development node
pub const DEPLOYER: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

/// The router address handed to the treasury in tests
pub const ROUTER: Address = address!("7a250d5630B4cF539739dF2C5dAcb4c659F2488D");

/// The contracts of the DAO, in deployment order
pub const DAO_CONTRACTS: [DaoContract; 4] = [
    DaoContract::Sdao,
    DaoContract::Governance,
    DaoContract::Voting,
    DaoContract::Treasury,
];

/// A deployer that records every deployment instead of submitting it,
/// deriving addresses from the sender and the number of prior deployments
pub struct MockDeployer {
    /// The accounts reported as available
    accounts: Vec<Address>,
    /// The index of the deployment that should fail, if any
    fail_at: Option<usize>,
    /// The recorded deployments, as (sender, init code) pairs
    deployments: Mutex<Vec<(Address, Bytes)>>,
}

impl MockDeployer {
    /// A deployer with the given available accounts
    pub fn new(accounts: Vec<Address>) -> Self {
        Self {
            accounts,
            fail_at: None,
            deployments: Mutex::new(Vec::new()),
        }
    }

    /// Fail the deployment with the given index, counting from zero
    pub fn failing_at(mut self, index: usize) -> Self {
        self.fail_at = Some(index);
        self
    }

    /// The deployments submitted so far
    pub fn deployments(&self) -> Vec<(Address, Bytes)> {
        self.deployments.lock().unwrap().clone()
    }
}

impl Deployer for MockDeployer {
    async fn accounts(&self) -> Result<Vec<Address>, ScriptError> {
        Ok(self.accounts.clone())
    }

    async fn deploy(&self, from: Address, init_code: Bytes) -> Result<Address, ScriptError> {
        let mut deployments = self.deployments.lock().unwrap();
        if self.fail_at == Some(deployments.len()) {
            return Err(ScriptError::Transaction("execution reverted".to_string()));
        }

        let address = from.create(deployments.len() as u64);
        deployments.push((from, init_code));
        Ok(address)
    }
}

/// A runner deploying through `deployer` with the artifacts under `artifacts`
pub fn mock_runner(deployer: MockDeployer, artifacts: &Path) -> DeploymentRunner<MockDeployer> {
    DeploymentRunner::new(deployer, ArtifactStore::new(artifacts))
}

/// The creation bytecode used for the given contract's test artifact
pub fn test_bytecode(contract: DaoContract) -> Bytes {
    let marker = match contract {
        DaoContract::Sdao => 0x01,
        DaoContract::Governance => 0x02,
        DaoContract::Voting => 0x03,
        DaoContract::Treasury => 0x04,
    };
    Bytes::from(vec![0x60, 0x80, 0x60, 0x40, 0x52, marker])
}

/// A fresh, empty directory under the system temp directory
pub fn temp_dir(prefix: &str) -> PathBuf {
    let suffix: String = thread_rng()
        .sample_iter(&Alphanumeric)
        .take(12)
        .map(char::from)
        .collect();
    let dir = env::temp_dir().join(format!("{}-{}", prefix, suffix));
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Write Hardhat-style artifacts for the given contracts under `root`
pub fn write_artifacts(root: &Path, contracts: &[DaoContract]) {
    for contract in contracts {
        let name = contract.artifact_name();
        let dir = root.join("contracts").join(format!("{}.sol", name));
        fs::create_dir_all(&dir).unwrap();

        let artifact = serde_json::json!({
            "_format": "hh-sol-artifact-1",
            "contractName": name,
            "sourceName": format!("contracts/{}.sol", name),
            "abi": [],
            "bytecode": hex::encode_prefixed(test_bytecode(*contract)),
            "deployedBytecode": "0x",
        });
        fs::write(dir.join(format!("{}.json", name)), artifact.to_string()).unwrap();
    }
}

/// Split the runner's output into lines
pub fn output_lines(out: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(out).lines().map(str::to_string).collect()
}

/// The constructor arguments encoded after the bytecode of `contract` in `init_code`,
/// as addresses
pub fn constructor_addresses(contract: DaoContract, init_code: &Bytes) -> Vec<Address> {
    let bytecode = test_bytecode(contract);
    assert!(init_code.starts_with(&bytecode), "init code does not start with {contract} bytecode");

    init_code[bytecode.len()..]
        .chunks(32)
        .map(|word| Address::from_slice(&word[12..]))
        .collect()
}
