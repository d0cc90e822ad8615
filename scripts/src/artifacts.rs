//! Resolution of compiled contract artifacts into contract factories.
//!
//! Artifacts follow the Hardhat layout, in which the artifact for contract
//! `Name` defined in `Name.sol` lives at `<root>/contracts/Name.sol/Name.json`.
//! Contracts defined in differently-named or nested source files are found by
//! searching the artifacts tree for `Name.json`.

use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use alloy_primitives::{Address, Bytes};
use serde::Deserialize;
use tracing::debug;

use crate::{
    constants::{
        ARTIFACT_EXTENSION, BUILD_INFO_PATH_SEGMENT, CONTRACTS_PATH_SEGMENT, SOLIDITY_EXTENSION,
    },
    errors::ScriptError,
    solidity::init_code,
    types::DaoContract,
};

/// The subset of a compilation artifact needed for deployment
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Artifact {
    /// The name of the contract
    contract_name: String,
    /// The hex-encoded creation bytecode
    bytecode: String,
}

/// A handle capable of producing the init code of a single contract type
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractFactory {
    /// The contract this factory deploys
    pub contract: DaoContract,
    /// The creation bytecode of the contract
    pub bytecode: Bytes,
}

impl ContractFactory {
    /// The init code deploying this contract with the given constructor arguments
    pub fn deploy_code(&self, args: &[Address]) -> Result<Bytes, ScriptError> {
        init_code(self.contract, &self.bytecode, args)
    }
}

/// A directory of compiled contract artifacts
#[derive(Clone, Debug)]
pub struct ArtifactStore {
    /// The root of the artifacts directory
    root: PathBuf,
}

impl ArtifactStore {
    /// Create a store rooted at the given artifacts directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the factory for the given contract
    pub fn factory(&self, contract: DaoContract) -> Result<ContractFactory, ScriptError> {
        let name = contract.artifact_name();
        let path = self.find_artifact(name).ok_or_else(|| {
            ScriptError::FactoryNotFound(format!(
                "no artifact for {} under {}",
                name,
                self.root.display()
            ))
        })?;
        debug!("Loading {} artifact from {}", name, path.display());

        let contents =
            fs::read_to_string(&path).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;
        let artifact: Artifact = serde_json::from_str(&contents)
            .map_err(|e| ScriptError::ArtifactParsing(format!("{}: {}", path.display(), e)))?;

        if artifact.contract_name != name {
            return Err(ScriptError::ArtifactParsing(format!(
                "{} contains {}, expected {}",
                path.display(),
                artifact.contract_name,
                name
            )));
        }

        let bytecode = Bytes::from_str(&artifact.bytecode)
            .map_err(|e| ScriptError::ArtifactParsing(format!("{}: {}", name, e)))?;
        if bytecode.is_empty() {
            return Err(ScriptError::ArtifactParsing(format!(
                "{} has no deployable bytecode",
                name
            )));
        }

        Ok(ContractFactory { contract, bytecode })
    }

    /// Locate the artifact file for the named contract
    fn find_artifact(&self, name: &str) -> Option<PathBuf> {
        let canonical = self
            .root
            .join(CONTRACTS_PATH_SEGMENT)
            .join(format!("{}.{}", name, SOLIDITY_EXTENSION))
            .join(format!("{}.{}", name, ARTIFACT_EXTENSION));

        if canonical.is_file() {
            return Some(canonical);
        }

        search_artifact(&self.root, &format!("{}.{}", name, ARTIFACT_EXTENSION))
    }
}

/// Recursively search `dir` for a file named `file_name`, skipping build info
fn search_artifact(dir: &Path, file_name: &str) -> Option<PathBuf> {
    let mut entries = fs::read_dir(dir)
        .ok()?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .collect::<Vec<_>>();
    // Directory iteration order is platform-dependent
    entries.sort();

    for path in entries {
        let entry_name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();

        if path.is_dir() {
            if entry_name == BUILD_INFO_PATH_SEGMENT {
                continue;
            }
            if let Some(found) = search_artifact(&path, file_name) {
                return Some(found);
            }
        } else if entry_name == file_name {
            return Some(path);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use std::env;

    use rand::{distributions::Alphanumeric, thread_rng, Rng};

    use super::*;

    /// Create a fresh, empty artifacts directory
    fn temp_artifacts_dir() -> PathBuf {
        let suffix: String = thread_rng()
            .sample_iter(&Alphanumeric)
            .take(12)
            .map(char::from)
            .collect();
        let dir = env::temp_dir().join(format!("dao-artifacts-{}", suffix));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Write an artifact for `name` into `dir`
    fn write_artifact(dir: &Path, name: &str, bytecode: &str) {
        fs::create_dir_all(dir).unwrap();
        let artifact = serde_json::json!({
            "_format": "hh-sol-artifact-1",
            "contractName": name,
            "abi": [],
            "bytecode": bytecode,
            "deployedBytecode": bytecode,
        });
        fs::write(dir.join(format!("{}.json", name)), artifact.to_string()).unwrap();
    }

    #[test]
    fn loads_canonical_artifact() {
        let root = temp_artifacts_dir();
        write_artifact(&root.join("contracts/SDAO.sol"), "SDAO", "0x6080604052");

        let factory = ArtifactStore::new(&root).factory(DaoContract::Sdao).unwrap();
        assert_eq!(factory.contract, DaoContract::Sdao);
        assert_eq!(factory.bytecode, Bytes::from(vec![0x60, 0x80, 0x60, 0x40, 0x52]));

        fs::remove_dir_all(root).unwrap();
    }

    #[test]
    fn finds_nested_artifact() {
        let root = temp_artifacts_dir();
        write_artifact(&root.join("contracts/dao/Core.sol"), "Voting", "0x60806040");

        let factory = ArtifactStore::new(&root).factory(DaoContract::Voting).unwrap();
        assert_eq!(factory.bytecode.len(), 4);

        fs::remove_dir_all(root).unwrap();
    }

    #[test]
    fn missing_artifact_is_factory_not_found() {
        let root = temp_artifacts_dir();

        let err = ArtifactStore::new(&root).factory(DaoContract::Treasury).unwrap_err();
        assert!(matches!(err, ScriptError::FactoryNotFound(_)));

        fs::remove_dir_all(root).unwrap();
    }

    #[test]
    fn abstract_contract_is_rejected() {
        let root = temp_artifacts_dir();
        write_artifact(&root.join("contracts/Governance.sol"), "Governance", "0x");

        let err = ArtifactStore::new(&root).factory(DaoContract::Governance).unwrap_err();
        assert!(matches!(err, ScriptError::ArtifactParsing(_)));

        fs::remove_dir_all(root).unwrap();
    }
}
