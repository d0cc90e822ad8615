//! Utilities for the deploy scripts.

use std::{fs, path::Path, str::FromStr, time::Duration};

use alloy::{
    providers::{DynProvider, Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use alloy_primitives::Address;
use serde_json::{Map, Value};
use tracing::info;

use crate::{deployer::RpcDeployer, errors::ScriptError};

/// Sets up the deployer with which to submit contract deployments.
///
/// If a private key is given, transactions are signed locally with it.
/// Otherwise, the node's own accounts sign them.
pub async fn setup_client(
    rpc_url: &str,
    priv_key: Option<&str>,
    confirmations: u64,
    receipt_timeout: Option<Duration>,
) -> Result<RpcDeployer, ScriptError> {
    let url = Url::parse(rpc_url).map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    let (provider, local_signer) = match priv_key {
        Some(priv_key) => {
            let signer = PrivateKeySigner::from_str(priv_key)
                .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
            let address = signer.address();
            let provider = ProviderBuilder::new().wallet(signer).connect_http(url);
            (DynProvider::new(provider), Some(address))
        }
        None => {
            let provider = ProviderBuilder::new().connect_http(url);
            (DynProvider::new(provider), None)
        }
    };

    let chain_id = provider
        .get_chain_id()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    info!("Connected to chain {} at {}", chain_id, rpc_url);

    Ok(RpcDeployer::new(provider, local_signer)
        .with_confirmations(confirmations)
        .with_receipt_timeout(receipt_timeout))
}

/// Read the deployments file as a JSON object, or an empty object if it does not exist
fn read_deployments(file_path: &Path) -> Result<Map<String, Value>, ScriptError> {
    if !file_path.exists() {
        return Ok(Map::new());
    }

    let contents = fs::read_to_string(file_path)
        .map_err(|e| ScriptError::ReadDeployments(e.to_string()))?;
    match serde_json::from_str(&contents) {
        Ok(Value::Object(deployments)) => Ok(deployments),
        Ok(_) => Err(ScriptError::ReadDeployments(format!(
            "{} is not a JSON object",
            file_path.display()
        ))),
        Err(e) => Err(ScriptError::ReadDeployments(e.to_string())),
    }
}

/// Check that the deployments file, if it exists, can be read and updated
pub fn check_deployments_file(file_path: &Path) -> Result<(), ScriptError> {
    read_deployments(file_path).map(|_| ())
}

/// Read the address stored under `contract_key` in the deployments file
pub fn read_deployment(file_path: &Path, contract_key: &str) -> Result<Address, ScriptError> {
    let deployments = read_deployments(file_path)?;

    let address = deployments
        .get(contract_key)
        .and_then(Value::as_str)
        .ok_or_else(|| {
            ScriptError::ReadDeployments(format!(
                "{} not found in {}",
                contract_key,
                file_path.display()
            ))
        })?;

    Address::from_str(address).map_err(|e| ScriptError::ReadDeployments(e.to_string()))
}

/// Record the address of a deployed contract in the deployments file,
/// creating the file if it doesn't exist
pub fn write_deployed_address(
    file_path: &Path,
    contract_key: &str,
    address: Address,
) -> Result<(), ScriptError> {
    let mut deployments = read_deployments(file_path)?;
    deployments.insert(
        contract_key.to_string(),
        Value::String(format!("{address:#x}")),
    );

    let contents = serde_json::to_string_pretty(&Value::Object(deployments))
        .map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;
    fs::write(file_path, contents).map_err(|e| ScriptError::WriteDeployments(e.to_string()))
}
