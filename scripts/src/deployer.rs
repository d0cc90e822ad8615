//! Submission of contract creation transactions

use std::{future::Future, time::Duration};

use alloy::{
    network::TransactionBuilder,
    providers::{DynProvider, Provider},
    rpc::types::TransactionRequest,
};
use alloy_primitives::{Address, Bytes};
use tracing::debug;

use crate::{constants::NUM_DEPLOY_CONFIRMATIONS, errors::ScriptError};

/// A backend able to sign and submit contract deployments
pub trait Deployer {
    /// The accounts available to sign transactions, in priority order
    fn accounts(&self) -> impl Future<Output = Result<Vec<Address>, ScriptError>> + Send;

    /// Submit a contract creation transaction with the given init code from
    /// `from`, wait for it to be confirmed, and return the created contract's address
    fn deploy(
        &self,
        from: Address,
        init_code: Bytes,
    ) -> impl Future<Output = Result<Address, ScriptError>> + Send;
}

/// A [`Deployer`] submitting transactions through an RPC provider
#[derive(Clone)]
pub struct RpcDeployer {
    /// The provider used to submit transactions
    provider: DynProvider,
    /// The address of the locally held key the provider signs with, if any.
    ///
    /// When unset, transactions are signed by the node using its own accounts.
    local_signer: Option<Address>,
    /// The number of confirmations to wait for on each deployment
    confirmations: u64,
    /// How long to wait for each deployment to be confirmed
    receipt_timeout: Option<Duration>,
}

impl RpcDeployer {
    /// Create a deployer over the given provider
    pub fn new(provider: DynProvider, local_signer: Option<Address>) -> Self {
        Self {
            provider,
            local_signer,
            confirmations: NUM_DEPLOY_CONFIRMATIONS,
            receipt_timeout: None,
        }
    }

    /// Set the number of confirmations to wait for on each deployment
    pub fn with_confirmations(mut self, confirmations: u64) -> Self {
        self.confirmations = confirmations;
        self
    }

    /// Set the maximum time to wait for each deployment to be confirmed
    pub fn with_receipt_timeout(mut self, receipt_timeout: Option<Duration>) -> Self {
        self.receipt_timeout = receipt_timeout;
        self
    }
}

impl Deployer for RpcDeployer {
    async fn accounts(&self) -> Result<Vec<Address>, ScriptError> {
        if let Some(address) = self.local_signer {
            return Ok(vec![address]);
        }

        self.provider
            .get_accounts()
            .await
            .map_err(|e| ScriptError::Environment(e.to_string()))
    }

    async fn deploy(&self, from: Address, init_code: Bytes) -> Result<Address, ScriptError> {
        let tx = TransactionRequest::default()
            .with_from(from)
            .with_deploy_code(init_code);

        let pending_tx = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| ScriptError::Transaction(e.to_string()))?;

        let tx_hash = *pending_tx.tx_hash();
        debug!(%tx_hash, "Awaiting deployment confirmation");

        let receipt = pending_tx
            .with_required_confirmations(self.confirmations)
            .with_timeout(self.receipt_timeout)
            .get_receipt()
            .await
            .map_err(|e| ScriptError::Transaction(e.to_string()))?;

        if !receipt.status() {
            return Err(ScriptError::Transaction(format!(
                "deployment transaction {} reverted",
                tx_hash
            )));
        }

        receipt.contract_address.ok_or_else(|| {
            ScriptError::Transaction(format!(
                "receipt for {} carries no contract address",
                tx_hash
            ))
        })
    }
}
