//! Definitions of CLI arguments and commands for deploy scripts

use std::path::PathBuf;

use alloy_primitives::Address;
use clap::{Args, Parser, Subcommand};

use crate::{
    commands::{deploy_dao, print_plan},
    constants::{
        DEFAULT_ARTIFACTS_DIR, DEFAULT_DEPLOYMENTS_PATH, DEFAULT_RPC_URL,
        NUM_DEPLOY_CONFIRMATIONS, PRIV_KEY_ENV_VAR, ROUTER_ADDRESS_ENV_VAR, RPC_URL_ENV_VAR,
    },
    errors::ScriptError,
};

/// Scripts for deploying the SDAO, Governance, Voting, and Treasury contracts
#[derive(Parser)]
pub struct Cli {
    /// Network RPC URL
    #[arg(short, long, env = RPC_URL_ENV_VAR, default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

/// The commands supported by the deploy scripts
#[derive(Subcommand)]
pub enum Command {
    /// Deploy the DAO contracts, in order
    Deploy(DeployArgs),
    /// Print the deployment order and each contract's constructor dependencies
    Plan,
}

impl Command {
    /// Run the command
    pub async fn run(self, rpc_url: &str) -> Result<(), ScriptError> {
        match self {
            Command::Deploy(args) => deploy_dao(args, rpc_url).await,
            Command::Plan => print_plan(),
        }
    }
}

/// Deploy the DAO contracts.
///
/// SDAO is deployed first, followed by Governance, Voting, and Treasury,
/// each taking the addresses of the contracts deployed before it.
#[derive(Args)]
pub struct DeployArgs {
    /// Private key of the deployer.
    ///
    /// If omitted, the first account exposed by the RPC node signs the deployments.
    #[arg(short, long, env = PRIV_KEY_ENV_VAR)]
    pub priv_key: Option<String>,

    /// Directory containing the compiled contract artifacts
    #[arg(short, long, default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts: PathBuf,

    /// Address of the router passed to the Treasury constructor.
    ///
    /// The Treasury cannot be deployed without it.
    #[arg(long, env = ROUTER_ADDRESS_ENV_VAR)]
    pub router: Option<Address>,

    /// Path of the file in which deployed addresses are recorded
    #[arg(short, long, default_value = DEFAULT_DEPLOYMENTS_PATH)]
    pub deployments_path: PathBuf,

    /// Number of confirmations to wait for on each deployment
    #[arg(
        short,
        long,
        default_value_t = NUM_DEPLOY_CONFIRMATIONS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub confirmations: u64,

    /// Maximum number of seconds to wait for each deployment to be confirmed
    #[arg(long)]
    pub receipt_timeout_secs: Option<u64>,
}
