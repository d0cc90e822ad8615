//! Constants used in the deploy scripts

/// The default RPC URL, a local development node
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8545";

/// The default directory containing compiled contract artifacts
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// The default path of the deployments file
pub const DEFAULT_DEPLOYMENTS_PATH: &str = "deployments.json";

/// The number of confirmations to wait for each deployment transaction
pub const NUM_DEPLOY_CONFIRMATIONS: u64 = 1;

/// The environment variable holding the RPC URL
pub const RPC_URL_ENV_VAR: &str = "RPC_URL";

/// The environment variable holding the deployer's private key
pub const PRIV_KEY_ENV_VAR: &str = "PKEY";

/// The environment variable holding the router address passed to the Treasury
pub const ROUTER_ADDRESS_ENV_VAR: &str = "ROUTER_ADDRESS";

/// The subdirectory of the artifacts directory holding contract sources' artifacts
pub const CONTRACTS_PATH_SEGMENT: &str = "contracts";

/// The subdirectory of the artifacts directory holding compiler build info,
/// which never contains contract artifacts
pub const BUILD_INFO_PATH_SEGMENT: &str = "build-info";

/// The extension of a Solidity source file
pub const SOLIDITY_EXTENSION: &str = "sol";

/// The extension of an artifact file
pub const ARTIFACT_EXTENSION: &str = "json";

/// The artifact name of the SDAO token contract
pub const SDAO_CONTRACT_NAME: &str = "SDAO";

/// The artifact name of the Governance contract
pub const GOVERNANCE_CONTRACT_NAME: &str = "Governance";

/// The artifact name of the Voting contract
pub const VOTING_CONTRACT_NAME: &str = "Voting";

/// The artifact name of the Treasury contract
pub const TREASURY_CONTRACT_NAME: &str = "Treasury";
