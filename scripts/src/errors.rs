//! Definitions of errors that can occur during the execution of the deploy scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur during the execution of the deploy scripts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// No signing account is available in the execution environment
    Environment(String),
    /// No compiled artifact exists for the named contract
    FactoryNotFound(String),
    /// A constructor argument refers to a value that was never provided
    UnresolvedReference(String),
    /// Error submitting a transaction or awaiting its confirmation
    Transaction(String),
    /// Error initializing the RPC client
    ClientInitialization(String),
    /// Error parsing a compilation artifact
    ArtifactParsing(String),
    /// Error constructing constructor calldata
    CalldataConstruction(String),
    /// The deployment plan violates its ordering invariants
    InvalidPlan(String),
    /// Error reading the deployments file
    ReadDeployments(String),
    /// Error writing the deployments file
    WriteDeployments(String),
    /// Error writing a report line
    Output(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::Environment(s) => write!(f, "environment error: {}", s),
            ScriptError::FactoryNotFound(s) => write!(f, "contract factory not found: {}", s),
            ScriptError::UnresolvedReference(s) => write!(f, "unresolved reference: {}", s),
            ScriptError::Transaction(s) => write!(f, "transaction error: {}", s),
            ScriptError::ClientInitialization(s) => write!(f, "error initializing client: {}", s),
            ScriptError::ArtifactParsing(s) => write!(f, "error parsing artifact: {}", s),
            ScriptError::CalldataConstruction(s) => write!(f, "error constructing calldata: {}", s),
            ScriptError::InvalidPlan(s) => write!(f, "invalid deployment plan: {}", s),
            ScriptError::ReadDeployments(s) => write!(f, "error reading deployments: {}", s),
            ScriptError::WriteDeployments(s) => write!(f, "error writing deployments: {}", s),
            ScriptError::Output(s) => write!(f, "error writing output: {}", s),
        }
    }
}

impl Error for ScriptError {}
