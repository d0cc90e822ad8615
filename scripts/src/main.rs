use std::io;

use clap::Parser;
use dao_scripts::{cli::Cli, errors::ScriptError};

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    let Cli { rpc_url, command } = Cli::parse();

    // Keep stdout for the deployed addresses
    tracing_subscriber::fmt().pretty().with_writer(io::stderr).init();

    command.run(&rpc_url).await
}
