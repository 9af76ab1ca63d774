//! Binary crate for the `weather-collector` daemon.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Logging to the console and rotating files
//! - Building the collector from configuration and keeping it running

use clap::Parser;

mod cli;
mod logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Values already present in the environment win over `.env`.
    dotenvy::dotenv().ok();

    let cmd = cli::Cli::parse();
    let _guard = logging::init(&cmd.log_dir)?;
    cmd.run().await
}
