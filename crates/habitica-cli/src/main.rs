// SPDX-License-Identifier: Apache-2.0

//! Habitica - command-line client for habitica.com.
//!
//! Tracks habits, dailies and todos, and keeps the stable fed, hatched
//! and decluttered, from the terminal.

mod cli;
mod commands;
mod errors;
mod logging;
mod output;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use habitica_core::{HabiticaClient, load_config};
use tracing::debug;

use crate::cli::{Cli, OutputContext};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let ctx = OutputContext::from_cli(cli.verbose);

    // Resolve credentials up front so a broken setup fails before any
    // command logic runs.
    let config = load_config().context("Failed to load configuration")?;
    let creds = config.auth.resolve()?;
    debug!("Configuration loaded successfully");

    let client = HabiticaClient::new(&creds, Duration::from_secs(config.api.timeout_seconds))?;

    match commands::run(cli.command, ctx, &config, &client, cli.difficulty).await {
        Ok(()) => Ok(()),
        Err(e) => {
            let formatted = errors::format_error(&e);
            eprintln!("Error: {formatted}");
            std::process::exit(1);
        }
    }
}
