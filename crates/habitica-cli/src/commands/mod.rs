// SPDX-License-Identifier: Apache-2.0

//! Command handlers for the Habitica CLI.

pub mod items;
pub mod server;
pub mod status;
pub mod tasks;

use std::time::Duration;

use anyhow::Result;
use habitica_core::{AppConfig, FixedDelay, HabiticaClient};
use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::{Commands, Difficulty, OutputContext};

/// Creates a styled spinner (only if interactive).
fn maybe_spinner(ctx: &OutputContext, message: &str) -> Option<ProgressBar> {
    if ctx.is_interactive() {
        let s = ProgressBar::new_spinner();
        s.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("Invalid spinner template"),
        );
        s.set_message(message.to_string());
        s.enable_steady_tick(Duration::from_millis(100));
        Some(s)
    } else {
        None
    }
}

/// Dispatch to the appropriate command handler.
pub async fn run(
    command: Commands,
    ctx: OutputContext,
    config: &AppConfig,
    client: &HabiticaClient,
    difficulty: Difficulty,
) -> Result<()> {
    // One limiter per invocation: the gap applies across every mutating
    // task call the command makes.
    let mut wait = FixedDelay::from_millis(config.api.request_wait_ms);

    match command {
        Commands::Status => status::run(client, &ctx).await,
        Commands::Habits { action } => tasks::habits(client, &mut wait, action).await,
        Commands::Dailies { action } => tasks::dailies(client, &mut wait, action).await,
        Commands::Todos { action } => {
            tasks::todos(client, &mut wait, action, difficulty).await
        }
        Commands::Server => server::status(client).await,
        Commands::Home => server::home(config),
        Commands::Item { category } => items::item(client, &ctx, category).await,
        Commands::Feed => items::feed(client).await,
        Commands::Hatch => items::hatch(client).await,
        Commands::Sell { kinds } => items::sell(client, &kinds).await,
    }
}
