// SPDX-License-Identifier: Apache-2.0

//! Service status and browser shortcuts.

use anyhow::{Context, Result};
use habitica_core::{AppConfig, DEFAULT_URL, HabiticaApi, HabiticaClient};

/// Path of the tasks page relative to the service URL.
const TASKS_PAGE: &str = "/#/tasks";

/// Report whether the Habitica service is up.
pub async fn status(client: &HabiticaClient) -> Result<()> {
    let server = client.server_status().await?;
    if server.is_up() {
        println!("Habitica server is up");
    } else {
        println!("Habitica server down... or your computer cannot connect");
    }
    Ok(())
}

/// Open the tasks page in the default browser.
pub fn home(config: &AppConfig) -> Result<()> {
    let base = config
        .auth
        .url
        .clone()
        .unwrap_or_else(|| DEFAULT_URL.to_string());
    let home_url = format!("{}{TASKS_PAGE}", base.trim_end_matches('/'));
    println!("Opening {home_url}");
    open::that(&home_url).with_context(|| format!("Failed to open {home_url}"))?;
    Ok(())
}
