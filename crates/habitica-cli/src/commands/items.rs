// SPDX-License-Identifier: Apache-2.0

//! Inventory commands: item listing and the feed / hatch / sell loops.
//!
//! The loops print their progress as it happens; each line corresponds to
//! one settled remote mutation (or an advisory skip).

use anyhow::Result;
use console::style;
use habitica_core::{
    HabiticaApi, HabiticaClient, Items, feed_all, hatch_all, sell_potions,
};

use super::maybe_spinner;
use crate::cli::OutputContext;
use crate::output::render_stable_event;

/// Show inventory categories, or the nonzero items of one category.
pub async fn item(
    client: &HabiticaClient,
    ctx: &OutputContext,
    category: Option<String>,
) -> Result<()> {
    let spinner = maybe_spinner(ctx, "Fetching inventory...");
    let user = client.user().await?;
    if let Some(s) = spinner {
        s.finish_and_clear();
    }

    match category {
        None => {
            for name in Items::category_names() {
                println!("{name}");
            }
        }
        Some(name) => match user.items.category(&name) {
            Some(counts) => {
                for (item, &count) in counts {
                    if count > 0 {
                        println!("{count} {item}");
                    }
                }
            }
            None => {
                println!(
                    "{}",
                    style(format!("Unknown item category: {name}")).yellow()
                );
            }
        },
    }
    Ok(())
}

/// Feed all held food to the best-matching pets.
pub async fn feed(client: &HabiticaClient) -> Result<()> {
    feed_all(client, |event| render_stable_event(&event)).await?;
    Ok(())
}

/// Hatch everything hatchable, then sell surplus eggs.
pub async fn hatch(client: &HabiticaClient) -> Result<()> {
    hatch_all(client, |event| render_stable_event(&event)).await?;
    Ok(())
}

/// Sell all held potions of the requested variants.
pub async fn sell(client: &HabiticaClient, kinds: &[String]) -> Result<()> {
    sell_potions(client, kinds, |event| render_stable_event(&event)).await?;
    Ok(())
}
