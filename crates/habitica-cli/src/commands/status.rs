// SPDX-License-Identifier: Apache-2.0

//! The status command: level, vitals, currency, stable and quest.

use anyhow::Result;
use habitica_core::{HabiticaApi, HabiticaClient, quest_cache_path, quest_summary};

use super::maybe_spinner;
use crate::cli::OutputContext;
use crate::output::{self, StatusReport};

/// Gather and render the status block.
#[allow(clippy::cast_possible_truncation)]
pub async fn run(client: &HabiticaClient, ctx: &OutputContext) -> Result<()> {
    let spinner = maybe_spinner(ctx, "Fetching status...");
    let user = client.user().await?;
    let party = client.party().await?;
    let quest = quest_summary(client, party.as_ref(), &quest_cache_path()).await?;
    if let Some(s) = spinner {
        s.finish_and_clear();
    }

    let stats = &user.stats;
    let items = &user.items;
    let food_count: i64 = items.food.values().sum();

    let gold = stats.gp.trunc();
    let silver = ((stats.gp - gold) * 100.0) as i64;

    let report = StatusReport {
        title: format!("Level {} {}", stats.lvl, capitalize(&stats.class_name)),
        health: format!("{}/{}", stats.hp as i64, stats.max_health as i64),
        xp: format!("{}/{}", stats.exp as i64, stats.to_next_level as i64),
        mana: format!("{}/{}", stats.mp as i64, stats.max_mp as i64),
        currency: format!("Gold: {}  Silver: {silver}", gold as i64),
        pet: format!(
            "{} ({food_count} food items)",
            items.current_pet.as_deref().unwrap_or("")
        ),
        mount: items.current_mount.clone().unwrap_or_default(),
        quest,
    };
    output::render_status(&report);
    Ok(())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_class_names() {
        assert_eq!(capitalize("warrior"), "Warrior");
        assert_eq!(capitalize("rogue"), "Rogue");
        assert_eq!(capitalize(""), "");
    }
}
