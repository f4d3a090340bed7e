// SPDX-License-Identifier: Apache-2.0

//! Output rendering for CLI commands.
//!
//! Command handlers gather data; this module handles presentation.
//! Everything is human-readable text on stdout.

use console::style;
use habitica_core::{StableEvent, Task, qualitative_score};

/// Checklist rendering for dailies and todos, with 1-based display ids.
pub fn render_task_list(tasks: &[Task]) {
    for (i, task) in tasks.iter().enumerate() {
        let completed = if task.completed { "x" } else { " " };
        println!("[{completed}] {} {}", i + 1, task.text);
    }
}

/// Habit rendering: the qualitative star score instead of a checkbox.
pub fn render_habit_list(tasks: &[Task]) {
    for (i, task) in tasks.iter().enumerate() {
        let score = qualitative_score(task.value);
        println!("[{score}] {} {}", i + 1, task.text);
    }
}

/// The assembled status block.
pub struct StatusReport {
    /// `Level N Class` header.
    pub title: String,
    /// `hp/maxHealth`.
    pub health: String,
    /// `exp/toNextLevel`.
    pub xp: String,
    /// `mp/maxMP`.
    pub mana: String,
    /// Gold, silver and gems.
    pub currency: String,
    /// Current pet with food-item count.
    pub pet: String,
    /// Current mount.
    pub mount: String,
    /// Quest progress line.
    pub quest: String,
}

/// Render the status block with a ruled header and aligned labels.
pub fn render_status(report: &StatusReport) {
    let rows = [
        ("Health:", &report.health),
        ("XP:", &report.xp),
        ("Mana:", &report.mana),
        ("Currency:", &report.currency),
        ("Pet:", &report.pet),
        ("Mount:", &report.mount),
        ("Quest:", &report.quest),
    ];
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

    let rule = "-".repeat(report.title.len());
    println!("{rule}");
    println!("{}", style(&report.title).bold());
    println!("{rule}");
    for (label, value) in rows {
        println!("{label:>width$} {value}");
    }
}

/// Print one progress event from the feed/hatch/sell loops.
pub fn render_stable_event(event: &StableEvent) {
    match event {
        StableEvent::UnknownFood { food } => {
            println!("{}", style(format!("Unknown food: {food}")).yellow());
        }
        StableEvent::Fed { pet, food } => {
            println!("Feeding {food} to {}", pet_display_name(pet));
        }
        StableEvent::Hatched { egg, potion } => {
            println!("Hatching a {potion} {egg}");
        }
        StableEvent::EggAccounting {
            egg,
            have,
            need,
            wanted,
        } => {
            let detail = if wanted.is_empty() {
                String::new()
            } else {
                format!(" ({})", wanted.join(", "))
            };
            println!("{egg}: need {need}{detail} of {have}");
        }
        StableEvent::SoldEggs { egg, count } => {
            println!("Selling {count} {egg} egg{}", plural(*count));
        }
        StableEvent::UnknownPotion { kind } => {
            println!(
                "{}",
                style(format!("{kind} isn't a valid kind of potion.")).yellow()
            );
        }
        StableEvent::NoPotionsHeld { kind } => {
            println!("No {kind} potions held.");
        }
        StableEvent::SoldPotions { kind, count } => {
            println!("Selling {count} {kind} potion{}", plural(*count));
        }
    }
}

/// `Wolf-Base` reads better as `Base Wolf`.
fn pet_display_name(pet: &str) -> String {
    let mut parts: Vec<&str> = pet.split('-').collect();
    parts.reverse();
    parts.join(" ")
}

fn plural(count: i64) -> &'static str {
    if count == 1 { "" } else { "s" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pet_names_reverse_around_the_dash() {
        assert_eq!(pet_display_name("Wolf-Base"), "Base Wolf");
        assert_eq!(pet_display_name("TigerCub-CottonCandyPink"), "CottonCandyPink TigerCub");
    }

    #[test]
    fn plural_suffix() {
        assert_eq!(plural(1), "");
        assert_eq!(plural(2), "s");
        assert_eq!(plural(0), "s");
    }
}
