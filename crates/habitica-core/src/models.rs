// SPDX-License-Identifier: Apache-2.0

//! Typed records for the Habitica API shapes this client consumes.
//!
//! Responses are dictionary-shaped JSON on the wire; only the fields the
//! client actually reads are modeled, everything else is ignored. Fields
//! that may be absent are `Option` so callers validate presence explicitly
//! instead of panicking on a missing key.
//!
//! Inventory maps use `BTreeMap` deliberately: the batch convergence loops
//! scan them in a fixed deterministic (lexicographic) order, which keeps
//! every run of the same snapshot picking the same next mutation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The three task variants, distinguished by recurrence semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// No completion state; scored up or down repeatedly.
    Habit,
    /// Resets each cycle.
    Daily,
    /// One-shot.
    Todo,
}

impl TaskKind {
    /// Value of the `type` query parameter for task listing.
    #[must_use]
    pub fn api_value(self) -> &'static str {
        match self {
            TaskKind::Habit => "habits",
            TaskKind::Daily => "dailys",
            TaskKind::Todo => "todos",
        }
    }
}

/// Direction for scoring a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Positive score (habit `+`, daily/todo completion).
    Up,
    /// Negative score (habit `-`).
    Down,
}

impl Direction {
    /// Path segment used by the score endpoint.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// A single task as returned by the tasks endpoint.
///
/// `id` is the durable server-assigned key; the position in a task list
/// is ephemeral and display-only.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Task {
    /// Server-assigned task id.
    pub id: String,
    /// Task description.
    pub text: String,
    /// Completion state (dailies and todos; absent for habits).
    #[serde(default)]
    pub completed: bool,
    /// Running task value used for qualitative scoring.
    #[serde(default)]
    pub value: f64,
    /// Priority multiplier (1, 1.5 or 2).
    #[serde(default = "default_priority")]
    pub priority: f64,
}

fn default_priority() -> f64 {
    1.0
}

/// User stats block.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Stats {
    /// Character level.
    pub lvl: i64,
    /// Character class (warrior, rogue, ...).
    #[serde(rename = "class")]
    pub class_name: String,
    /// Current health.
    pub hp: f64,
    /// Maximum health.
    #[serde(rename = "maxHealth")]
    pub max_health: f64,
    /// Experience toward the next level.
    pub exp: f64,
    /// Experience required for the next level.
    #[serde(rename = "toNextLevel")]
    pub to_next_level: f64,
    /// Current mana.
    pub mp: f64,
    /// Maximum mana.
    #[serde(rename = "maxMP")]
    pub max_mp: f64,
    /// Gold (fractional part is silver).
    pub gp: f64,
}

/// Inventory snapshot.
///
/// Refreshed wholesale from each batch-update response; never partially
/// trusted across loop iterations. Pet values are fed-levels 0-5 with -1
/// meaning "not yet hatched"; mount values are 0/1 flags.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Items {
    /// Food name to held count.
    pub food: BTreeMap<String, i64>,
    /// Pet name (`Egg-Color`) to fed-level.
    pub pets: BTreeMap<String, i64>,
    /// Mount name to owned flag.
    pub mounts: BTreeMap<String, i64>,
    /// Egg type to held count.
    pub eggs: BTreeMap<String, i64>,
    /// Hatching potion color to held count.
    #[serde(rename = "hatchingPotions")]
    pub hatching_potions: BTreeMap<String, i64>,
    /// Currently equipped pet, if any.
    #[serde(rename = "currentPet")]
    pub current_pet: Option<String>,
    /// Currently equipped mount, if any.
    #[serde(rename = "currentMount")]
    pub current_mount: Option<String>,
}

impl Items {
    /// Names of the countable inventory categories, in display order.
    #[must_use]
    pub fn category_names() -> &'static [&'static str] {
        &["food", "pets", "mounts", "eggs", "hatchingPotions"]
    }

    /// Look up a countable category by its wire name.
    #[must_use]
    pub fn category(&self, name: &str) -> Option<&BTreeMap<String, i64>> {
        match name {
            "food" => Some(&self.food),
            "pets" => Some(&self.pets),
            "mounts" => Some(&self.mounts),
            "eggs" => Some(&self.eggs),
            "hatchingPotions" => Some(&self.hatching_potions),
            _ => None,
        }
    }
}

/// The slice of the user record this client consumes.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct User {
    /// Stats block.
    pub stats: Stats,
    /// Inventory snapshot.
    pub items: Items,
}

/// Server status response.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerStatus {
    /// `"up"` when the service is healthy.
    pub status: String,
}

impl ServerStatus {
    /// Whether the service reported itself healthy.
    #[must_use]
    pub fn is_up(&self) -> bool {
        self.status == "up"
    }
}

/// Party record (quest fields only).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Party {
    /// Active quest state, if the party has one.
    pub quest: Option<PartyQuest>,
}

/// Quest state embedded in the party record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PartyQuest {
    /// Whether the quest is currently active.
    pub active: bool,
    /// Quest content key.
    pub key: Option<String>,
    /// Party-wide progress.
    pub progress: Option<QuestProgress>,
}

/// Party quest progress.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct QuestProgress {
    /// Collected counts per objective (collect quests).
    pub collect: BTreeMap<String, CollectProgress>,
    /// Remaining boss hp (hp quests).
    pub hp: Option<f64>,
}

/// Progress on a single collect objective.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectProgress {
    /// Items collected so far.
    pub count: f64,
}

/// The slice of `/content` this client consumes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Content {
    /// Quest metadata keyed by quest key.
    pub quests: BTreeMap<String, QuestContent>,
}

/// Static metadata for one quest.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct QuestContent {
    /// Quest title.
    pub text: String,
    /// Collect objectives, present for collect quests.
    pub collect: Option<BTreeMap<String, CollectObjective>>,
    /// Boss block, present for hp quests.
    pub boss: Option<Boss>,
}

/// One collect objective from quest content.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectObjective {
    /// Total items the party must gather.
    pub count: f64,
}

/// Boss block from quest content.
#[derive(Debug, Clone, Deserialize)]
pub struct Boss {
    /// Starting hp of the boss.
    pub hp: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_defaults_fill_missing_fields() {
        let task: Task =
            serde_json::from_str(r#"{"id": "abc", "text": "Floss"}"#).expect("task parses");
        assert!(!task.completed);
        assert!((task.value - 0.0).abs() < f64::EPSILON);
        assert!((task.priority - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn items_parse_renamed_fields() {
        let items: Items = serde_json::from_str(
            r#"{"hatchingPotions": {"Base": 2}, "currentPet": "Wolf-Base"}"#,
        )
        .expect("items parse");
        assert_eq!(items.hatching_potions.get("Base"), Some(&2));
        assert_eq!(items.current_pet.as_deref(), Some("Wolf-Base"));
    }

    #[test]
    fn items_category_lookup() {
        let items = Items::default();
        assert!(items.category("food").is_some());
        assert!(items.category("hatchingPotions").is_some());
        assert!(items.category("gear").is_none());
    }

    #[test]
    fn task_kind_api_values() {
        assert_eq!(TaskKind::Habit.api_value(), "habits");
        assert_eq!(TaskKind::Daily.api_value(), "dailys");
        assert_eq!(TaskKind::Todo.api_value(), "todos");
    }

    #[test]
    fn quest_content_shapes() {
        let content: Content = serde_json::from_str(
            r#"{"quests": {
                "vice1": {"text": "Vice, Part 1", "boss": {"hp": 750}},
                "evilsanta2": {"text": "Find the Cub",
                               "collect": {"branches": {"count": 10},
                                           "tracks": {"count": 20}}}
            }}"#,
        )
        .expect("content parses");
        let vice = &content.quests["vice1"];
        assert!((vice.boss.as_ref().expect("boss").hp - 750.0).abs() < f64::EPSILON);
        let santa = &content.quests["evilsanta2"];
        let collect = santa.collect.as_ref().expect("collect");
        // BTreeMap iteration starts at the lexicographically smallest key.
        let first = collect.iter().next().expect("objective");
        assert_eq!(first.0, "branches");
    }
}
