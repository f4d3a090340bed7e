// SPDX-License-Identifier: Apache-2.0

//! Quest cache and quest progress summary.
//!
//! `/content` is a large download, so quest metadata (type, target, title)
//! is memoized in a TOML side file keyed by the quest key. The cache is
//! only rewritten when the party's active quest key differs from the
//! cached one; progress itself always comes from the live party record.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::api::{ApiResult, HabiticaApi};
use crate::error::HabiticaError;
use crate::models::{Party, PartyQuest};

/// Summary shown when the party has no active quest.
pub const NO_QUEST: &str = "Not currently on a quest";

/// Quest type marker for collect quests.
const TYPE_COLLECT: &str = "collect";
/// Quest type marker for boss quests.
const TYPE_HP: &str = "hp";

/// Memoized quest metadata, persisted across invocations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestCache {
    /// Key of the quest the cached fields describe; empty when unset.
    pub quest_key: String,
    /// `collect` or `hp`.
    pub quest_type: String,
    /// Target value (collect count or boss hp), kept as text for display.
    pub quest_max: String,
    /// Quest title.
    pub quest_title: String,
}

impl QuestCache {
    /// Read the cache from disk; a missing file yields the default.
    ///
    /// # Errors
    ///
    /// Returns `HabiticaError::Cache` if the file exists but cannot be
    /// read or parsed.
    pub fn load(path: &Path) -> Result<Self, HabiticaError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path).map_err(|e| cache_err(path, &e))?;
        toml::from_str(&contents).map_err(|e| cache_err(path, &e))
    }

    /// Write the cache atomically (temp file, then rename).
    ///
    /// # Errors
    ///
    /// Returns `HabiticaError::Cache` on any filesystem failure.
    pub fn store(&self, path: &Path) -> Result<(), HabiticaError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| cache_err(parent, &e))?;
        }
        let contents =
            toml::to_string_pretty(self).map_err(|e| cache_err(path, &e))?;
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, contents).map_err(|e| cache_err(&temp_path, &e))?;
        fs::rename(&temp_path, path).map_err(|e| cache_err(path, &e))?;
        Ok(())
    }
}

fn cache_err(path: &Path, err: &dyn std::fmt::Display) -> HabiticaError {
    HabiticaError::Cache {
        message: format!("{}: {err}", path.display()),
    }
}

/// Resolve the quest line for the status display.
///
/// Returns [`NO_QUEST`] when the user is not in a party or the party has
/// no active quest. Otherwise refreshes the cache if the quest key
/// changed (one `/content` fetch) and formats
/// `<progress>/<max> "<title>"` from the live party progress.
///
/// # Errors
///
/// Returns `UnexpectedShape` when the party record claims an active quest
/// but lacks the fields needed to describe it, and propagates API and
/// cache failures.
pub async fn quest_summary<A: HabiticaApi>(
    api: &A,
    party: Option<&Party>,
    cache_path: &Path,
) -> ApiResult<String> {
    let Some(quest) = party.and_then(|p| p.quest.as_ref()).filter(|q| q.active) else {
        return Ok(NO_QUEST.to_string());
    };

    let key = quest
        .key
        .as_deref()
        .ok_or_else(|| shape("party.quest.key"))?;

    let mut cache = QuestCache::load(cache_path)?;
    if cache.quest_key != key {
        info!(quest_key = key, "quest changed, refreshing quest metadata");
        cache = describe_quest(api, key).await?;
        cache.store(cache_path)?;
    } else {
        debug!(quest_key = key, "quest metadata served from cache");
    }

    #[allow(clippy::cast_possible_truncation)]
    let progress = quest_progress(quest, &cache)? as i64;
    Ok(format!(
        "{progress}/{} \"{}\"",
        cache.quest_max, cache.quest_title
    ))
}

/// Fetch `/content` and distill the metadata for one quest.
async fn describe_quest<A: HabiticaApi>(api: &A, key: &str) -> ApiResult<QuestCache> {
    let content = api.content().await?;
    let quest = content
        .quests
        .get(key)
        .ok_or_else(|| shape(&format!("content.quests.{key}")))?;

    let (quest_type, quest_max) = if let Some(collect) = &quest.collect {
        // More than one collect objective is possible in principle; pick
        // the lexicographically smallest key so the choice is stable.
        let (_, objective) = collect
            .iter()
            .next()
            .ok_or_else(|| shape(&format!("content.quests.{key}.collect")))?;
        (TYPE_COLLECT, objective.count)
    } else if let Some(boss) = &quest.boss {
        (TYPE_HP, boss.hp)
    } else {
        return Err(shape(&format!("content.quests.{key}.collect|boss")));
    };

    #[allow(clippy::cast_possible_truncation)]
    let quest_max = quest_max as i64;
    Ok(QuestCache {
        quest_key: key.to_string(),
        quest_type: quest_type.to_string(),
        quest_max: quest_max.to_string(),
        quest_title: quest.text.clone(),
    })
}

/// Read party-wide progress according to the cached quest type.
fn quest_progress(quest: &PartyQuest, cache: &QuestCache) -> ApiResult<f64> {
    let progress = quest
        .progress
        .as_ref()
        .ok_or_else(|| shape("party.quest.progress"))?;

    if cache.quest_type == TYPE_COLLECT {
        let (_, collected) = progress
            .collect
            .iter()
            .next()
            .ok_or_else(|| shape("party.quest.progress.collect"))?;
        Ok(collected.count)
    } else {
        progress
            .hp
            .ok_or_else(|| shape("party.quest.progress.hp"))
    }
}

fn shape(path: &str) -> HabiticaError {
    HabiticaError::UnexpectedShape {
        path: path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn load_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let cache = QuestCache::load(&dir.path().join("quest.toml")).unwrap();
        assert_eq!(cache.quest_key, "");
        assert_eq!(cache.quest_title, "");
    }

    #[test]
    fn store_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("quest.toml");
        let cache = QuestCache {
            quest_key: "vice1".to_string(),
            quest_type: "hp".to_string(),
            quest_max: "750".to_string(),
            quest_title: "Vice, Part 1".to_string(),
        };
        cache.store(&path).unwrap();
        assert_eq!(QuestCache::load(&path).unwrap(), cache);
        // No temp file left behind.
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn load_rejects_garbage() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("quest.toml");
        fs::write(&path, "not toml [").unwrap();
        assert!(matches!(
            QuestCache::load(&path),
            Err(HabiticaError::Cache { .. })
        ));
    }

    #[test]
    fn progress_prefers_collect_when_cached_type_says_so() {
        let quest = PartyQuest {
            active: true,
            key: Some("evilsanta2".to_string()),
            progress: Some(crate::models::QuestProgress {
                collect: [
                    ("tracks".to_string(), crate::models::CollectProgress { count: 7.0 }),
                    ("branches".to_string(), crate::models::CollectProgress { count: 3.0 }),
                ]
                .into_iter()
                .collect(),
                hp: None,
            }),
        };
        let cache = QuestCache {
            quest_type: "collect".to_string(),
            ..QuestCache::default()
        };
        // Lexicographically smallest key ("branches") wins.
        assert!((quest_progress(&quest, &cache).unwrap() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn progress_missing_shape_is_typed() {
        let quest = PartyQuest {
            active: true,
            key: Some("vice1".to_string()),
            progress: None,
        };
        let cache = QuestCache::default();
        assert!(matches!(
            quest_progress(&quest, &cache),
            Err(HabiticaError::UnexpectedShape { .. })
        ));
    }
}
