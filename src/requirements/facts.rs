//! Character facts: the known state requirements are evaluated against.
//!
//! [`CharacterFacts`] is a transient projection assembled per evaluation by
//! [`FactsBuilder`] from a progress snapshot, an external sync document and
//! manual overrides. It is never persisted as its own entity.
//!
//! Every category is a map, and a missing key means "not known". A key
//! mapped to `false` means "known not done".

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::document::{read_document, DocumentError};
use crate::error::{Result, RunetrackError};
use crate::progress::ProgressSnapshot;
use crate::requirements::model::DiaryTier;
use crate::skills::Skill;

/// Composite key for a diary tier: `diaryId:tier`.
pub fn diary_key(diary_id: &str, tier: DiaryTier) -> String {
    format!("{}:{}", diary_id, tier.as_str())
}

/// Composite key for a diary task: `diaryId:tier:taskId`.
pub fn diary_task_key(diary_id: &str, tier: DiaryTier, task_id: &str) -> String {
    format!("{}:{}:{}", diary_id, tier.as_str(), task_id)
}

/// Everything known about a character.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CharacterFacts {
    pub skill_levels: BTreeMap<Skill, u32>,
    pub quests: BTreeMap<String, bool>,
    /// Keyed by [`diary_key`].
    pub diaries: BTreeMap<String, bool>,
    /// Keyed by [`diary_task_key`].
    pub diary_tasks: BTreeMap<String, bool>,
    pub activities: BTreeMap<String, i64>,
    /// Keyed by achievement id or by numeric task id.
    pub combat_achievements: BTreeMap<String, bool>,
    pub unlocks: BTreeMap<String, bool>,
    pub items: BTreeMap<String, bool>,
    /// User-asserted answers to manual checks.
    pub manual_checks: BTreeMap<String, bool>,
}

impl CharacterFacts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn skill_level(&self, skill: Skill) -> Option<u32> {
        self.skill_levels.get(&skill).copied()
    }

    pub fn quest(&self, quest_id: &str) -> Option<bool> {
        self.quests.get(quest_id).copied()
    }

    pub fn diary(&self, diary_id: &str, tier: DiaryTier) -> Option<bool> {
        self.diaries.get(&diary_key(diary_id, tier)).copied()
    }

    pub fn diary_task(&self, diary_id: &str, tier: DiaryTier, task_id: &str) -> Option<bool> {
        self.diary_tasks
            .get(&diary_task_key(diary_id, tier, task_id))
            .copied()
    }

    pub fn activity(&self, key: &str) -> Option<i64> {
        self.activities.get(key).copied()
    }

    /// Look up a combat achievement by id, falling back to its numeric task id.
    pub fn combat_achievement(&self, achievement_id: &str, task_id: Option<u32>) -> Option<bool> {
        self.combat_achievements
            .get(achievement_id)
            .copied()
            .or_else(|| {
                task_id.and_then(|id| self.combat_achievements.get(&id.to_string()).copied())
            })
    }

    pub fn unlock(&self, flag_id: &str) -> Option<bool> {
        self.unlocks.get(flag_id).copied()
    }

    pub fn item(&self, item_id: &str) -> Option<bool> {
        self.items.get(item_id).copied()
    }

    pub fn manual_check(&self, key: &str) -> Option<bool> {
        self.manual_checks.get(key).copied()
    }

    pub fn with_skill(mut self, skill: Skill, level: u32) -> Self {
        self.skill_levels.insert(skill, level);
        self
    }

    pub fn with_quest(mut self, quest_id: impl Into<String>, complete: bool) -> Self {
        self.quests.insert(quest_id.into(), complete);
        self
    }

    pub fn with_diary(mut self, diary_id: &str, tier: DiaryTier, complete: bool) -> Self {
        self.diaries.insert(diary_key(diary_id, tier), complete);
        self
    }

    pub fn with_diary_task(
        mut self,
        diary_id: &str,
        tier: DiaryTier,
        task_id: &str,
        complete: bool,
    ) -> Self {
        self.diary_tasks
            .insert(diary_task_key(diary_id, tier, task_id), complete);
        self
    }

    pub fn with_activity(mut self, key: impl Into<String>, score: i64) -> Self {
        self.activities.insert(key.into(), score);
        self
    }

    pub fn with_combat_achievement(mut self, key: impl Into<String>, complete: bool) -> Self {
        self.combat_achievements.insert(key.into(), complete);
        self
    }

    pub fn with_unlock(mut self, flag_id: impl Into<String>, unlocked: bool) -> Self {
        self.unlocks.insert(flag_id.into(), unlocked);
        self
    }

    pub fn with_item(mut self, item_id: impl Into<String>, owned: bool) -> Self {
        self.items.insert(item_id.into(), owned);
        self
    }

    pub fn with_manual_check(mut self, key: impl Into<String>, confirmed: bool) -> Self {
        self.manual_checks.insert(key.into(), confirmed);
        self
    }

    /// Layer another fact set on top of this one. Keys in `overlay` win.
    pub fn overlay(&mut self, overlay: &CharacterFacts) {
        self.skill_levels.extend(overlay.skill_levels.iter());
        extend(&mut self.quests, &overlay.quests);
        extend(&mut self.diaries, &overlay.diaries);
        extend(&mut self.diary_tasks, &overlay.diary_tasks);
        self.activities
            .extend(overlay.activities.iter().map(|(k, v)| (k.clone(), *v)));
        extend(&mut self.combat_achievements, &overlay.combat_achievements);
        extend(&mut self.unlocks, &overlay.unlocks);
        extend(&mut self.items, &overlay.items);
        extend(&mut self.manual_checks, &overlay.manual_checks);
    }

    /// Total number of known facts across all categories.
    pub fn len(&self) -> usize {
        self.skill_levels.len()
            + self.quests.len()
            + self.diaries.len()
            + self.diary_tasks.len()
            + self.activities.len()
            + self.combat_achievements.len()
            + self.unlocks.len()
            + self.items.len()
            + self.manual_checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn extend(target: &mut BTreeMap<String, bool>, source: &BTreeMap<String, bool>) {
    target.extend(source.iter().map(|(k, v)| (k.clone(), *v)));
}

/// The on-disk fact source document.
///
/// ```yaml
/// snapshot:            # latest progress snapshot (optional)
///   capturedAt: 2026-01-22T10:00:00Z
///   skills: [{ skill: attack, level: 60, xp: 273742 }]
/// sync:                # external sync enrichment (optional)
///   quests: { cooks_assistant: true }
/// overrides:           # manual overrides, highest priority (optional)
///   manualChecks: { "Bring a light source": true }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FactSources {
    pub snapshot: Option<ProgressSnapshot>,
    pub sync: CharacterFacts,
    pub overrides: CharacterFacts,
}

impl FactSources {
    /// Assemble the facts this document describes.
    pub fn build(&self) -> CharacterFacts {
        let mut builder = FactsBuilder::new();
        if let Some(snapshot) = &self.snapshot {
            builder = builder.snapshot(snapshot);
        }
        builder.sync(&self.sync).overrides(&self.overrides).build()
    }
}

/// Load a fact source document from a JSON or YAML file.
pub fn load_fact_sources(path: &Path) -> Result<FactSources> {
    read_document(path).map_err(|e| match e {
        DocumentError::NotFound => RunetrackError::FactsNotFound {
            path: path.to_path_buf(),
        },
        DocumentError::Io(e) => RunetrackError::Io(e),
        DocumentError::Parse(message) => RunetrackError::FactsParseError {
            path: path.to_path_buf(),
            message,
        },
    })
}

/// Assembles [`CharacterFacts`] from layered sources.
///
/// Priority, lowest first: snapshot, sync enrichment, manual overrides.
/// Layers are applied in that order regardless of call order.
#[derive(Debug, Default)]
pub struct FactsBuilder<'a> {
    snapshot: Option<&'a ProgressSnapshot>,
    sync: Vec<&'a CharacterFacts>,
    overrides: Vec<&'a CharacterFacts>,
}

impl<'a> FactsBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a progress snapshot for skill levels and activity scores.
    pub fn snapshot(mut self, snapshot: &'a ProgressSnapshot) -> Self {
        self.snapshot = Some(snapshot);
        self
    }

    /// Add external sync enrichment.
    pub fn sync(mut self, facts: &'a CharacterFacts) -> Self {
        self.sync.push(facts);
        self
    }

    /// Add user-asserted overrides.
    pub fn overrides(mut self, facts: &'a CharacterFacts) -> Self {
        self.overrides.push(facts);
        self
    }

    pub fn build(self) -> CharacterFacts {
        let mut facts = CharacterFacts::new();

        if let Some(snapshot) = self.snapshot {
            // Only captured skills become facts; an absent skill stays unknown.
            facts.skill_levels = snapshot.captured_levels();
            facts.activities = snapshot.activities.clone();
        }
        for layer in self.sync {
            facts.overlay(layer);
        }
        for layer in self.overrides {
            facts.overlay(layer);
        }
        for level in facts.skill_levels.values_mut() {
            *level = (*level).max(1);
        }

        tracing::debug!("Assembled {} fact(s)", facts.len());
        facts
    }
}
