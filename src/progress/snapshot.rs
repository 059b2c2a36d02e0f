//! Progress snapshots.
//!
//! A [`ProgressSnapshot`] is a point-in-time capture of a character's
//! totals, per-skill stats and activity scores. Snapshots are immutable once
//! written. Raw numbers are kept as captured and normalized on read:
//! non-finite or sub-1 levels read as 1, non-finite or negative XP reads as 0,
//! and skills missing from the list read as level 1 / 0 XP.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::combat::{calculate_combat_level, normalize_level, CombatStats};
use crate::document::{read_document, DocumentError};
use crate::error::{Result, RunetrackError};
use crate::skills::Skill;

/// Stats for one skill in a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillSnapshot {
    pub skill: Skill,
    pub level: f64,
    #[serde(default)]
    pub xp: f64,
    /// Hiscores rank; absent or negative when unranked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<i64>,
}

impl SkillSnapshot {
    pub fn new(skill: Skill, level: u32, xp: u64) -> Self {
        Self {
            skill,
            level: f64::from(level),
            xp: xp as f64,
            rank: None,
        }
    }

    pub fn normalized_level(&self) -> u32 {
        normalize_level(self.level) as u32
    }

    pub fn normalized_xp(&self) -> u64 {
        normalize_xp(self.xp)
    }
}

/// Clamp an XP (or other count) input to a non-negative integer.
pub fn normalize_xp(value: f64) -> u64 {
    if !value.is_finite() || value < 0.0 {
        0
    } else {
        value.floor() as u64
    }
}

/// A captured level/XP pair after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillValue {
    pub level: u32,
    pub xp: u64,
}

impl Default for SkillValue {
    fn default() -> Self {
        Self { level: 1, xp: 0 }
    }
}

/// A point-in-time capture of a character's progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSnapshot {
    pub captured_at: DateTime<Utc>,
    #[serde(default)]
    pub total_level: f64,
    #[serde(default)]
    pub total_xp: f64,
    #[serde(default)]
    pub combat_level: f64,
    #[serde(default)]
    pub skills: Vec<SkillSnapshot>,
    #[serde(default)]
    pub activities: BTreeMap<String, i64>,
}

impl ProgressSnapshot {
    /// Create an empty snapshot captured at the given time.
    pub fn new(captured_at: DateTime<Utc>) -> Self {
        Self {
            captured_at,
            total_level: 0.0,
            total_xp: 0.0,
            combat_level: 0.0,
            skills: Vec::new(),
            activities: BTreeMap::new(),
        }
    }

    /// Add or replace a skill entry.
    pub fn with_skill(mut self, skill: Skill, level: u32, xp: u64) -> Self {
        self.skills.retain(|s| s.skill != skill);
        self.skills.push(SkillSnapshot::new(skill, level, xp));
        self
    }

    pub fn with_activity(mut self, key: impl Into<String>, score: i64) -> Self {
        self.activities.insert(key.into(), score);
        self
    }

    pub fn with_totals(mut self, total_level: u32, total_xp: u64, combat_level: u32) -> Self {
        self.total_level = f64::from(total_level);
        self.total_xp = total_xp as f64;
        self.combat_level = f64::from(combat_level);
        self
    }

    /// Normalized stats for every skill in the enumeration.
    ///
    /// Skills missing from the capture read as level 1 / 0 XP. When a skill
    /// appears more than once the last entry wins.
    pub fn skill_map(&self) -> BTreeMap<Skill, SkillValue> {
        let mut map: BTreeMap<Skill, SkillValue> = Skill::ALL
            .into_iter()
            .map(|s| (s, SkillValue::default()))
            .collect();
        for entry in &self.skills {
            map.insert(
                entry.skill,
                SkillValue {
                    level: entry.normalized_level(),
                    xp: entry.normalized_xp(),
                },
            );
        }
        map
    }

    /// Normalized levels for the skills actually present in the capture.
    pub fn captured_levels(&self) -> BTreeMap<Skill, u32> {
        self.skills
            .iter()
            .map(|s| (s.skill, s.normalized_level()))
            .collect()
    }

    pub fn skill_level(&self, skill: Skill) -> u32 {
        self.skills
            .iter()
            .rev()
            .find(|s| s.skill == skill)
            .map(SkillSnapshot::normalized_level)
            .unwrap_or(1)
    }

    pub fn skill_xp(&self, skill: Skill) -> u64 {
        self.skills
            .iter()
            .rev()
            .find(|s| s.skill == skill)
            .map(SkillSnapshot::normalized_xp)
            .unwrap_or(0)
    }

    pub fn normalized_total_level(&self) -> u64 {
        normalize_xp(self.total_level)
    }

    pub fn normalized_total_xp(&self) -> u64 {
        normalize_xp(self.total_xp)
    }

    pub fn normalized_combat_level(&self) -> u32 {
        normalize_level(self.combat_level) as u32
    }

    /// Combat level derived from the captured skills rather than the stored total.
    pub fn computed_combat_level(&self) -> u32 {
        let map = self.skill_map();
        let stats = CombatStats::from_levels(|skill| map.get(&skill).map(|v| v.level))
            .unwrap_or_else(CombatStats::minimum);
        calculate_combat_level(&stats)
    }
}

/// Load a single snapshot from a JSON or YAML file.
pub fn load_snapshot(path: &Path) -> Result<ProgressSnapshot> {
    read_document(path).map_err(|e| match e {
        DocumentError::NotFound => RunetrackError::SnapshotNotFound {
            path: path.to_path_buf(),
        },
        DocumentError::Io(e) => RunetrackError::Io(e),
        DocumentError::Parse(message) => RunetrackError::SnapshotParseError {
            path: path.to_path_buf(),
            message,
        },
    })
}

/// Load every snapshot file in a directory, oldest first.
pub fn load_snapshot_dir(dir: &Path) -> Result<Vec<ProgressSnapshot>> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| matches!(e, "json" | "yml" | "yaml"))
        })
        .collect();
    paths.sort();

    let mut snapshots = paths
        .iter()
        .map(|p| load_snapshot(p))
        .collect::<Result<Vec<_>>>()?;
    snapshots.sort_by_key(|s| s.captured_at);

    tracing::debug!(
        "Loaded {} snapshot(s) from {}",
        snapshots.len(),
        dir.display()
    );
    Ok(snapshots)
}
