//! Snapshot diffing.
//!
//! [`diff_snapshots`] subtracts one snapshot from another element-wise.
//!
//! Skills present in only one snapshot are compared against level 1 / 0 XP.
//! Activities present in only one snapshot are compared against a score of 0:
//! here "never attempted" and zero are the same thing, unlike requirement
//! evaluation where a missing activity score is unknown.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeSet;

use super::snapshot::ProgressSnapshot;
use crate::skills::Skill;

/// Change in one skill between two snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillDelta {
    pub skill: Skill,
    pub previous_level: u32,
    pub current_level: u32,
    pub level_delta: i64,
    pub previous_xp: u64,
    pub current_xp: u64,
    pub xp_delta: i64,
}

impl SkillDelta {
    pub fn is_changed(&self) -> bool {
        self.level_delta != 0 || self.xp_delta != 0
    }
}

/// Change in one activity score between two snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDelta {
    pub activity: String,
    pub previous: i64,
    pub current: i64,
    pub delta: i64,
}

/// The element-wise difference between two snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressDiff {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
    pub elapsed_seconds: i64,
    pub total_level_delta: i64,
    pub total_xp_delta: i64,
    pub combat_level_delta: i64,
    /// One entry per skill in the enumeration, in hiscores order.
    pub skills: Vec<SkillDelta>,
    /// One entry per activity key in either snapshot, sorted by key.
    pub activities: Vec<ActivityDelta>,
}

impl ProgressDiff {
    pub fn skill(&self, skill: Skill) -> Option<&SkillDelta> {
        self.skills.iter().find(|d| d.skill == skill)
    }

    pub fn activity(&self, key: &str) -> Option<&ActivityDelta> {
        self.activities.iter().find(|d| d.activity == key)
    }

    /// Skills whose level or XP moved.
    pub fn gained_skills(&self) -> Vec<&SkillDelta> {
        self.skills.iter().filter(|d| d.is_changed()).collect()
    }

    /// Activities whose score moved.
    pub fn changed_activities(&self) -> Vec<&ActivityDelta> {
        self.activities.iter().filter(|d| d.delta != 0).collect()
    }

    /// Sum of per-skill XP deltas.
    pub fn skills_xp_delta(&self) -> i64 {
        self.skills.iter().map(|d| d.xp_delta).sum()
    }
}

fn signed(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Compute the difference `current - previous`.
pub fn diff_snapshots(previous: &ProgressSnapshot, current: &ProgressSnapshot) -> ProgressDiff {
    let before = previous.skill_map();
    let after = current.skill_map();

    let skills = Skill::ALL
        .into_iter()
        .map(|skill| {
            let prev = before.get(&skill).copied().unwrap_or_default();
            let curr = after.get(&skill).copied().unwrap_or_default();
            SkillDelta {
                skill,
                previous_level: prev.level,
                current_level: curr.level,
                level_delta: i64::from(curr.level) - i64::from(prev.level),
                previous_xp: prev.xp,
                current_xp: curr.xp,
                xp_delta: signed(curr.xp) - signed(prev.xp),
            }
        })
        .collect();

    let keys: BTreeSet<&String> = previous
        .activities
        .keys()
        .chain(current.activities.keys())
        .collect();
    let activities = keys
        .into_iter()
        .map(|key| {
            let prev = previous.activities.get(key).copied().unwrap_or(0);
            let curr = current.activities.get(key).copied().unwrap_or(0);
            ActivityDelta {
                activity: key.clone(),
                previous: prev,
                current: curr,
                delta: curr.saturating_sub(prev),
            }
        })
        .collect();

    ProgressDiff {
        from: previous.captured_at,
        to: current.captured_at,
        elapsed_seconds: current
            .captured_at
            .signed_duration_since(previous.captured_at)
            .num_seconds(),
        total_level_delta: signed(current.normalized_total_level())
            - signed(previous.normalized_total_level()),
        total_xp_delta: signed(current.normalized_total_xp())
            - signed(previous.normalized_total_xp()),
        combat_level_delta: i64::from(current.normalized_combat_level())
            - i64::from(previous.normalized_combat_level()),
        skills,
        activities,
    }
}

/// The earliest snapshot captured at or after `since`.
///
/// Used as the baseline for "gains over the last N days" summaries.
pub fn baseline_since(
    snapshots: &[ProgressSnapshot],
    since: DateTime<Utc>,
) -> Option<&ProgressSnapshot> {
    snapshots
        .iter()
        .filter(|s| s.captured_at >= since)
        .min_by_key(|s| s.captured_at)
}

/// The most recently captured snapshot.
pub fn latest(snapshots: &[ProgressSnapshot]) -> Option<&ProgressSnapshot> {
    snapshots.iter().max_by_key(|s| s.captured_at)
}
