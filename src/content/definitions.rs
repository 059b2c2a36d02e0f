//! Static content definitions.
//!
//! Quests, achievement diaries, combat achievements and guides, in the
//! camelCase shape the content bundles are authored in. Definitions are
//! immutable once loaded.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::requirements::{DiaryTier, Requirement};
use crate::skills::Skill;

/// A quest and the requirements to start it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub members: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub quest_points: u32,
    #[serde(default)]
    pub requirements: Vec<Requirement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wiki_url: Option<String>,
}

/// One task inside a diary tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiaryTaskDefinition {
    pub id: String,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<Requirement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wiki_url: Option<String>,
}

/// One difficulty tier of a diary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiaryTierDefinition {
    pub tier: DiaryTier,
    pub name: String,
    #[serde(default)]
    pub requirements: Vec<Requirement>,
    #[serde(default)]
    pub tasks: Vec<DiaryTaskDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wiki_url: Option<String>,
}

/// An achievement diary for one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiaryDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub tiers: Vec<DiaryTierDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wiki_url: Option<String>,
}

impl DiaryDefinition {
    pub fn tier(&self, tier: DiaryTier) -> Option<&DiaryTierDefinition> {
        self.tiers.iter().find(|t| t.tier == tier)
    }
}

/// Combat achievement difficulty.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum CombatAchievementTier {
    Easy,
    Medium,
    Hard,
    Elite,
    Master,
    Grandmaster,
}

/// A combat achievement task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CombatAchievementDefinition {
    pub id: String,
    /// The in-game numeric task id, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<u32>,
    pub name: String,
    pub tier: CombatAchievementTier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monster: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub requirements: Vec<Requirement>,
}

/// A skill level a guide step expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatNeeded {
    pub skill: Skill,
    pub level: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Extracted metadata for a guide step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct GuideStepMeta {
    pub stats_needed: Vec<StatNeeded>,
}

/// One step of a progression guide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuideStep {
    pub step_number: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<Requirement>,
    #[serde(default)]
    pub optional_requirements: Vec<Requirement>,
    #[serde(default)]
    pub meta: GuideStepMeta,
}

impl GuideStep {
    /// Explicit requirements plus the stats the step lists as needed.
    pub fn effective_requirements(&self) -> Vec<Requirement> {
        let mut all = self.requirements.clone();
        all.extend(
            self.meta
                .stats_needed
                .iter()
                .map(|stat| Requirement::skill(stat.skill, stat.level)),
        );
        all
    }
}

/// An ordered progression guide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuideDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub steps: Vec<GuideStep>,
}

/// A set of content definitions loaded together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentBundle {
    pub quests: Vec<QuestDefinition>,
    pub diaries: Vec<DiaryDefinition>,
    pub combat_achievements: Vec<CombatAchievementDefinition>,
    pub guides: Vec<GuideDefinition>,
}

impl ContentBundle {
    pub fn quest(&self, id: &str) -> Option<&QuestDefinition> {
        self.quests.iter().find(|q| q.id == id)
    }

    pub fn diary(&self, id: &str) -> Option<&DiaryDefinition> {
        self.diaries.iter().find(|d| d.id == id)
    }

    pub fn combat_achievement(&self, id: &str) -> Option<&CombatAchievementDefinition> {
        self.combat_achievements.iter().find(|c| c.id == id)
    }

    pub fn guide(&self, id: &str) -> Option<&GuideDefinition> {
        self.guides.iter().find(|g| g.id == id)
    }

    /// Append every definition of `other`.
    pub fn merge(&mut self, other: ContentBundle) {
        self.quests.extend(other.quests);
        self.diaries.extend(other.diaries);
        self.combat_achievements.extend(other.combat_achievements);
        self.guides.extend(other.guides);
    }

    pub fn is_empty(&self) -> bool {
        self.quests.is_empty()
            && self.diaries.is_empty()
            && self.combat_achievements.is_empty()
            && self.guides.is_empty()
    }

    /// Number of diary tasks across every diary and tier.
    pub fn diary_task_count(&self) -> usize {
        self.diaries
            .iter()
            .flat_map(|d| d.tiers.iter())
            .map(|t| t.tasks.len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIARY_JSON: &str = r#"{
        "id": "varrock",
        "name": "Varrock Diary",
        "region": "Varrock",
        "tiers": [{
            "tier": "easy",
            "name": "Easy",
            "requirements": [],
            "tasks": [{
                "id": "browse_thessalias_store",
                "description": "Browse Thessalia's store.",
                "requirements": []
            }, {
                "id": "mine_iron",
                "description": "Mine some iron in the south east Varrock mine.",
                "requirements": [{"type": "skill-level", "skill": "mining", "level": 15}]
            }],
            "wikiUrl": "https://oldschool.runescape.wiki/w/Varrock_Diary#Easy"
        }]
    }"#;

    #[test]
    fn parses_diary_bundle_shape() {
        let diary: DiaryDefinition = serde_json::from_str(DIARY_JSON).unwrap();
        let easy = diary.tier(DiaryTier::Easy).unwrap();
        assert_eq!(easy.tasks.len(), 2);
        assert_eq!(easy.tasks[1].requirements.len(), 1);
        assert!(diary.tier(DiaryTier::Elite).is_none());
    }

    #[test]
    fn quest_defaults() {
        let quest: QuestDefinition =
            serde_json::from_str(r#"{"id": "cooks_assistant", "name": "Cook's Assistant"}"#)
                .unwrap();
        assert!(!quest.members);
        assert_eq!(quest.quest_points, 0);
        assert!(quest.requirements.is_empty());
    }

    #[test]
    fn guide_step_effective_requirements_include_stats() {
        let step: GuideStep = serde_json::from_str(
            r#"{
                "stepNumber": 4,
                "title": "Train thieving",
                "requirements": [{"type": "quest-complete", "questId": "x_marks_the_spot"}],
                "meta": {"statsNeeded": [{"skill": "thieving", "level": 5}]}
            }"#,
        )
        .unwrap();
        let reqs = step.effective_requirements();
        assert_eq!(reqs.len(), 2);
        assert_eq!(reqs[1], Requirement::skill(Skill::Thieving, 5));
    }

    #[test]
    fn bundle_lookup_and_merge() {
        let mut bundle = ContentBundle::default();
        assert!(bundle.is_empty());

        let diary: DiaryDefinition = serde_json::from_str(DIARY_JSON).unwrap();
        bundle.merge(ContentBundle {
            diaries: vec![diary],
            ..Default::default()
        });
        assert!(bundle.diary("varrock").is_some());
        assert!(bundle.quest("varrock").is_none());
        assert_eq!(bundle.diary_task_count(), 2);
    }

    #[test]
    fn combat_achievement_tier_rejects_unknown() {
        let json = r#"{"id": "x", "name": "X", "tier": "legendary"}"#;
        assert!(serde_json::from_str::<CombatAchievementDefinition>(json).is_err());
    }
}
