//! Requirement definitions.
//!
//! A [`Requirement`] is a static, content-authored condition. Leaf variants
//! name a single fact; `all-of` and `any-of` nest child requirements.
//!
//! The wire format is a tagged object with a kebab-case `type` and camelCase
//! fields, matching the content bundles:
//!
//! ```
//! use runetrack::requirements::Requirement;
//! use runetrack::skills::Skill;
//!
//! let json = r#"{"type": "skill-level", "skill": "woodcutting", "level": 50}"#;
//! let req: Requirement = serde_json::from_str(json).unwrap();
//! assert_eq!(req, Requirement::skill(Skill::Woodcutting, 50));
//!
//! // Unrecognized tags are rejected at parse time.
//! let bad = r#"{"type": "prestige-level", "level": 3}"#;
//! assert!(serde_json::from_str::<Requirement>(bad).is_err());
//! ```

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::skills::Skill;

/// Achievement diary difficulty tier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum DiaryTier {
    Easy,
    Medium,
    Hard,
    Elite,
}

impl DiaryTier {
    /// All tiers in ascending difficulty.
    pub const ALL: [DiaryTier; 4] = [
        DiaryTier::Easy,
        DiaryTier::Medium,
        DiaryTier::Hard,
        DiaryTier::Elite,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DiaryTier::Easy => "easy",
            DiaryTier::Medium => "medium",
            DiaryTier::Hard => "hard",
            DiaryTier::Elite => "elite",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let lower = value.trim().to_ascii_lowercase();
        DiaryTier::ALL.into_iter().find(|t| t.as_str() == lower)
    }
}

impl fmt::Display for DiaryTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A condition evaluated against a character's facts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Requirement {
    /// Skill at or above a level.
    SkillLevel { skill: Skill, level: u32 },

    /// Quest completed.
    #[serde(rename_all = "camelCase")]
    QuestComplete { quest_id: String },

    /// Every task of a diary tier completed.
    #[serde(rename_all = "camelCase")]
    DiaryComplete { diary_id: String, tier: DiaryTier },

    /// A single diary task completed.
    #[serde(rename_all = "camelCase")]
    DiaryTask {
        diary_id: String,
        tier: DiaryTier,
        task_id: String,
    },

    /// An account unlock (e.g. a spellbook or a travel method).
    #[serde(rename_all = "camelCase")]
    UnlockFlag { flag_id: String },

    /// Minimum score or kill count in a tracked activity.
    ActivityScore { activity: String, score: i64 },

    /// Sum of levels across several skills.
    #[serde(rename_all = "camelCase")]
    CombinedSkillLevel { skills: Vec<Skill>, total_level: u32 },

    /// Minimum combat level.
    CombatLevel { level: u32 },

    /// Combat achievement completed. `task_id` is the in-game numeric id.
    #[serde(rename_all = "camelCase")]
    CombatAchievement {
        achievement_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        task_id: Option<u32>,
    },

    /// Item owned by the character.
    #[serde(rename_all = "camelCase")]
    ItemPossessed { item_id: String },

    /// Something only the player can confirm.
    ManualCheck {
        label: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
    },

    /// Every child requirement holds.
    AllOf { requirements: Vec<Requirement> },

    /// At least one child requirement holds.
    AnyOf { requirements: Vec<Requirement> },
}

impl Requirement {
    pub fn skill(skill: Skill, level: u32) -> Self {
        Requirement::SkillLevel { skill, level }
    }

    pub fn quest(quest_id: impl Into<String>) -> Self {
        Requirement::QuestComplete {
            quest_id: quest_id.into(),
        }
    }

    pub fn all_of(requirements: Vec<Requirement>) -> Self {
        Requirement::AllOf { requirements }
    }

    pub fn any_of(requirements: Vec<Requirement>) -> Self {
        Requirement::AnyOf { requirements }
    }

    /// The serialized `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Requirement::SkillLevel { .. } => "skill-level",
            Requirement::QuestComplete { .. } => "quest-complete",
            Requirement::DiaryComplete { .. } => "diary-complete",
            Requirement::DiaryTask { .. } => "diary-task",
            Requirement::UnlockFlag { .. } => "unlock-flag",
            Requirement::ActivityScore { .. } => "activity-score",
            Requirement::CombinedSkillLevel { .. } => "combined-skill-level",
            Requirement::CombatLevel { .. } => "combat-level",
            Requirement::CombatAchievement { .. } => "combat-achievement",
            Requirement::ItemPossessed { .. } => "item-possessed",
            Requirement::ManualCheck { .. } => "manual-check",
            Requirement::AllOf { .. } => "all-of",
            Requirement::AnyOf { .. } => "any-of",
        }
    }

    /// Child requirements of a combinator; empty for leaves.
    pub fn children(&self) -> &[Requirement] {
        match self {
            Requirement::AllOf { requirements } | Requirement::AnyOf { requirements } => {
                requirements
            }
            _ => &[],
        }
    }

    /// Visit this requirement and every nested child, depth first.
    pub fn visit<'a, F>(&'a self, f: &mut F)
    where
        F: FnMut(&'a Requirement),
    {
        f(self);
        for child in self.children() {
            child.visit(f);
        }
    }

    /// Human-readable one-line description.
    pub fn describe(&self) -> String {
        match self {
            Requirement::SkillLevel { skill, level } => format!("Level {} {}", level, skill),
            Requirement::QuestComplete { quest_id } => format!("Complete quest '{}'", quest_id),
            Requirement::DiaryComplete { diary_id, tier } => {
                format!("Complete the {} {} diary", diary_id, tier)
            }
            Requirement::DiaryTask {
                diary_id,
                tier,
                task_id,
            } => format!("Complete {} {} diary task '{}'", diary_id, tier, task_id),
            Requirement::UnlockFlag { flag_id } => format!("Unlock '{}'", flag_id),
            Requirement::ActivityScore { activity, score } => {
                format!("Score {} in {}", score, activity)
            }
            Requirement::CombinedSkillLevel {
                skills,
                total_level,
            } => {
                let names: Vec<&str> = skills.iter().map(|s| s.display_name()).collect();
                format!("Combined level {} in {}", total_level, names.join(" + "))
            }
            Requirement::CombatLevel { level } => format!("Combat level {}", level),
            Requirement::CombatAchievement { achievement_id, .. } => {
                format!("Complete combat achievement '{}'", achievement_id)
            }
            Requirement::ItemPossessed { item_id } => format!("Own '{}'", item_id),
            Requirement::ManualCheck { label, .. } => label.clone(),
            Requirement::AllOf { requirements } => {
                format!("All of {} requirement(s)", requirements.len())
            }
            Requirement::AnyOf { requirements } => {
                format!("Any of {} requirement(s)", requirements.len())
            }
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}
