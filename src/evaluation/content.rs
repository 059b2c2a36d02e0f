//! Evaluation trees for individual content definitions.

use serde::Serialize;

use crate::content::{
    CombatAchievementDefinition, CombatAchievementTier, DiaryDefinition, DiaryTaskDefinition,
    DiaryTierDefinition, GuideDefinition, GuideStep, QuestDefinition,
};
use crate::requirements::{
    explain_all, CharacterFacts, DiaryTier, RequirementNode, RequirementStatus,
};

fn combined(nodes: &[RequirementNode]) -> RequirementStatus {
    RequirementStatus::all(nodes.iter().map(|n| n.status))
}

/// A quest's requirement tree and completion flag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestEvaluation {
    pub id: String,
    pub name: String,
    /// Read from facts; `None` when the quest has never been synced.
    pub completed: Option<bool>,
    pub status: RequirementStatus,
    pub requirements: Vec<RequirementNode>,
}

/// Evaluate a quest's start requirements.
pub fn evaluate_quest(quest: &QuestDefinition, facts: &CharacterFacts) -> QuestEvaluation {
    let requirements = explain_all(&quest.requirements, facts);
    QuestEvaluation {
        id: quest.id.clone(),
        name: quest.name.clone(),
        completed: facts.quest(&quest.id),
        status: combined(&requirements),
        requirements,
    }
}

/// One diary task.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskEvaluation {
    pub id: String,
    pub description: String,
    pub completed: Option<bool>,
    pub status: RequirementStatus,
    pub requirements: Vec<RequirementNode>,
}

/// One diary tier and its tasks.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierEvaluation {
    pub tier: DiaryTier,
    pub name: String,
    /// The tier's own completion flag, never derived from its tasks.
    pub completed: Option<bool>,
    /// Status of the tier's own requirements.
    pub status: RequirementStatus,
    /// The tier requirements and every task combined under all-of.
    pub aggregate_status: RequirementStatus,
    pub requirements: Vec<RequirementNode>,
    pub tasks: Vec<TaskEvaluation>,
    pub tasks_met: usize,
    pub tasks_total: usize,
}

/// A diary with every tier evaluated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryEvaluation {
    pub id: String,
    pub name: String,
    pub region: String,
    pub tiers: Vec<TierEvaluation>,
}

impl DiaryEvaluation {
    pub fn tier(&self, tier: DiaryTier) -> Option<&TierEvaluation> {
        self.tiers.iter().find(|t| t.tier == tier)
    }
}

fn evaluate_task(
    diary_id: &str,
    tier: DiaryTier,
    task: &DiaryTaskDefinition,
    facts: &CharacterFacts,
) -> TaskEvaluation {
    let requirements = explain_all(&task.requirements, facts);
    TaskEvaluation {
        id: task.id.clone(),
        description: task.description.clone(),
        completed: facts.diary_task(diary_id, tier, &task.id),
        status: combined(&requirements),
        requirements,
    }
}

/// Evaluate one tier of a diary.
pub fn evaluate_diary_tier(
    diary_id: &str,
    tier: &DiaryTierDefinition,
    facts: &CharacterFacts,
) -> TierEvaluation {
    let requirements = explain_all(&tier.requirements, facts);
    let tasks: Vec<TaskEvaluation> = tier
        .tasks
        .iter()
        .map(|task| evaluate_task(diary_id, tier.tier, task, facts))
        .collect();

    let status = combined(&requirements);
    let aggregate_status =
        RequirementStatus::all(std::iter::once(status).chain(tasks.iter().map(|t| t.status)));

    TierEvaluation {
        tier: tier.tier,
        name: tier.name.clone(),
        completed: facts.diary(diary_id, tier.tier),
        status,
        aggregate_status,
        requirements,
        tasks_met: tasks.iter().filter(|t| t.status.is_met()).count(),
        tasks_total: tasks.len(),
        tasks,
    }
}

/// Evaluate every tier of a diary, in definition order.
pub fn evaluate_diary(diary: &DiaryDefinition, facts: &CharacterFacts) -> DiaryEvaluation {
    DiaryEvaluation {
        id: diary.id.clone(),
        name: diary.name.clone(),
        region: diary.region.clone(),
        tiers: diary
            .tiers
            .iter()
            .map(|tier| evaluate_diary_tier(&diary.id, tier, facts))
            .collect(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CombatAchievementEvaluation {
    pub id: String,
    pub name: String,
    pub tier: CombatAchievementTier,
    pub completed: Option<bool>,
    pub status: RequirementStatus,
    pub requirements: Vec<RequirementNode>,
}

/// Evaluate a combat achievement. Completion is looked up by id, then by
/// numeric task id.
pub fn evaluate_combat_achievement(
    achievement: &CombatAchievementDefinition,
    facts: &CharacterFacts,
) -> CombatAchievementEvaluation {
    let requirements = explain_all(&achievement.requirements, facts);
    CombatAchievementEvaluation {
        id: achievement.id.clone(),
        name: achievement.name.clone(),
        tier: achievement.tier,
        completed: facts.combat_achievement(&achievement.id, achievement.task_id),
        status: combined(&requirements),
        requirements,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideStepEvaluation {
    pub step_number: u32,
    pub title: String,
    /// Required requirements plus listed stats.
    pub status: RequirementStatus,
    /// Optional requirements; never affect `status`.
    pub optional_status: RequirementStatus,
    pub requirements: Vec<RequirementNode>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub optional_requirements: Vec<RequirementNode>,
}

pub fn evaluate_guide_step(step: &GuideStep, facts: &CharacterFacts) -> GuideStepEvaluation {
    let requirements = explain_all(&step.effective_requirements(), facts);
    let optional_requirements = explain_all(&step.optional_requirements, facts);
    GuideStepEvaluation {
        step_number: step.step_number,
        title: step.title.clone(),
        status: combined(&requirements),
        optional_status: combined(&optional_requirements),
        requirements,
        optional_requirements,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideEvaluation {
    pub id: String,
    pub name: String,
    pub steps: Vec<GuideStepEvaluation>,
}

impl GuideEvaluation {
    /// First step whose requirements are not yet met.
    pub fn next_step(&self) -> Option<&GuideStepEvaluation> {
        self.steps.iter().find(|s| !s.status.is_met())
    }
}

pub fn evaluate_guide(guide: &GuideDefinition, facts: &CharacterFacts) -> GuideEvaluation {
    GuideEvaluation {
        id: guide.id.clone(),
        name: guide.name.clone(),
        steps: guide
            .steps
            .iter()
            .map(|step| evaluate_guide_step(step, facts))
            .collect(),
    }
}
