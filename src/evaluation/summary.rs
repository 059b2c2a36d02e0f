//! Whole-bundle evaluation and status counts.

use serde::Serialize;

use super::content::{
    evaluate_combat_achievement, evaluate_diary, evaluate_guide, evaluate_quest,
    CombatAchievementEvaluation, DiaryEvaluation, GuideEvaluation, QuestEvaluation,
};
use crate::content::ContentBundle;
use crate::requirements::{CharacterFacts, RequirementStatus};

/// Counts of statuses and completion flags over one kind of content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub total: usize,
    pub met: usize,
    pub not_met: usize,
    pub unknown: usize,
    pub completed: usize,
}

impl StatusCounts {
    pub fn record(&mut self, status: RequirementStatus, completed: Option<bool>) {
        self.total += 1;
        match status {
            RequirementStatus::Met => self.met += 1,
            RequirementStatus::NotMet => self.not_met += 1,
            RequirementStatus::Unknown => self.unknown += 1,
        }
        if completed == Some(true) {
            self.completed += 1;
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationSummary {
    pub quests: StatusCounts,
    /// Counted by aggregate status.
    pub diary_tiers: StatusCounts,
    pub diary_tasks: StatusCounts,
    pub combat_achievements: StatusCounts,
    pub guide_steps: StatusCounts,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleEvaluation {
    pub quests: Vec<QuestEvaluation>,
    pub diaries: Vec<DiaryEvaluation>,
    pub combat_achievements: Vec<CombatAchievementEvaluation>,
    pub guides: Vec<GuideEvaluation>,
    pub summary: EvaluationSummary,
}

/// Evaluate every definition in a bundle.
pub fn evaluate_bundle(bundle: &ContentBundle, facts: &CharacterFacts) -> BundleEvaluation {
    let quests: Vec<_> = bundle
        .quests
        .iter()
        .map(|q| evaluate_quest(q, facts))
        .collect();
    let diaries: Vec<_> = bundle
        .diaries
        .iter()
        .map(|d| evaluate_diary(d, facts))
        .collect();
    let combat_achievements: Vec<_> = bundle
        .combat_achievements
        .iter()
        .map(|c| evaluate_combat_achievement(c, facts))
        .collect();
    let guides: Vec<_> = bundle
        .guides
        .iter()
        .map(|g| evaluate_guide(g, facts))
        .collect();

    let mut summary = EvaluationSummary::default();
    for quest in &quests {
        summary.quests.record(quest.status, quest.completed);
    }
    for tier in diaries.iter().flat_map(|d| &d.tiers) {
        summary
            .diary_tiers
            .record(tier.aggregate_status, tier.completed);
        for task in &tier.tasks {
            summary.diary_tasks.record(task.status, task.completed);
        }
    }
    for ca in &combat_achievements {
        summary.combat_achievements.record(ca.status, ca.completed);
    }
    for step in guides.iter().flat_map(|g| &g.steps) {
        summary.guide_steps.record(step.status, None);
    }

    tracing::debug!(
        "Evaluated {} quest(s): {} met, {} not met, {} unknown",
        summary.quests.total,
        summary.quests.met,
        summary.quests.not_met,
        summary.quests.unknown
    );

    BundleEvaluation {
        quests,
        diaries,
        combat_achievements,
        guides,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::DiaryTier;
    use crate::skills::Skill;

    const BUNDLE: &str = r#"{
        "quests": [
            {"id": "cooks_assistant", "name": "Cook's Assistant"},
            {"id": "rfd", "name": "Recipe for Disaster", "requirements": [
                {"type": "quest-complete", "questId": "cooks_assistant"},
                {"type": "skill-level", "skill": "cooking", "level": 70}
            ]},
            {"id": "monkey_madness_i", "name": "Monkey Madness I", "requirements": [
                {"type": "quest-complete", "questId": "tree_gnome_village"}
            ]}
        ],
        "diaries": [{
            "id": "lumbridge", "name": "Lumbridge & Draynor", "region": "Lumbridge",
            "tiers": [{"tier": "easy", "name": "Easy", "tasks": [
                {"id": "a", "description": "A"},
                {"id": "b", "description": "B", "requirements": [
                    {"type": "skill-level", "skill": "runecraft", "level": 5}
                ]}
            ]}]
        }],
        "combatAchievements": [
            {"id": "giant_mole_adept", "name": "Giant Mole Adept", "tier": "easy",
             "requirements": [{"type": "combat-level", "level": 50}]}
        ]
    }"#;

    #[test]
    fn summary_counts_each_kind() {
        let bundle: ContentBundle = serde_json::from_str(BUNDLE).unwrap();
        let facts = CharacterFacts::new()
            .with_quest("cooks_assistant", true)
            .with_skill(Skill::Cooking, 50)
            .with_skill(Skill::Runecraft, 20)
            .with_diary("lumbridge", DiaryTier::Easy, false);

        let eval = evaluate_bundle(&bundle, &facts);
        let s = eval.summary;

        assert_eq!(s.quests.total, 3);
        assert_eq!(s.quests.met, 1);
        assert_eq!(s.quests.not_met, 1);
        assert_eq!(s.quests.unknown, 1);
        assert_eq!(s.quests.completed, 1);

        assert_eq!(s.diary_tiers.met, 1);
        assert_eq!(s.diary_tiers.completed, 0);
        assert_eq!(s.diary_tasks.total, 2);
        assert_eq!(s.diary_tasks.met, 2);

        // Combat level needs every combat skill.
        assert_eq!(s.combat_achievements.unknown, 1);
        assert_eq!(s.guide_steps, StatusCounts::default());
    }

    #[test]
    fn empty_bundle_evaluates_to_empty_summary() {
        let eval = evaluate_bundle(&ContentBundle::default(), &CharacterFacts::new());
        assert_eq!(eval.summary, EvaluationSummary::default());
        assert!(eval.quests.is_empty());
    }
}
