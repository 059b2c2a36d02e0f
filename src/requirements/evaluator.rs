//! The requirement interpreter.
//!
//! [`evaluate`] decides a single requirement against a fact snapshot. It
//! assumes the requirement already passed parsing, so there is no error
//! path: a missing fact yields [`RequirementStatus::Unknown`].

use serde::Serialize;

use super::facts::CharacterFacts;
use super::model::Requirement;
use super::status::RequirementStatus;
use crate::combat::{calculate_combat_level, CombatStats};

/// Evaluate one requirement against a set of facts.
pub fn evaluate(requirement: &Requirement, facts: &CharacterFacts) -> RequirementStatus {
    match requirement {
        Requirement::SkillLevel { skill, level } => {
            RequirementStatus::at_least(facts.skill_level(*skill), *level)
        }
        Requirement::QuestComplete { quest_id } => {
            RequirementStatus::from_fact(facts.quest(quest_id))
        }
        Requirement::DiaryComplete { diary_id, tier } => {
            RequirementStatus::from_fact(facts.diary(diary_id, *tier))
        }
        Requirement::DiaryTask {
            diary_id,
            tier,
            task_id,
        } => RequirementStatus::from_fact(facts.diary_task(diary_id, *tier, task_id)),
        Requirement::UnlockFlag { flag_id } => RequirementStatus::from_fact(facts.unlock(flag_id)),
        Requirement::ActivityScore { activity, score } => {
            RequirementStatus::at_least(facts.activity(activity), *score)
        }
        Requirement::CombinedSkillLevel {
            skills,
            total_level,
        } => {
            let sum: Option<u64> = skills
                .iter()
                .map(|s| facts.skill_level(*s).map(u64::from))
                .sum();
            RequirementStatus::at_least(sum, u64::from(*total_level))
        }
        Requirement::CombatLevel { level } => {
            let combat = CombatStats::from_levels(|skill| facts.skill_level(skill))
                .map(|stats| calculate_combat_level(&stats));
            RequirementStatus::at_least(combat, *level)
        }
        Requirement::CombatAchievement {
            achievement_id,
            task_id,
        } => RequirementStatus::from_fact(facts.combat_achievement(achievement_id, *task_id)),
        Requirement::ItemPossessed { item_id } => RequirementStatus::from_fact(facts.item(item_id)),
        Requirement::ManualCheck { label, id } => {
            let key = id.as_deref().unwrap_or(label);
            RequirementStatus::from_fact(facts.manual_check(key))
        }
        Requirement::AllOf { requirements } => {
            RequirementStatus::all(requirements.iter().map(|r| evaluate(r, facts)))
        }
        Requirement::AnyOf { requirements } => {
            RequirementStatus::any(requirements.iter().map(|r| evaluate(r, facts)))
        }
    }
}

/// Evaluate a requirement list as an implicit all-of.
pub fn evaluate_all(requirements: &[Requirement], facts: &CharacterFacts) -> RequirementStatus {
    RequirementStatus::all(requirements.iter().map(|r| evaluate(r, facts)))
}

/// One node of an evaluation tree, mirroring the requirement's structure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequirementNode {
    pub kind: &'static str,
    pub label: String,
    pub status: RequirementStatus,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RequirementNode>,
}

impl RequirementNode {
    /// Count nodes in this subtree with the given status, leaves only.
    pub fn count_leaves(&self, status: RequirementStatus) -> usize {
        if self.children.is_empty() {
            usize::from(self.status == status)
        } else {
            self.children.iter().map(|c| c.count_leaves(status)).sum()
        }
    }
}

/// Evaluate a requirement and keep every intermediate status.
pub fn explain(requirement: &Requirement, facts: &CharacterFacts) -> RequirementNode {
    let children: Vec<RequirementNode> = requirement
        .children()
        .iter()
        .map(|child| explain(child, facts))
        .collect();

    let status = match requirement {
        Requirement::AllOf { .. } => RequirementStatus::all(children.iter().map(|c| c.status)),
        Requirement::AnyOf { .. } => RequirementStatus::any(children.iter().map(|c| c.status)),
        leaf => evaluate(leaf, facts),
    };

    RequirementNode {
        kind: requirement.kind(),
        label: requirement.describe(),
        status,
        children,
    }
}

/// Explain every requirement in a list.
pub fn explain_all(requirements: &[Requirement], facts: &CharacterFacts) -> Vec<RequirementNode> {
    requirements.iter().map(|r| explain(r, facts)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::model::DiaryTier;
    use crate::skills::Skill;
    use RequirementStatus::{Met, NotMet, Unknown};

    fn combat_facts(level: u32) -> CharacterFacts {
        Skill::ALL
            .into_iter()
            .filter(|s| s.is_combat())
            .fold(CharacterFacts::new(), |f, s| f.with_skill(s, level))
    }

    #[test]
    fn absent_skill_is_unknown_even_at_level_one() {
        let facts = CharacterFacts::new();
        for skill in Skill::ALL {
            assert_eq!(evaluate(&Requirement::skill(skill, 1), &facts), Unknown);
        }
    }

    #[test]
    fn skill_level_threshold() {
        let facts = CharacterFacts::new().with_skill(Skill::Woodcutting, 50);
        assert_eq!(evaluate(&Requirement::skill(Skill::Woodcutting, 50), &facts), Met);
        assert_eq!(evaluate(&Requirement::skill(Skill::Woodcutting, 51), &facts), NotMet);
    }

    #[test]
    fn boolean_lookups_are_tri_state() {
        let facts = CharacterFacts::new()
            .with_quest("done", true)
            .with_quest("not_done", false)
            .with_diary("varrock", DiaryTier::Easy, true)
            .with_diary_task("varrock", DiaryTier::Hard, "white_tree", false)
            .with_unlock("fairy_rings", true)
            .with_item("rune_axe", false);

        assert_eq!(evaluate(&Requirement::quest("done"), &facts), Met);
        assert_eq!(evaluate(&Requirement::quest("not_done"), &facts), NotMet);
        assert_eq!(evaluate(&Requirement::quest("unseen"), &facts), Unknown);

        let diary = Requirement::DiaryComplete {
            diary_id: "varrock".into(),
            tier: DiaryTier::Easy,
        };
        assert_eq!(evaluate(&diary, &facts), Met);

        let medium = Requirement::DiaryComplete {
            diary_id: "varrock".into(),
            tier: DiaryTier::Medium,
        };
        assert_eq!(evaluate(&medium, &facts), Unknown);

        let task = Requirement::DiaryTask {
            diary_id: "varrock".into(),
            tier: DiaryTier::Hard,
            task_id: "white_tree".into(),
        };
        assert_eq!(evaluate(&task, &facts), NotMet);

        let unlock = Requirement::UnlockFlag {
            flag_id: "fairy_rings".into(),
        };
        assert_eq!(evaluate(&unlock, &facts), Met);

        let item = Requirement::ItemPossessed {
            item_id: "rune_axe".into(),
        };
        assert_eq!(evaluate(&item, &facts), NotMet);
    }

    #[test]
    fn absent_activity_is_unknown_not_zero() {
        let req = Requirement::ActivityScore {
            activity: "zulrah".into(),
            score: 0,
        };
        assert_eq!(evaluate(&req, &CharacterFacts::new()), Unknown);

        let facts = CharacterFacts::new().with_activity("zulrah", 0);
        assert_eq!(evaluate(&req, &facts), Met);
    }

    #[test]
    fn combined_skill_level_requires_every_skill() {
        let req = Requirement::CombinedSkillLevel {
            skills: vec![Skill::Attack, Skill::Strength],
            total_level: 130,
        };
        let partial = CharacterFacts::new().with_skill(Skill::Attack, 99);
        assert_eq!(evaluate(&req, &partial), Unknown);

        let enough = partial.clone().with_skill(Skill::Strength, 31);
        assert_eq!(evaluate(&req, &enough), Met);

        let short = partial.with_skill(Skill::Strength, 30);
        assert_eq!(evaluate(&req, &short), NotMet);
    }

    #[test]
    fn combined_skill_level_sums_extreme_levels() {
        let req = Requirement::CombinedSkillLevel {
            skills: vec![Skill::Attack, Skill::Strength],
            total_level: 100,
        };
        let facts = CharacterFacts::new()
            .with_skill(Skill::Attack, u32::MAX)
            .with_skill(Skill::Strength, 5);
        assert_eq!(evaluate(&req, &facts), Met);
    }

    #[test]
    fn combat_level_uses_formula() {
        let req = Requirement::CombatLevel { level: 126 };
        assert_eq!(evaluate(&req, &combat_facts(99)), Met);
        assert_eq!(evaluate(&req, &combat_facts(98)), NotMet);
    }

    #[test]
    fn combat_level_unknown_when_a_combat_skill_is_missing() {
        let mut facts = combat_facts(99);
        facts.skill_levels.remove(&Skill::Prayer);
        assert_eq!(evaluate(&Requirement::CombatLevel { level: 3 }, &facts), Unknown);
    }

    #[test]
    fn combat_achievement_by_numeric_id() {
        let req = Requirement::CombatAchievement {
            achievement_id: "noxious_foe".into(),
            task_id: Some(7),
        };
        let facts = CharacterFacts::new().with_combat_achievement("7", true);
        assert_eq!(evaluate(&req, &facts), Met);
    }

    #[test]
    fn manual_check_defaults_to_unknown() {
        let req = Requirement::ManualCheck {
            label: "Have a light source".into(),
            id: None,
        };
        assert_eq!(evaluate(&req, &CharacterFacts::new()), Unknown);

        let facts = CharacterFacts::new().with_manual_check("Have a light source", false);
        assert_eq!(evaluate(&req, &facts), NotMet);
    }

    #[test]
    fn manual_check_prefers_id_key() {
        let req = Requirement::ManualCheck {
            label: "Have a light source".into(),
            id: Some("light_source".into()),
        };
        let facts = CharacterFacts::new()
            .with_manual_check("light_source", true)
            .with_manual_check("Have a light source", false);
        assert_eq!(evaluate(&req, &facts), Met);
    }

    #[test]
    fn all_of_dominance_law() {
        let met = Requirement::quest("met");
        let not_met = Requirement::quest("not_met");
        let unknown = Requirement::quest("unknown");
        let facts = CharacterFacts::new()
            .with_quest("met", true)
            .with_quest("not_met", false);

        for other in [&met, &not_met, &unknown] {
            let req = Requirement::all_of(vec![not_met.clone(), other.clone()]);
            assert_eq!(evaluate(&req, &facts), NotMet);
            let req = Requirement::all_of(vec![other.clone(), not_met.clone()]);
            assert_eq!(evaluate(&req, &facts), NotMet);
        }
        let pending = Requirement::all_of(vec![met.clone(), unknown.clone()]);
        assert_eq!(evaluate(&pending, &facts), Unknown);
    }

    #[test]
    fn any_of_met_wins() {
        let met = Requirement::quest("met");
        let not_met = Requirement::quest("not_met");
        let unknown = Requirement::quest("unknown");
        let facts = CharacterFacts::new()
            .with_quest("met", true)
            .with_quest("not_met", false);

        for other in [&met, &not_met, &unknown] {
            let req = Requirement::any_of(vec![met.clone(), other.clone()]);
            assert_eq!(evaluate(&req, &facts), Met);
        }
        let failed = Requirement::any_of(vec![not_met.clone(), not_met.clone()]);
        assert_eq!(evaluate(&failed, &facts), NotMet);
        let pending = Requirement::any_of(vec![not_met, unknown]);
        assert_eq!(evaluate(&pending, &facts), Unknown);
    }

    #[test]
    fn evaluate_all_is_implicit_all_of() {
        let facts = CharacterFacts::new().with_skill(Skill::Mining, 70);
        let reqs = vec![
            Requirement::skill(Skill::Mining, 60),
            Requirement::quest("unknown"),
        ];
        assert_eq!(evaluate_all(&reqs, &facts), Unknown);
        assert_eq!(evaluate_all(&[], &facts), Met);
    }

    #[test]
    fn explain_mirrors_structure_and_agrees_with_evaluate() {
        let facts = CharacterFacts::new()
            .with_skill(Skill::Attack, 99)
            .with_quest("waterfall_quest", false);
        let req = Requirement::any_of(vec![
            Requirement::quest("waterfall_quest"),
            Requirement::all_of(vec![
                Requirement::skill(Skill::Attack, 90),
                Requirement::quest("unknown"),
            ]),
        ]);

        let node = explain(&req, &facts);
        assert_eq!(node.status, evaluate(&req, &facts));
        assert_eq!(node.kind, "any-of");
        assert_eq!(node.children.len(), 2);
        assert_eq!(node.children[1].children[0].status, Met);
        assert_eq!(node.count_leaves(Unknown), 1);
        assert_eq!(node.count_leaves(NotMet), 1);
    }
}
