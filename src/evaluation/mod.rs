//! Evaluating content definitions against character facts.
//!
//! Each evaluation mirrors the shape of its definition: a quest yields a
//! requirement tree, a diary yields tiers with tasks, and so on. Every node
//! carries its requirement status, and completion flags are read straight
//! from facts without being inferred from those statuses.
//!
//! # Modules
//!
//! - [`content`] - Per-definition evaluators
//! - [`summary`] - Whole-bundle evaluation with status counts
//!
//! # Example
//!
//! ```
//! use runetrack::content::ContentBundle;
//! use runetrack::evaluation::evaluate_bundle;
//! use runetrack::requirements::CharacterFacts;
//!
//! let bundle: ContentBundle = serde_json::from_str(
//!     r#"{"quests": [{"id": "cooks_assistant", "name": "Cook's Assistant"}]}"#,
//! )
//! .unwrap();
//! let eval = evaluate_bundle(&bundle, &CharacterFacts::new());
//! assert_eq!(eval.summary.quests.met, 1);
//! ```

pub mod content;
pub mod summary;

pub use content::{
    evaluate_combat_achievement, evaluate_diary, evaluate_diary_tier, evaluate_guide,
    evaluate_guide_step, evaluate_quest, CombatAchievementEvaluation, DiaryEvaluation,
    GuideEvaluation, GuideStepEvaluation, QuestEvaluation, TaskEvaluation, TierEvaluation,
};
pub use summary::{evaluate_bundle, BundleEvaluation, EvaluationSummary, StatusCounts};
