//! Requirement definitions and evaluation.
//!
//! This module decides, for a character's known facts, whether a
//! requirement (or a boolean combination of requirements) is met, not met,
//! or unknown.
//!
//! # Modules
//!
//! - [`model`] - The [`Requirement`] variant and diary tiers
//! - [`status`] - The tri-state [`RequirementStatus`] and its combinators
//! - [`facts`] - [`CharacterFacts`] and the layered [`FactsBuilder`]
//! - [`evaluator`] - The interpreter: [`evaluate`] and [`explain`]
//!
//! # Example
//!
//! ```
//! use runetrack::requirements::{evaluate, CharacterFacts, Requirement, RequirementStatus};
//! use runetrack::skills::Skill;
//!
//! let facts = CharacterFacts::new().with_skill(Skill::Agility, 62);
//! let req = Requirement::any_of(vec![
//!     Requirement::skill(Skill::Agility, 60),
//!     Requirement::quest("recipe_for_disaster"),
//! ]);
//! assert_eq!(evaluate(&req, &facts), RequirementStatus::Met);
//! ```

pub mod evaluator;
pub mod facts;
pub mod model;
pub mod status;

pub use evaluator::{evaluate, evaluate_all, explain, explain_all, RequirementNode};
pub use facts::{
    diary_key, diary_task_key, load_fact_sources, CharacterFacts, FactSources, FactsBuilder,
};
pub use model::{DiaryTier, Requirement};
pub use status::RequirementStatus;
