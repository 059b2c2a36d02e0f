//! Runetrack - Old School RuneScape requirements engine and progress differ.
//!
//! Runetrack evaluates quest, achievement diary, combat achievement and guide
//! requirements against what is known about a character, reporting each as
//! met, not met or unknown, and diffs progress snapshots over time.
//!
//! # Modules
//!
//! - [`cache`] - TTL cache with an injectable clock
//! - [`cli`] - Command-line interface and argument parsing
//! - [`combat`] - Combat level formula
//! - [`config`] - Layered configuration loading and validation
//! - [`content`] - Content bundle definitions, loading and validation
//! - [`document`] - JSON/YAML document reading
//! - [`error`] - Error types and result aliases
//! - [`evaluation`] - Quest, diary, combat achievement and guide evaluation
//! - [`progress`] - Progress snapshots and diffs
//! - [`requirements`] - Requirement model, character facts and the interpreter
//! - [`skills`] - The skill enumeration
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use runetrack::requirements::{evaluate, CharacterFacts, Requirement, RequirementStatus};
//! use runetrack::skills::Skill;
//!
//! let facts = CharacterFacts::new().with_skill(Skill::Agility, 62);
//! let requirement = Requirement::any_of(vec![
//!     Requirement::skill(Skill::Agility, 60),
//!     Requirement::quest("recipe_for_disaster"),
//! ]);
//!
//! assert_eq!(evaluate(&requirement, &facts), RequirementStatus::Met);
//! ```
//!
//! For file-based loading, see the integration tests.

pub mod cache;
pub mod cli;
pub mod combat;
pub mod config;
pub mod content;
pub mod document;
pub mod error;
pub mod evaluation;
pub mod progress;
pub mod requirements;
pub mod skills;
pub mod ui;

pub use error::{Result, RunetrackError};
