//! Content bundles: quests, diaries, combat achievements and guides.
//!
//! # Modules
//!
//! - [`definitions`] - The bundle data model
//! - [`loader`] - Reading JSON/YAML bundle files and merging them
//! - [`validator`] - Structural checks that collect every issue
//! - [`library`] - Bundle loading through a TTL cache
//! - [`schema`] - JSON Schema for the bundle format
//!
//! # Example
//!
//! ```
//! use runetrack::content::{validate_bundle, ContentBundle};
//!
//! let bundle: ContentBundle = serde_json::from_str(
//!     r#"{"quests": [{"id": "cooks_assistant", "name": "Cook's Assistant"}]}"#,
//! )
//! .unwrap();
//! assert!(validate_bundle(&bundle).is_clean());
//! ```

pub mod definitions;
pub mod library;
pub mod loader;
pub mod schema;
pub mod validator;

pub use definitions::{
    CombatAchievementDefinition, CombatAchievementTier, ContentBundle, DiaryDefinition,
    DiaryTaskDefinition, DiaryTierDefinition, GuideDefinition, GuideStep, GuideStepMeta,
    QuestDefinition, StatNeeded,
};
pub use library::{ContentLibrary, DEFAULT_CACHE_TTL};
pub use loader::{bundle_files, load_bundle, load_bundles, merge_bundles};
pub use schema::{bundle_schema, requirement_schema};
pub use validator::{
    ensure_valid, slugify, validate_bundle, Severity, ValidationIssue, ValidationReport,
};
