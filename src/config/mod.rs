//! Configuration loading, merging and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use runetrack::config::{load_merged_config, validate, ConfigPaths};
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".runetrack");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "content: [content/quests.json]").unwrap();
//!
//! let paths = ConfigPaths::discover_with_home(temp.path(), None);
//! let config = load_merged_config(&paths).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.content.len(), 1);
//! ```
//!
//! # Configuration File Locations
//!
//! Merged in this order, later files overriding earlier ones:
//! 1. User global config (`~/.runetrack/config.yml`)
//! 2. Project config (`.runetrack/config.yml`)
//! 3. Local overrides (`.runetrack/config.local.yml`)

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use loader::{
    find_project_root, load_config, load_config_value, load_merged_config, parse_config,
    ConfigPaths, CONFIG_DIR,
};
pub use merger::{deep_merge, merge_into, merge_layers};
pub use schema::{OutputFormat, RunetrackConfig, Settings};
pub use validator::{validate, validate_config, ValidationError};
