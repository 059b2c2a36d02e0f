//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::merger::merge_layers;
use crate::config::schema::RunetrackConfig;
use crate::error::{Result, RunetrackError};

/// Directory holding project configuration.
pub const CONFIG_DIR: &str = ".runetrack";

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. User global config (`~/.runetrack/config.yml`)
/// 2. Project config (`.runetrack/config.yml`)
/// 3. Local overrides (`.runetrack/config.local.yml`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigPaths {
    pub user_global: Option<PathBuf>,
    pub project: Option<PathBuf>,
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self::discover_with_home(project_root, dirs::home_dir().as_deref())
    }

    /// Discover config files, looking for the global config under `home`.
    pub fn discover_with_home(project_root: &Path, home: Option<&Path>) -> Self {
        let config_dir = project_root.join(CONFIG_DIR);
        Self {
            user_global: home
                .map(|h| h.join(CONFIG_DIR).join("config.yml"))
                .filter(|p| p.is_file()),
            project: Some(config_dir.join("config.yml")).filter(|p| p.is_file()),
            project_local: Some(config_dir.join("config.local.yml")).filter(|p| p.is_file()),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        [&self.user_global, &self.project, &self.project_local]
            .into_iter()
            .flatten()
            .collect()
    }
}

/// Find the project root by walking up from `start`.
///
/// The nearest directory containing `.runetrack/` or `.git`.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_DIR).is_dir() || current.join(".git").exists() {
            return Some(current);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Parse YAML config text; `source_path` is used for error reporting.
pub fn parse_config(content: &str, source_path: &Path) -> Result<RunetrackConfig> {
    serde_yaml::from_str::<Option<RunetrackConfig>>(content)
        .map(Option::unwrap_or_default)
        .map_err(|e| RunetrackError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Load a config file as a raw YAML value for merging.
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RunetrackError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            RunetrackError::Io(e)
        }
    })?;

    serde_yaml::from_str(&content).map_err(|e| RunetrackError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and merge every discovered config file.
///
/// No config at all is fine: the defaults are returned. Errors in the merged
/// result are reported against the highest-priority layer.
pub fn load_merged_config(paths: &ConfigPaths) -> Result<RunetrackConfig> {
    let existing = paths.all_existing();
    let mut layers = Vec::new();
    for path in &existing {
        tracing::debug!("Loading config layer {}", path.display());
        layers.push(load_config_value(path)?);
    }

    serde_yaml::from_value(merge_layers(layers)).map_err(|e| RunetrackError::ConfigParseError {
        path: existing
            .last()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| PathBuf::from(CONFIG_DIR).join("config.yml")),
        message: format!("Failed to parse merged config: {}", e),
    })
}

/// Load config for a project, optionally from one explicit file.
///
/// An explicit file is loaded alone, without merging, and must exist.
pub fn load_config(
    project_root: &Path,
    config_override: Option<&Path>,
) -> Result<RunetrackConfig> {
    match config_override {
        Some(path) => {
            let value = load_config_value(path)?;
            serde_yaml::from_value(merge_layers([value])).map_err(|e| {
                RunetrackError::ConfigParseError {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                }
            })
        }
        None => load_merged_config(&ConfigPaths::discover(project_root)),
    }
}
