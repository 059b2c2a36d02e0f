//! Configuration schema types.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// The merged runetrack configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunetrackConfig {
    /// Content bundle files or directories, relative to the project root.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<PathBuf>,

    /// Default fact source document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facts: Option<PathBuf>,

    /// Directory of progress snapshots.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshots_dir: Option<PathBuf>,

    pub settings: Settings,
}

impl RunetrackConfig {
    /// Content paths resolved against `root`.
    pub fn content_paths(&self, root: &Path) -> Vec<PathBuf> {
        self.content.iter().map(|p| resolve(root, p)).collect()
    }

    pub fn facts_path(&self, root: &Path) -> Option<PathBuf> {
        self.facts.as_deref().map(|p| resolve(root, p))
    }

    pub fn snapshots_path(&self, root: &Path) -> Option<PathBuf> {
        self.snapshots_dir.as_deref().map(|p| resolve(root, p))
    }
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Global settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// How long a loaded content bundle is reused.
    pub cache_ttl_seconds: u64,

    /// Default output format for commands that support `--json`.
    pub output_format: OutputFormat,

    /// Treat content warnings as errors.
    #[serde(skip_serializing_if = "is_false")]
    pub strict_validation: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cache_ttl_seconds: 300,
            output_format: OutputFormat::default(),
            strict_validation: false,
        }
    }
}

impl Settings {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }
}

fn is_false(v: &bool) -> bool {
    !*v
}

/// Output format for reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}
