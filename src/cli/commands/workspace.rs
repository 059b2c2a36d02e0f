//! Shared command context: the project root and its merged configuration.
//!
//! Paths given on the command line win over configured ones. Configured
//! paths are resolved against the project root. Content is read through one
//! [`ContentLibrary`] per workspace, so a bundle file reached twice in a run
//! is parsed once.

use std::path::{Path, PathBuf};

use crate::config::{self, OutputFormat, RunetrackConfig};
use crate::content::{ensure_valid, ContentBundle, ContentLibrary};
use crate::error::Result;
use crate::requirements::{load_fact_sources, CharacterFacts};
use crate::ui::UserInterface;

/// A project root with its loaded configuration.
pub struct Workspace {
    root: PathBuf,
    config: RunetrackConfig,
    library: ContentLibrary,
}

impl Workspace {
    /// Load and validate configuration for `root`.
    pub fn load(root: &Path, config_path: Option<&Path>) -> Result<Self> {
        let config = config::load_config(root, config_path)?;
        config::validate(&config)?;
        Ok(Self::with_config(root, config))
    }

    pub fn with_config(root: &Path, config: RunetrackConfig) -> Self {
        let library = ContentLibrary::new(config.settings.cache_ttl());
        Self {
            root: root.to_path_buf(),
            config,
            library,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &RunetrackConfig {
        &self.config
    }

    /// The bundle cache shared by every load in this workspace.
    pub fn library(&mut self) -> &mut ContentLibrary {
        &mut self.library
    }

    pub fn content_paths(&self, cli: &[PathBuf]) -> Vec<PathBuf> {
        if cli.is_empty() {
            self.config.content_paths(&self.root)
        } else {
            cli.to_vec()
        }
    }

    pub fn facts_path(&self, cli: Option<&Path>) -> Option<PathBuf> {
        cli.map(Path::to_path_buf)
            .or_else(|| self.config.facts_path(&self.root))
    }

    pub fn snapshots_path(&self, cli: Option<&Path>) -> Option<PathBuf> {
        cli.map(Path::to_path_buf)
            .or_else(|| self.config.snapshots_path(&self.root))
    }

    /// Whether to print JSON, given a command's `--json` flag.
    pub fn wants_json(&self, flag: bool) -> bool {
        flag || self.config.settings.output_format == OutputFormat::Json
    }

    pub fn strict(&self) -> bool {
        self.config.settings.strict_validation
    }

    /// Load, merge and validate the given content paths.
    pub fn load_content(&mut self, paths: &[PathBuf]) -> Result<ContentBundle> {
        let bundle = self.library.load_all(paths)?;
        let report = ensure_valid(&bundle, self.strict())?;
        if report.warning_count() > 0 {
            tracing::info!(
                "Content loaded with {} warning(s); run `runetrack validate` for details",
                report.warning_count()
            );
        }
        Ok(bundle)
    }

    /// Load facts from `path`, or fall back to an empty fact set.
    pub fn load_facts(
        &self,
        path: Option<&Path>,
        ui: &mut dyn UserInterface,
    ) -> Result<CharacterFacts> {
        match path {
            Some(path) => {
                let facts = load_fact_sources(path)?.build();
                tracing::debug!("Loaded {} fact(s) from {}", facts.len(), path.display());
                Ok(facts)
            }
            None => {
                if ui.output_mode().shows_status() {
                    ui.warning("No fact source configured; every fact is unknown");
                }
                Ok(CharacterFacts::new())
            }
        }
    }
}
