//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Exit code for required input that is missing.
    pub fn missing_input() -> Self {
        Self::failure(2)
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            project_root,
            config_path: None,
        }
    }

    /// Load configuration from one explicit file instead of the layered lookup.
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let root = self.project_root.as_path();
        let config = self.config_path.as_deref();
        tracing::debug!("Dispatching in {}", root.display());

        match &cli.command {
            Commands::Evaluate(args) => {
                super::evaluate::EvaluateCommand::new(root, config, args.clone()).execute(ui)
            }
            Commands::Check(args) => {
                super::check::CheckCommand::new(root, config, args.clone()).execute(ui)
            }
            Commands::Diff(args) => {
                super::diff::DiffCommand::new(root, config, args.clone()).execute(ui)
            }
            Commands::Summary(args) => {
                super::summary::SummaryCommand::new(root, config, args.clone()).execute(ui)
            }
            Commands::Combat(args) => {
                super::combat::CombatCommand::new(root, config, args.clone()).execute(ui)
            }
            Commands::Validate(args) => {
                super::validate::ValidateCommand::new(root, config, args.clone()).execute(ui)
            }
            Commands::Schema(args) => super::schema::SchemaCommand::new(args.clone()).execute(ui),
            Commands::Completions(args) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert_eq!(CommandResult::missing_input().exit_code, 2);
    }

    #[test]
    fn dispatcher_creation() {
        let dispatcher = CommandDispatcher::new(PathBuf::from("/test"));
        assert_eq!(dispatcher.project_root(), Path::new("/test"));
    }

    #[test]
    fn dispatches_schema() {
        let cli = Cli::parse_from(["runetrack", "schema", "--kind", "requirement"]);
        let dispatcher = CommandDispatcher::new(PathBuf::from("/test"));
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert!(result.success);
        assert!(ui.emitted_text().contains("skill-level"));
    }
}
