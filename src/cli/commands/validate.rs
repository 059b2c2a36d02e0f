//! Validate command implementation.
//!
//! The `runetrack validate` command checks content bundles for structural
//! problems and reports every issue found.

use std::path::{Path, PathBuf};

use crate::cli::args::ValidateArgs;
use crate::config::OutputFormat;
use crate::content::{validate_bundle, ContentBundle, ValidationReport};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::to_json;
use super::workspace::Workspace;

/// The validate command implementation.
pub struct ValidateCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: ValidateArgs,
}

impl ValidateCommand {
    /// Create a new validate command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: ValidateArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ValidateArgs {
        &self.args
    }
}

impl Command for ValidateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut workspace = Workspace::load(&self.project_root, self.config_path.as_deref())?;

        let paths = workspace.content_paths(&self.args.content);
        if paths.is_empty() {
            ui.error("No content configured. Pass --content or set `content` in .runetrack/config.yml");
            return Ok(CommandResult::missing_input());
        }

        let bundle = workspace.library().load_all(&paths)?;
        let report = validate_bundle(&bundle);
        let strict = self.args.strict || workspace.strict();
        let format = self
            .args
            .format
            .unwrap_or(workspace.config().settings.output_format);

        match format {
            OutputFormat::Json => ui.emit(&to_json(&report)?),
            OutputFormat::Human => show_report(ui, &bundle, &report),
        }

        if report.passes(strict) {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

fn show_report(ui: &mut dyn UserInterface, bundle: &ContentBundle, report: &ValidationReport) {
    for issue in &report.issues {
        let line = issue.to_string();
        if issue.severity == crate::content::Severity::Error {
            ui.error(&line);
        } else {
            ui.warning(&line);
        }
        if let Some(suggestion) = &issue.suggestion {
            ui.message(&format!("  help: {}", suggestion));
        }
    }

    let counts = format!(
        "{} quest(s), {} diary(ies), {} diary task(s), {} combat achievement(s), {} guide(s)",
        bundle.quests.len(),
        bundle.diaries.len(),
        bundle.diary_task_count(),
        bundle.combat_achievements.len(),
        bundle.guides.len()
    );

    if report.is_clean() {
        ui.success(&format!("Content is valid: {}", counts));
    } else {
        ui.message(&format!(
            "{} error(s), {} warning(s) in {}",
            report.error_count(),
            report.warning_count(),
            counts
        ));
    }
}
