//! Summary command implementation.
//!
//! The `runetrack summary` command reports gains between the latest snapshot
//! in a directory and the earliest snapshot inside the `--since` window.

use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

use crate::cache::parse_duration;
use crate::cli::args::SummaryArgs;
use crate::error::Result;
use crate::progress::{baseline_since, diff_snapshots, latest, load_snapshot_dir};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::{show_diff, to_json};
use super::workspace::Workspace;

/// The summary command implementation.
pub struct SummaryCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: SummaryArgs,
}

impl SummaryCommand {
    /// Create a new summary command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: SummaryArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for SummaryCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let workspace = Workspace::load(&self.project_root, self.config_path.as_deref())?;
        let window = self.args.since.as_deref().map(parse_duration).transpose()?;

        let Some(dir) = workspace.snapshots_path(self.args.snapshots.as_deref()) else {
            ui.error("No snapshot directory configured. Pass --snapshots or set `snapshots_dir` in .runetrack/config.yml");
            return Ok(CommandResult::missing_input());
        };
        if !dir.is_dir() {
            ui.error(&format!("Snapshot directory not found: {}", dir.display()));
            return Ok(CommandResult::missing_input());
        }

        let snapshots = load_snapshot_dir(&dir)?;
        let Some(current) = latest(&snapshots) else {
            ui.error(&format!("No snapshots in {}", dir.display()));
            return Ok(CommandResult::missing_input());
        };

        let cutoff = window
            .and_then(|w| current.captured_at.checked_sub_signed(w))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        let baseline = baseline_since(&snapshots, cutoff).unwrap_or(current);
        if baseline.captured_at == current.captured_at && ui.output_mode().shows_status() {
            ui.warning("Only one snapshot in range; nothing to compare");
        }

        let diff = diff_snapshots(baseline, current);
        if workspace.wants_json(self.args.json) {
            ui.emit(&to_json(&diff)?);
        } else {
            show_diff(ui, &diff, false);
        }
        Ok(CommandResult::success())
    }
}
