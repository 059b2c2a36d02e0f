//! Diff command implementation.
//!
//! The `runetrack diff` command compares two progress snapshots.

use std::path::{Path, PathBuf};

use crate::cli::args::DiffArgs;
use crate::error::Result;
use crate::progress::{diff_snapshots, load_snapshot};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::{show_diff, to_json};
use super::workspace::Workspace;

/// The diff command implementation.
pub struct DiffCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: DiffArgs,
}

impl DiffCommand {
    /// Create a new diff command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: DiffArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for DiffCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let workspace = Workspace::load(&self.project_root, self.config_path.as_deref())?;
        let previous = load_snapshot(&self.args.previous)?;
        let current = load_snapshot(&self.args.current)?;

        if current.captured_at < previous.captured_at {
            ui.warning("The current snapshot was captured before the previous one");
        }

        let diff = diff_snapshots(&previous, &current);
        if workspace.wants_json(self.args.json) {
            ui.emit(&to_json(&diff)?);
        } else {
            show_diff(ui, &diff, self.args.all);
        }
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RunetrackError;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    const PREVIOUS: &str = r#"{
  "capturedAt": "2026-01-01T00:00:00Z",
  "totalLevel": 100,
  "totalXp": 1000,
  "combatLevel": 20,
  "skills": [{ "skill": "attack", "level": 20, "xp": 4470 }],
  "activities": { "clue_scrolls_all": 3 }
}"#;

    const CURRENT: &str = r#"{
  "capturedAt": "2026-01-02T00:00:00Z",
  "totalLevel": 101,
  "totalXp": 1600,
  "combatLevel": 20,
  "skills": [{ "skill": "attack", "level": 21, "xp": 5018 }],
  "activities": { "clue_scrolls_all": 3, "zulrah": 2 }
}"#;

    fn setup() -> (TempDir, DiffArgs) {
        let temp = TempDir::new().unwrap();
        let previous = temp.path().join("previous.json");
        let current = temp.path().join("current.json");
        fs::write(&previous, PREVIOUS).unwrap();
        fs::write(&current, CURRENT).unwrap();
        let args = DiffArgs {
            previous,
            current,
            ..Default::default()
        };
        (temp, args)
    }

    #[test]
    fn shows_gains() {
        let (temp, args) = setup();
        let cmd = DiffCommand::new(temp.path(), None, args);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.value_of("Total XP"), Some("+600"));
        assert_eq!(ui.value_of("Total level"), Some("+1"));
        assert_eq!(ui.value_of("Attack"), Some("20 -> 21 (+1 levels, +548 xp)"));
        assert_eq!(ui.value_of("zulrah"), Some("0 -> 2 (+2)"));
        assert_eq!(ui.value_of("clue_scrolls_all"), None);
    }

    #[test]
    fn emits_json() {
        let (temp, mut args) = setup();
        args.json = true;
        let cmd = DiffCommand::new(temp.path(), None, args);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let value: serde_json::Value = serde_json::from_str(&ui.emitted_text()).unwrap();
        assert_eq!(value["totalXpDelta"], 600);
        assert_eq!(value["elapsedSeconds"], 86400);
        assert_eq!(value["skills"].as_array().unwrap().len(), 24);
    }

    #[test]
    fn missing_snapshot_is_an_error() {
        let (temp, mut args) = setup();
        args.current = temp.path().join("nope.json");
        let cmd = DiffCommand::new(temp.path(), None, args);
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();
        assert!(matches!(err, RunetrackError::SnapshotNotFound { .. }));
    }
}
