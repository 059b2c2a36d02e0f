//! Combat command implementation.
//!
//! The `runetrack combat` command calculates a combat level from the seven
//! combat skills.

use serde_json::json;
use std::path::{Path, PathBuf};

use crate::cli::args::CombatArgs;
use crate::combat::{calculate_combat_level, CombatStats};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::to_json;
use super::workspace::Workspace;

/// The combat command implementation.
pub struct CombatCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: CombatArgs,
}

impl CombatCommand {
    /// Create a new combat command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: CombatArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    pub fn stats(&self) -> CombatStats {
        CombatStats {
            attack: self.args.attack,
            strength: self.args.strength,
            defence: self.args.defence,
            hitpoints: self.args.hitpoints,
            prayer: self.args.prayer,
            ranged: self.args.ranged,
            magic: self.args.magic,
        }
    }
}

impl Command for CombatCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let workspace = Workspace::load(&self.project_root, self.config_path.as_deref())?;
        let level = calculate_combat_level(&self.stats());

        if workspace.wants_json(self.args.json) {
            ui.emit(&to_json(&json!({ "combatLevel": level }))?);
        } else {
            ui.key_value("Combat level", &level.to_string());
        }
        Ok(CommandResult::success())
    }
}
