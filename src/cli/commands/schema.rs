//! Schema command implementation.
//!
//! The `runetrack schema` command prints the JSON Schema content authors can
//! point their editors at.

use crate::cli::args::{SchemaArgs, SchemaKind};
use crate::content::{bundle_schema, requirement_schema};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::to_json;

/// The schema command implementation.
pub struct SchemaCommand {
    args: SchemaArgs,
}

impl SchemaCommand {
    /// Create a new schema command.
    pub fn new(args: SchemaArgs) -> Self {
        Self { args }
    }
}

impl Command for SchemaCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let schema = match self.args.kind {
            SchemaKind::Bundle => bundle_schema(),
            SchemaKind::Requirement => requirement_schema(),
        };
        ui.emit(&to_json(&schema)?);
        Ok(CommandResult::success())
    }
}
