//! User interface output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] writing styled text to the terminal
//! - [`MockUI`] capturing everything for tests
//!
//! # Example
//!
//! ```
//! use runetrack::requirements::RequirementStatus;
//! use runetrack::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_header("Quests");
//! ui.status(RequirementStatus::Met, "Level 60 Agility", 1);
//! assert_eq!(ui.statuses().len(), 1);
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, status_icon, RunetrackTheme};

use crate::requirements::RequirementStatus;

/// Trait for user interface interactions.
///
/// Commands write through this trait so tests can capture output.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Shown in every mode.
    fn error(&mut self, msg: &str);

    /// Show a section header.
    fn show_header(&mut self, title: &str);

    /// Show a `key: value` line.
    fn key_value(&mut self, key: &str, value: &str);

    /// Show a requirement status line, indented by `depth`.
    fn status(&mut self, status: RequirementStatus, label: &str, depth: usize);

    /// Write machine-readable output verbatim. Shown in every mode.
    fn emit(&mut self, text: &str);
}
