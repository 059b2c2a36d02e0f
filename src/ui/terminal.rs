//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, OutputMode, RunetrackTheme, UserInterface};
use crate::requirements::RequirementStatus;

/// Writes styled output to stdout and errors to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: RunetrackTheme,
    mode: OutputMode,
}

impl TerminalUI {
    pub fn new(mode: OutputMode, colors: bool) -> Self {
        let theme = if colors {
            RunetrackTheme::new()
        } else {
            RunetrackTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }

    pub fn theme(&self) -> &RunetrackTheme {
        &self.theme
    }
}

/// Create a terminal UI, honoring `--no-color` and `NO_COLOR`.
pub fn create_ui(mode: OutputMode, no_color: bool) -> TerminalUI {
    TerminalUI::new(mode, !no_color && should_use_colors())
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "\n{}", self.theme.format_header(title)).ok();
        }
    }

    fn key_value(&mut self, key: &str, value: &str) {
        writeln!(self.out, "  {} {}", self.theme.key.apply_to(format!("{}:", key)), value).ok();
    }

    fn status(&mut self, status: RequirementStatus, label: &str, depth: usize) {
        writeln!(
            self.out,
            "{}{}",
            "  ".repeat(depth),
            self.theme.format_status(status, label)
        )
        .ok();
    }

    fn emit(&mut self, text: &str) {
        writeln!(self.out, "{}", text).ok();
    }
}
