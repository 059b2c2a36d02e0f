//! Visual theme and styling.

use console::Style;

use crate::requirements::RequirementStatus;

/// Colors and icons for terminal output.
#[derive(Debug, Clone)]
pub struct RunetrackTheme {
    /// Met requirements and success messages (green).
    pub success: Style,
    /// Warnings (orange).
    pub warning: Style,
    /// Unmet requirements and errors (red bold).
    pub error: Style,
    /// Unknown statuses (yellow).
    pub unknown: Style,
    /// Secondary text.
    pub dim: Style,
    /// Headers (bold cyan).
    pub header: Style,
    /// Labels in key-value lines.
    pub key: Style,
    /// Positive deltas.
    pub gain: Style,
    /// Negative deltas.
    pub loss: Style,
}

impl Default for RunetrackTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl RunetrackTheme {
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            unknown: Style::new().yellow(),
            dim: Style::new().dim(),
            header: Style::new().bold().cyan(),
            key: Style::new().bold(),
            gain: Style::new().green(),
            loss: Style::new().red(),
        }
    }

    /// A theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            unknown: Style::new(),
            dim: Style::new(),
            header: Style::new(),
            key: Style::new(),
            gain: Style::new(),
            loss: Style::new(),
        }
    }

    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }

    /// Icon and label for a requirement status, e.g. `✓ Level 60 Agility`.
    pub fn format_status(&self, status: RequirementStatus, label: &str) -> String {
        let (style, icon) = match status {
            RequirementStatus::Met => (&self.success, status_icon(status)),
            RequirementStatus::NotMet => (&self.error, status_icon(status)),
            RequirementStatus::Unknown => (&self.unknown, status_icon(status)),
        };
        format!("{} {}", style.apply_to(icon), label)
    }

    /// A signed delta, colored by direction.
    pub fn format_delta(&self, delta: i64) -> String {
        match delta.signum() {
            1 => format!("{}", self.gain.apply_to(format!("+{}", delta))),
            -1 => format!("{}", self.loss.apply_to(delta)),
            _ => format!("{}", self.dim.apply_to("0")),
        }
    }
}

/// The icon shown next to a status.
pub fn status_icon(status: RequirementStatus) -> &'static str {
    match status {
        RequirementStatus::Met => "✓",
        RequirementStatus::NotMet => "✗",
        RequirementStatus::Unknown => "?",
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_messages_with_icons() {
        let theme = RunetrackTheme::plain();
        assert_eq!(theme.format_success("Done"), "✓ Done");
        assert_eq!(theme.format_warning("Careful"), "⚠ Careful");
        assert_eq!(theme.format_error("Failed"), "✗ Failed");
        assert_eq!(theme.format_header("Quests"), "Quests");
    }

    #[test]
    fn formats_statuses() {
        let theme = RunetrackTheme::plain();
        assert_eq!(
            theme.format_status(RequirementStatus::Met, "Level 60 Agility"),
            "✓ Level 60 Agility"
        );
        assert_eq!(
            theme.format_status(RequirementStatus::NotMet, "Combat level 100"),
            "✗ Combat level 100"
        );
        assert_eq!(
            theme.format_status(RequirementStatus::Unknown, "Complete quest 'x'"),
            "? Complete quest 'x'"
        );
    }

    #[test]
    fn formats_deltas() {
        let theme = RunetrackTheme::plain();
        assert_eq!(theme.format_delta(600), "+600");
        assert_eq!(theme.format_delta(-3), "-3");
        assert_eq!(theme.format_delta(0), "0");
    }
}
