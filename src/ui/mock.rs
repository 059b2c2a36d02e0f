//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.

use super::{OutputMode, UserInterface};
use crate::requirements::RequirementStatus;

/// Captures every UI call.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    key_values: Vec<(String, String)>,
    statuses: Vec<(RequirementStatus, String, usize)>,
    emitted: Vec<String>,
}

impl MockUI {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn key_values(&self) -> &[(String, String)] {
        &self.key_values
    }

    /// Value of the last `key_value` call for `key`.
    pub fn value_of(&self, key: &str) -> Option<&str> {
        self.key_values
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn statuses(&self) -> &[(RequirementStatus, String, usize)] {
        &self.statuses
    }

    pub fn emitted(&self) -> &[String] {
        &self.emitted
    }

    /// Everything emitted, joined by newlines.
    pub fn emitted_text(&self) -> String {
        self.emitted.join("\n")
    }

    /// Whether any captured text contains `needle`.
    pub fn has_output(&self, needle: &str) -> bool {
        self.messages
            .iter()
            .chain(&self.successes)
            .chain(&self.warnings)
            .chain(&self.errors)
            .chain(&self.headers)
            .chain(&self.emitted)
            .chain(self.statuses.iter().map(|(_, label, _)| label))
            .any(|s| s.contains(needle))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.key_values.push((key.to_string(), value.to_string()));
    }

    fn status(&mut self, status: RequirementStatus, label: &str, depth: usize) {
        self.statuses.push((status, label.to_string(), depth));
    }

    fn emit(&mut self, text: &str) {
        self.emitted.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_calls() {
        let mut ui = MockUI::new();
        ui.message("Loading content");
        ui.success("Done");
        ui.warning("2 warnings");
        ui.error("Boom");
        ui.show_header("Quests");
        ui.key_value("Total XP", "+600");
        ui.status(RequirementStatus::Unknown, "Complete quest 'x'", 2);
        ui.emit("{}");

        assert_eq!(ui.messages(), ["Loading content"]);
        assert_eq!(ui.successes(), ["Done"]);
        assert_eq!(ui.warnings(), ["2 warnings"]);
        assert_eq!(ui.errors(), ["Boom"]);
        assert_eq!(ui.headers(), ["Quests"]);
        assert_eq!(ui.value_of("Total XP"), Some("+600"));
        assert_eq!(ui.statuses()[0].2, 2);
        assert_eq!(ui.emitted_text(), "{}");
        assert!(ui.has_output("quest 'x'"));
        assert!(!ui.has_output("nothing"));
    }

    #[test]
    fn mode_is_configurable() {
        assert_eq!(MockUI::new().output_mode(), OutputMode::Normal);
        assert_eq!(
            MockUI::with_mode(OutputMode::Quiet).output_mode(),
            OutputMode::Quiet
        );
    }
}
