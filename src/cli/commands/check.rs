//! Check command implementation.
//!
//! The `runetrack check` command evaluates one inline requirement and exits
//! with its status: 0 for MET, 1 for NOT_MET, 3 for UNKNOWN.

use std::path::{Path, PathBuf};

use crate::cli::args::CheckArgs;
use crate::document::{parse_document, DocumentFormat};
use crate::error::{Result, RunetrackError};
use crate::requirements::{explain, Requirement, RequirementStatus};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::{show_nodes, to_json};
use super::workspace::Workspace;

/// Parse an inline requirement. YAML accepts JSON too.
pub fn parse_requirement(text: &str) -> Result<Requirement> {
    parse_document(text, DocumentFormat::Yaml)
        .map_err(|message| RunetrackError::RequirementParseError { message })
}

/// Exit code for a requirement status.
pub fn status_exit_code(status: RequirementStatus) -> i32 {
    match status {
        RequirementStatus::Met => 0,
        RequirementStatus::NotMet => 1,
        RequirementStatus::Unknown => 3,
    }
}

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let requirement = parse_requirement(&self.args.requirement)?;
        let workspace = Workspace::load(&self.project_root, self.config_path.as_deref())?;
        let facts_path = workspace.facts_path(self.args.facts.as_deref());
        let facts = workspace.load_facts(facts_path.as_deref(), ui)?;

        let node = explain(&requirement, &facts);
        tracing::debug!("{} -> {}", node.label, node.status.as_str());

        if workspace.wants_json(self.args.json) {
            ui.emit(&to_json(&node)?);
        } else {
            show_nodes(ui, std::slice::from_ref(&node), 0, true);
        }

        let code = status_exit_code(node.status);
        Ok(if code == 0 {
            CommandResult::success()
        } else {
            CommandResult::failure(code)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::Skill;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn setup(facts: &str) -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("facts.yml");
        fs::write(&path, facts).unwrap();
        (temp, path)
    }

    fn check(temp: &TempDir, facts: &Path, requirement: &str) -> (CommandResult, MockUI) {
        let args = CheckArgs {
            requirement: requirement.to_string(),
            facts: Some(facts.to_path_buf()),
            json: false,
        };
        let cmd = CheckCommand::new(temp.path(), None, args);
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();
        (result, ui)
    }

    #[test]
    fn parses_json_and_yaml() {
        assert_eq!(
            parse_requirement(r#"{"type":"skill-level","skill":"agility","level":60}"#).unwrap(),
            Requirement::skill(Skill::Agility, 60)
        );
        assert_eq!(
            parse_requirement("type: quest-complete\nquestId: cooks_assistant").unwrap(),
            Requirement::quest("cooks_assistant")
        );
    }

    #[test]
    fn rejects_unknown_type() {
        let err = parse_requirement(r#"{"type":"quest-points","points":32}"#).unwrap_err();
        assert!(matches!(err, RunetrackError::RequirementParseError { .. }));
    }

    #[test]
    fn exit_code_follows_status() {
        let (temp, facts) = setup("sync:\n  skillLevels: { agility: 70 }\n");

        let (result, ui) = check(&temp, &facts, "{type: skill-level, skill: agility, level: 60}");
        assert_eq!(result.exit_code, 0);
        assert_eq!(ui.statuses()[0].0, RequirementStatus::Met);

        let (result, _) = check(&temp, &facts, "{type: skill-level, skill: agility, level: 80}");
        assert_eq!(result.exit_code, 1);

        let (result, _) = check(&temp, &facts, "{type: skill-level, skill: magic, level: 1}");
        assert_eq!(result.exit_code, 3);
    }

    #[test]
    fn shows_whole_tree() {
        let (temp, facts) = setup("sync:\n  quests: { cooks_assistant: false }\n");
        let requirement = r#"
type: any-of
requirements:
  - type: quest-complete
    questId: cooks_assistant
  - type: item-possessed
    itemId: ring_of_wealth
"#;
        let (result, ui) = check(&temp, &facts, requirement);

        assert_eq!(result.exit_code, 3);
        assert_eq!(ui.statuses().len(), 3);
        assert_eq!(ui.statuses()[1].0, RequirementStatus::NotMet);
        assert_eq!(ui.statuses()[2].0, RequirementStatus::Unknown);
        assert_eq!(ui.statuses()[2].2, 1);
    }

    #[test]
    fn emits_json_node() {
        let (temp, facts) = setup("sync:\n  skillLevels: { attack: 1 }\n");
        let args = CheckArgs {
            requirement: "{type: combat-level, level: 3}".into(),
            facts: Some(facts),
            json: true,
        };
        let cmd = CheckCommand::new(temp.path(), None, args);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let value: serde_json::Value = serde_json::from_str(&ui.emitted_text()).unwrap();
        assert_eq!(value["kind"], "combat-level");
        assert_eq!(value["status"], "UNKNOWN");
    }
}
