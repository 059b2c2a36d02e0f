//! Evaluate command implementation.
//!
//! The `runetrack evaluate` command loads content bundles and a fact source
//! and reports the status of every quest, diary tier, combat achievement and
//! guide step, or of one quest or diary.

use std::path::{Path, PathBuf};

use crate::cli::args::EvaluateArgs;
use crate::content::ContentBundle;
use crate::error::{Result, RunetrackError};
use crate::evaluation::{
    evaluate_bundle, evaluate_diary, evaluate_quest, BundleEvaluation, DiaryEvaluation,
    QuestEvaluation, StatusCounts,
};
use crate::requirements::CharacterFacts;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::{completion_label, show_nodes, to_json};
use super::workspace::Workspace;

/// The evaluate command implementation.
pub struct EvaluateCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: EvaluateArgs,
}

impl EvaluateCommand {
    /// Create a new evaluate command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: EvaluateArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &EvaluateArgs {
        &self.args
    }

    fn run(
        &self,
        bundle: &ContentBundle,
        facts: &CharacterFacts,
        json: bool,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let expand = ui.output_mode().shows_detail();

        if let Some(id) = &self.args.quest {
            let quest = bundle
                .quest(id)
                .ok_or_else(|| RunetrackError::UnknownContent {
                    kind: "quest",
                    id: id.clone(),
                })?;
            let evaluation = evaluate_quest(quest, facts);
            if json {
                ui.emit(&to_json(&evaluation)?);
            } else {
                show_quest(ui, &evaluation, true);
            }
            return Ok(());
        }

        if let Some(id) = &self.args.diary {
            let diary = bundle
                .diary(id)
                .ok_or_else(|| RunetrackError::UnknownContent {
                    kind: "diary",
                    id: id.clone(),
                })?;
            let evaluation = evaluate_diary(diary, facts);
            if json {
                ui.emit(&to_json(&evaluation)?);
            } else {
                show_diary(ui, &evaluation, true);
            }
            return Ok(());
        }

        let evaluation = evaluate_bundle(bundle, facts);
        if json {
            ui.emit(&to_json(&evaluation)?);
        } else {
            show_bundle(ui, &evaluation, expand);
        }
        Ok(())
    }
}

impl Command for EvaluateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut workspace = Workspace::load(&self.project_root, self.config_path.as_deref())?;

        let paths = workspace.content_paths(&self.args.content);
        if paths.is_empty() {
            ui.error("No content configured. Pass --content or set `content` in .runetrack/config.yml");
            return Ok(CommandResult::missing_input());
        }

        let bundle = workspace.load_content(&paths)?;
        let facts_path = workspace.facts_path(self.args.facts.as_deref());
        let facts = workspace.load_facts(facts_path.as_deref(), ui)?;

        self.run(&bundle, &facts, workspace.wants_json(self.args.json), ui)?;
        Ok(CommandResult::success())
    }
}

fn show_quest(ui: &mut dyn UserInterface, quest: &QuestEvaluation, expand: bool) {
    ui.status(
        quest.status,
        &format!("{}{}", quest.name, completion_label(quest.completed)),
        1,
    );
    if expand || !quest.status.is_met() {
        show_nodes(ui, &quest.requirements, 2, expand);
    }
}

fn show_diary(ui: &mut dyn UserInterface, diary: &DiaryEvaluation, expand: bool) {
    ui.show_header(&format!("{} ({})", diary.name, diary.region));
    for tier in &diary.tiers {
        ui.status(
            tier.aggregate_status,
            &format!(
                "{} {}/{} tasks{}",
                tier.name,
                tier.tasks_met,
                tier.tasks_total,
                completion_label(tier.completed)
            ),
            1,
        );
        if !expand && tier.aggregate_status.is_met() {
            continue;
        }
        show_nodes(ui, &tier.requirements, 2, expand);
        for task in &tier.tasks {
            if expand || !task.status.is_met() {
                ui.status(
                    task.status,
                    &format!("{}{}", task.description, completion_label(task.completed)),
                    2,
                );
                show_nodes(ui, &task.requirements, 3, expand);
            }
        }
    }
}

fn show_counts(ui: &mut dyn UserInterface, label: &str, counts: &StatusCounts) {
    if counts.total == 0 {
        return;
    }
    ui.key_value(
        label,
        &format!(
            "{} met, {} not met, {} unknown, {} completed of {}",
            counts.met, counts.not_met, counts.unknown, counts.completed, counts.total
        ),
    );
}

fn show_bundle(ui: &mut dyn UserInterface, evaluation: &BundleEvaluation, expand: bool) {
    if !evaluation.quests.is_empty() {
        ui.show_header("Quests");
        for quest in &evaluation.quests {
            show_quest(ui, quest, expand);
        }
    }

    for diary in &evaluation.diaries {
        show_diary(ui, diary, expand);
    }

    if !evaluation.combat_achievements.is_empty() {
        ui.show_header("Combat achievements");
        for ca in &evaluation.combat_achievements {
            ui.status(
                ca.status,
                &format!("{} [{:?}]{}", ca.name, ca.tier, completion_label(ca.completed)),
                1,
            );
            if expand || !ca.status.is_met() {
                show_nodes(ui, &ca.requirements, 2, expand);
            }
        }
    }

    for guide in &evaluation.guides {
        ui.show_header(&guide.name);
        if let Some(next) = guide.next_step() {
            ui.key_value(
                "Next step",
                &format!("{}. {}", next.step_number, next.title),
            );
        }
        for step in &guide.steps {
            ui.status(
                step.status,
                &format!("{}. {}", step.step_number, step.title),
                1,
            );
            if expand || !step.status.is_met() {
                show_nodes(ui, &step.requirements, 2, expand);
            }
        }
    }

    let summary = &evaluation.summary;
    ui.show_header("Summary");
    show_counts(ui, "Quests", &summary.quests);
    show_counts(ui, "Diary tiers", &summary.diary_tiers);
    show_counts(ui, "Diary tasks", &summary.diary_tasks);
    show_counts(ui, "Combat achievements", &summary.combat_achievements);
    show_counts(ui, "Guide steps", &summary.guide_steps);
}
