//! Shared display helpers.
//!
//! Used by `evaluate`, `check`, `diff` and `summary` to render evaluation
//! trees and progress diffs consistently.

use chrono::TimeDelta;
use serde::Serialize;

use crate::cache::format_duration;
use crate::error::Result;
use crate::progress::ProgressDiff;
use crate::requirements::RequirementNode;
use crate::ui::UserInterface;

/// Serialize a value as pretty JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value).map_err(anyhow::Error::from)?)
}

/// A signed number with an explicit plus for gains.
pub fn signed(value: i64) -> String {
    if value > 0 {
        format!("+{}", value)
    } else {
        value.to_string()
    }
}

/// Label for a completion flag.
pub fn completion_label(completed: Option<bool>) -> &'static str {
    match completed {
        Some(true) => " (completed)",
        Some(false) => "",
        None => " (completion unknown)",
    }
}

/// Print requirement trees.
///
/// Met subtrees are collapsed unless `expand` is set, so the output points
/// at what is still missing.
pub fn show_nodes(
    ui: &mut dyn UserInterface,
    nodes: &[RequirementNode],
    depth: usize,
    expand: bool,
) {
    for node in nodes {
        ui.status(node.status, &node.label, depth);
        if expand || !node.status.is_met() {
            show_nodes(ui, &node.children, depth + 1, expand);
        }
    }
}

/// Print a progress diff.
pub fn show_diff(ui: &mut dyn UserInterface, diff: &ProgressDiff, all: bool) {
    ui.show_header(&format!(
        "Progress {} to {}",
        diff.from.format("%Y-%m-%d %H:%M"),
        diff.to.format("%Y-%m-%d %H:%M")
    ));
    ui.key_value(
        "Elapsed",
        &format_duration(TimeDelta::try_seconds(diff.elapsed_seconds.max(0)).unwrap_or_default()),
    );
    ui.key_value("Total level", &signed(diff.total_level_delta));
    ui.key_value("Total XP", &signed(diff.total_xp_delta));
    ui.key_value("Combat level", &signed(diff.combat_level_delta));

    let skills: Vec<_> = diff
        .skills
        .iter()
        .filter(|s| all || s.is_changed())
        .collect();
    if !skills.is_empty() {
        ui.show_header("Skills");
        for s in skills {
            ui.key_value(
                s.skill.display_name(),
                &format!(
                    "{} -> {} ({} levels, {} xp)",
                    s.previous_level,
                    s.current_level,
                    signed(s.level_delta),
                    signed(s.xp_delta)
                ),
            );
        }
    }

    let activities: Vec<_> = diff
        .activities
        .iter()
        .filter(|a| all || a.delta != 0)
        .collect();
    if !activities.is_empty() {
        ui.show_header("Activities");
        for a in activities {
            ui.key_value(
                &a.activity,
                &format!("{} -> {} ({})", a.previous, a.current, signed(a.delta)),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::{diff_snapshots, ProgressSnapshot};
    use crate::requirements::RequirementStatus;
    use crate::skills::Skill;
    use crate::ui::MockUI;
    use chrono::{TimeZone, Utc};

    fn node(status: RequirementStatus, label: &str, children: Vec<RequirementNode>) -> RequirementNode {
        RequirementNode {
            kind: "all-of",
            label: label.to_string(),
            status,
            children,
        }
    }

    #[test]
    fn signed_values() {
        assert_eq!(signed(600), "+600");
        assert_eq!(signed(0), "0");
        assert_eq!(signed(-2), "-2");
    }

    #[test]
    fn met_subtrees_collapse() {
        let tree = vec![
            node(
                RequirementStatus::Met,
                "met parent",
                vec![node(RequirementStatus::Met, "hidden child", vec![])],
            ),
            node(
                RequirementStatus::NotMet,
                "failing parent",
                vec![node(RequirementStatus::NotMet, "shown child", vec![])],
            ),
        ];

        let mut ui = MockUI::new();
        show_nodes(&mut ui, &tree, 0, false);
        assert!(!ui.has_output("hidden child"));
        assert!(ui.has_output("shown child"));
        assert_eq!(ui.statuses()[2].2, 1);

        let mut ui = MockUI::new();
        show_nodes(&mut ui, &tree, 0, true);
        assert!(ui.has_output("hidden child"));
    }

    #[test]
    fn diff_hides_unchanged_rows() {
        let previous = ProgressSnapshot::new(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap())
            .with_totals(32, 1000, 3)
            .with_skill(Skill::Attack, 1, 0);
        let current = ProgressSnapshot::new(Utc.with_ymd_and_hms(2026, 1, 8, 0, 0, 0).unwrap())
            .with_totals(33, 1600, 3)
            .with_skill(Skill::Attack, 2, 600)
            .with_activity("zulrah", 5);
        let diff = diff_snapshots(&previous, &current);

        let mut ui = MockUI::new();
        show_diff(&mut ui, &diff, false);
        assert_eq!(ui.value_of("Total XP"), Some("+600"));
        assert_eq!(ui.value_of("Elapsed"), Some("7d"));
        assert_eq!(ui.value_of("Attack"), Some("1 -> 2 (+1 levels, +600 xp)"));
        assert_eq!(ui.value_of("zulrah"), Some("0 -> 5 (+5)"));
        assert_eq!(ui.value_of("Strength"), None);

        let mut ui = MockUI::new();
        show_diff(&mut ui, &diff, true);
        assert_eq!(ui.value_of("Strength"), Some("1 -> 1 (0 levels, 0 xp)"));
    }
}
