//! Structural validation of content bundles.
//!
//! Validation collects every problem instead of stopping at the first, so a
//! bundle author can fix them in one pass. Issues are either errors, which
//! make the bundle unusable, or warnings, which are reported and tolerated
//! (a reference to a quest defined in another bundle, for example).

use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use crate::content::definitions::ContentBundle;
use crate::error::{Result, RunetrackError};
use crate::requirements::{DiaryTier, Requirement};

static SLUG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:_[a-z0-9]+)*$").expect("slug regex must compile"));

static NON_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("non-slug regex must compile"));

const MAX_SKILL_LEVEL: u32 = 99;
const MIN_COMBAT_LEVEL: u32 = 3;
const MAX_COMBAT_LEVEL: u32 = 126;

/// Turn a display name into a content id: `"Rune & Fire"` → `"rune_and_fire"`.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase().replace('&', "and");
    NON_SLUG_CHARS
        .replace_all(&lowered, "_")
        .trim_matches('_')
        .to_string()
}

/// How serious a validation issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// One problem found in a bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Rule identifier, e.g. `duplicate-id`.
    pub rule: &'static str,
    pub severity: Severity,
    pub message: String,
    /// Where in the bundle, e.g. `diaries[varrock].easy.tasks[mine_iron]`.
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.severity, self.rule, self.location, self.message
        )
    }
}

/// Every issue found in a bundle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Whether the bundle is usable. In strict mode warnings count too.
    pub fn passes(&self, strict: bool) -> bool {
        if strict {
            self.is_clean()
        } else {
            !self.has_errors()
        }
    }
}

/// Validate a bundle and return every issue found.
pub fn validate_bundle(bundle: &ContentBundle) -> ValidationReport {
    let mut v = Validator {
        bundle,
        issues: Vec::new(),
    };

    v.check_quests();
    v.check_diaries();
    v.check_combat_achievements();
    v.check_guides();

    tracing::debug!(
        "Validated bundle: {} issue(s) across {} quest(s), {} diary(ies)",
        v.issues.len(),
        bundle.quests.len(),
        bundle.diaries.len()
    );

    ValidationReport { issues: v.issues }
}

/// Validate a bundle and fail if it is unusable.
///
/// # Errors
///
/// Returns `ContentValidationError` if any error is found, or any issue at
/// all when `strict` is set.
pub fn ensure_valid(bundle: &ContentBundle, strict: bool) -> Result<ValidationReport> {
    let report = validate_bundle(bundle);
    if report.passes(strict) {
        return Ok(report);
    }

    let failing: Vec<&ValidationIssue> = if strict {
        report.issues.iter().collect()
    } else {
        report.errors().collect()
    };
    let first = failing
        .first()
        .map(|i| i.to_string())
        .unwrap_or_default();
    Err(RunetrackError::ContentValidationError {
        count: failing.len(),
        first,
    })
}

struct Validator<'a> {
    bundle: &'a ContentBundle,
    issues: Vec<ValidationIssue>,
}

impl Validator<'_> {
    fn push(
        &mut self,
        rule: &'static str,
        severity: Severity,
        location: &str,
        message: String,
    ) -> &mut ValidationIssue {
        self.issues.push(ValidationIssue {
            rule,
            severity,
            message,
            location: location.to_string(),
            suggestion: None,
        });
        let last = self.issues.len() - 1;
        &mut self.issues[last]
    }

    fn check_id(&mut self, id: &str, name: &str, location: &str) {
        if id.is_empty() {
            self.push(
                "missing-id",
                Severity::Error,
                location,
                "Definition has an empty id".to_string(),
            );
        } else if !SLUG_PATTERN.is_match(id) {
            let suggestion = slugify(if name.is_empty() { id } else { name });
            self.push(
                "invalid-id",
                Severity::Warning,
                location,
                format!("Id '{}' is not lowercase snake_case", id),
            )
            .suggestion = Some(format!("Use '{}'", suggestion));
        }
    }

    fn check_duplicates<'b, I>(&mut self, kind: &str, ids: I)
    where
        I: IntoIterator<Item = &'b str>,
    {
        let mut seen = HashSet::new();
        for id in ids {
            if !seen.insert(id) {
                self.push(
                    "duplicate-id",
                    Severity::Error,
                    &format!("{}[{}]", kind, id),
                    format!("Id '{}' is defined more than once", id),
                );
            }
        }
    }

    fn check_quests(&mut self) {
        let bundle = self.bundle;
        self.check_duplicates("quests", bundle.quests.iter().map(|q| q.id.as_str()));

        for quest in &bundle.quests {
            let location = format!("quests[{}]", quest.id);
            self.check_id(&quest.id, &quest.name, &location);
            for req in &quest.requirements {
                self.check_requirement(req, &location);
                let mut self_ref = false;
                req.visit(&mut |r| {
                    if let Requirement::QuestComplete { quest_id } = r {
                        self_ref |= *quest_id == quest.id;
                    }
                });
                if self_ref {
                    self.push(
                        "self-reference",
                        Severity::Error,
                        &location,
                        format!("Quest '{}' requires itself", quest.id),
                    );
                }
            }
        }
    }

    fn check_diaries(&mut self) {
        let bundle = self.bundle;
        self.check_duplicates("diaries", bundle.diaries.iter().map(|d| d.id.as_str()));

        for diary in &bundle.diaries {
            let location = format!("diaries[{}]", diary.id);
            self.check_id(&diary.id, &diary.name, &location);

            let mut tiers_seen = HashSet::new();
            for tier in &diary.tiers {
                let tier_location = format!("{}.{}", location, tier.tier);
                if !tiers_seen.insert(tier.tier) {
                    self.push(
                        "duplicate-tier",
                        Severity::Error,
                        &tier_location,
                        format!("Diary '{}' defines the {} tier twice", diary.id, tier.tier),
                    );
                }

                for req in &tier.requirements {
                    self.check_requirement(req, &tier_location);
                    self.check_diary_self_reference(req, &diary.id, tier.tier, &tier_location);
                }

                let mut tasks_seen = HashSet::new();
                for task in &tier.tasks {
                    let task_location = format!("{}.tasks[{}]", tier_location, task.id);
                    self.check_id(&task.id, &task.description, &task_location);
                    if !tasks_seen.insert(task.id.as_str()) {
                        self.push(
                            "duplicate-task",
                            Severity::Error,
                            &task_location,
                            format!("Task '{}' appears twice in this tier", task.id),
                        );
                    }
                    for req in &task.requirements {
                        self.check_requirement(req, &task_location);
                        self.check_diary_self_reference(req, &diary.id, tier.tier, &task_location);
                    }
                }
            }
        }
    }

    fn check_diary_self_reference(
        &mut self,
        req: &Requirement,
        diary_id: &str,
        tier: DiaryTier,
        location: &str,
    ) {
        let mut self_ref = false;
        req.visit(&mut |r| {
            if let Requirement::DiaryComplete {
                diary_id: other,
                tier: other_tier,
            } = r
            {
                self_ref |= other == diary_id && *other_tier == tier;
            }
        });
        if self_ref {
            self.push(
                "self-reference",
                Severity::Error,
                location,
                format!("The {} {} tier requires its own completion", diary_id, tier),
            );
        }
    }

    fn check_combat_achievements(&mut self) {
        let bundle = self.bundle;
        self.check_duplicates(
            "combatAchievements",
            bundle.combat_achievements.iter().map(|c| c.id.as_str()),
        );

        let mut task_ids = HashSet::new();
        for ca in &bundle.combat_achievements {
            let location = format!("combatAchievements[{}]", ca.id);
            self.check_id(&ca.id, &ca.name, &location);
            if let Some(task_id) = ca.task_id {
                if !task_ids.insert(task_id) {
                    self.push(
                        "duplicate-task-id",
                        Severity::Error,
                        &location,
                        format!("Task id {} is used by more than one achievement", task_id),
                    );
                }
            }
            for req in &ca.requirements {
                self.check_requirement(req, &location);
            }
        }
    }

    fn check_guides(&mut self) {
        let bundle = self.bundle;
        self.check_duplicates("guides", bundle.guides.iter().map(|g| g.id.as_str()));

        for guide in &bundle.guides {
            let location = format!("guides[{}]", guide.id);
            self.check_id(&guide.id, &guide.name, &location);

            let mut steps_seen = HashSet::new();
            for step in &guide.steps {
                let step_location = format!("{}.steps[{}]", location, step.step_number);
                if !steps_seen.insert(step.step_number) {
                    self.push(
                        "duplicate-step",
                        Severity::Error,
                        &step_location,
                        format!("Step {} appears more than once", step.step_number),
                    );
                }
                for req in step.requirements.iter().chain(&step.optional_requirements) {
                    self.check_requirement(req, &step_location);
                }
                for stat in &step.meta.stats_needed {
                    if !(1..=MAX_SKILL_LEVEL).contains(&stat.level) {
                        self.push(
                            "skill-level-range",
                            Severity::Error,
                            &step_location,
                            format!("{} level {} is outside 1..=99", stat.skill, stat.level),
                        );
                    }
                }
            }
        }
    }

    /// Check a requirement tree, reporting each node's own problems.
    fn check_requirement(&mut self, req: &Requirement, location: &str) {
        match req {
            Requirement::SkillLevel { skill, level } => {
                if !(1..=MAX_SKILL_LEVEL).contains(level) {
                    self.push(
                        "skill-level-range",
                        Severity::Error,
                        location,
                        format!("{} level {} is outside 1..=99", skill, level),
                    );
                }
            }
            Requirement::CombinedSkillLevel {
                skills,
                total_level,
            } => {
                let max = MAX_SKILL_LEVEL * skills.len() as u32;
                if skills.is_empty() {
                    self.push(
                        "combined-level-range",
                        Severity::Error,
                        location,
                        "Combined skill level lists no skills".to_string(),
                    );
                } else if *total_level > max {
                    self.push(
                        "combined-level-range",
                        Severity::Error,
                        location,
                        format!(
                            "Combined level {} exceeds the maximum {} for {} skill(s)",
                            total_level,
                            max,
                            skills.len()
                        ),
                    );
                }
                let unique: HashSet<_> = skills.iter().collect();
                if unique.len() != skills.len() {
                    self.push(
                        "duplicate-skill",
                        Severity::Warning,
                        location,
                        "Combined skill level lists a skill twice".to_string(),
                    );
                }
            }
            Requirement::CombatLevel { level } => {
                if !(MIN_COMBAT_LEVEL..=MAX_COMBAT_LEVEL).contains(level) {
                    self.push(
                        "combat-level-range",
                        Severity::Error,
                        location,
                        format!("Combat level {} is outside 3..=126", level),
                    );
                }
            }
            Requirement::ActivityScore { activity, score } => {
                if *score < 0 {
                    self.push(
                        "negative-score",
                        Severity::Error,
                        location,
                        format!("Score {} for '{}' is negative", score, activity),
                    );
                }
            }
            Requirement::ManualCheck { label, .. } => {
                if label.trim().is_empty() {
                    self.push(
                        "empty-label",
                        Severity::Error,
                        location,
                        "Manual check has an empty label".to_string(),
                    );
                }
            }
            Requirement::QuestComplete { quest_id } => {
                if self.bundle.quest(quest_id).is_none() {
                    self.push(
                        "undefined-quest",
                        Severity::Warning,
                        location,
                        format!("Quest '{}' is not defined in this bundle", quest_id),
                    );
                }
            }
            Requirement::DiaryComplete { diary_id, tier } => {
                self.check_diary_reference(diary_id, *tier, None, location);
            }
            Requirement::DiaryTask {
                diary_id,
                tier,
                task_id,
            } => {
                self.check_diary_reference(diary_id, *tier, Some(task_id.as_str()), location);
            }
            Requirement::CombatAchievement { achievement_id, .. } => {
                if self.bundle.combat_achievement(achievement_id).is_none() {
                    self.push(
                        "undefined-combat-achievement",
                        Severity::Warning,
                        location,
                        format!(
                            "Combat achievement '{}' is not defined in this bundle",
                            achievement_id
                        ),
                    );
                }
            }
            Requirement::AllOf { requirements } | Requirement::AnyOf { requirements } => {
                if requirements.is_empty() {
                    self.push(
                        "empty-combinator",
                        Severity::Warning,
                        location,
                        format!("Empty {} has no requirements", req.kind()),
                    );
                }
                for child in requirements {
                    self.check_requirement(child, location);
                }
            }
            Requirement::UnlockFlag { .. } | Requirement::ItemPossessed { .. } => {}
        }
    }

    fn check_diary_reference(
        &mut self,
        diary_id: &str,
        tier: DiaryTier,
        task_id: Option<&str>,
        location: &str,
    ) {
        let Some(diary) = self.bundle.diary(diary_id) else {
            self.push(
                "undefined-diary",
                Severity::Warning,
                location,
                format!("Diary '{}' is not defined in this bundle", diary_id),
            );
            return;
        };
        let Some(tier_def) = diary.tier(tier) else {
            self.push(
                "undefined-diary-tier",
                Severity::Warning,
                location,
                format!("Diary '{}' has no {} tier", diary_id, tier),
            );
            return;
        };
        if let Some(task_id) = task_id {
            if !tier_def.tasks.iter().any(|t| t.id == task_id) {
                self.push(
                    "undefined-diary-task",
                    Severity::Warning,
                    location,
                    format!(
                        "Diary '{}' {} tier has no task '{}'",
                        diary_id, tier, task_id
                    ),
                );
            }
        }
    }
}
