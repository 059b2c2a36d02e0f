//! Requirement status types.
//!
//! Each requirement evaluation produces a [`RequirementStatus`]. `Unknown`
//! means a fact was missing, never that the answer was negative.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The tri-state result of evaluating a requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequirementStatus {
    /// The requirement holds.
    Met,
    /// The requirement is known not to hold.
    NotMet,
    /// A fact needed to decide is absent.
    Unknown,
}

impl RequirementStatus {
    /// Map a boolean fact lookup: `true` is met, `false` is not met, absent is unknown.
    pub fn from_fact(fact: Option<bool>) -> Self {
        match fact {
            Some(true) => RequirementStatus::Met,
            Some(false) => RequirementStatus::NotMet,
            None => RequirementStatus::Unknown,
        }
    }

    /// Compare an optional value against a threshold.
    pub fn at_least<T: PartialOrd>(value: Option<T>, threshold: T) -> Self {
        match value {
            Some(v) if v >= threshold => RequirementStatus::Met,
            Some(_) => RequirementStatus::NotMet,
            None => RequirementStatus::Unknown,
        }
    }

    /// Whether the requirement is satisfied.
    pub fn is_met(&self) -> bool {
        matches!(self, RequirementStatus::Met)
    }

    /// Whether the requirement is known to fail.
    pub fn is_not_met(&self) -> bool {
        matches!(self, RequirementStatus::NotMet)
    }

    /// Whether the answer depends on missing facts.
    pub fn is_unknown(&self) -> bool {
        matches!(self, RequirementStatus::Unknown)
    }

    /// Combine statuses under all-of.
    ///
    /// Not met dominates unknown; met only when every status is met.
    /// An empty input is met.
    pub fn all<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = RequirementStatus>,
    {
        let mut saw_unknown = false;
        for status in statuses {
            match status {
                RequirementStatus::NotMet => return RequirementStatus::NotMet,
                RequirementStatus::Unknown => saw_unknown = true,
                RequirementStatus::Met => {}
            }
        }
        if saw_unknown {
            RequirementStatus::Unknown
        } else {
            RequirementStatus::Met
        }
    }

    /// Combine statuses under any-of.
    ///
    /// Met dominates unknown; not met only when every status is not met.
    /// An empty input is not met.
    pub fn any<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = RequirementStatus>,
    {
        let mut saw_unknown = false;
        for status in statuses {
            match status {
                RequirementStatus::Met => return RequirementStatus::Met,
                RequirementStatus::Unknown => saw_unknown = true,
                RequirementStatus::NotMet => {}
            }
        }
        if saw_unknown {
            RequirementStatus::Unknown
        } else {
            RequirementStatus::NotMet
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RequirementStatus::Met => "MET",
            RequirementStatus::NotMet => "NOT_MET",
            RequirementStatus::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for RequirementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
