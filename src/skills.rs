//! The fixed skill enumeration.
//!
//! Every skill name that appears in a snapshot, a fact map, or a requirement
//! is drawn from [`Skill::ALL`]. Serialized names are lowercase.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An Old School RuneScape skill.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Skill {
    Attack,
    Defence,
    Strength,
    Hitpoints,
    Ranged,
    Prayer,
    Magic,
    Cooking,
    Woodcutting,
    Fletching,
    Fishing,
    Firemaking,
    Crafting,
    Smithing,
    Mining,
    Herblore,
    Agility,
    Thieving,
    Slayer,
    Farming,
    Runecraft,
    Hunter,
    Construction,
    Sailing,
}

impl Skill {
    /// All skills, in hiscores order.
    pub const ALL: [Skill; 24] = [
        Skill::Attack,
        Skill::Defence,
        Skill::Strength,
        Skill::Hitpoints,
        Skill::Ranged,
        Skill::Prayer,
        Skill::Magic,
        Skill::Cooking,
        Skill::Woodcutting,
        Skill::Fletching,
        Skill::Fishing,
        Skill::Firemaking,
        Skill::Crafting,
        Skill::Smithing,
        Skill::Mining,
        Skill::Herblore,
        Skill::Agility,
        Skill::Thieving,
        Skill::Slayer,
        Skill::Farming,
        Skill::Runecraft,
        Skill::Hunter,
        Skill::Construction,
        Skill::Sailing,
    ];

    /// Lowercase canonical name.
    pub fn as_str(self) -> &'static str {
        match self {
            Skill::Attack => "attack",
            Skill::Defence => "defence",
            Skill::Strength => "strength",
            Skill::Hitpoints => "hitpoints",
            Skill::Ranged => "ranged",
            Skill::Prayer => "prayer",
            Skill::Magic => "magic",
            Skill::Cooking => "cooking",
            Skill::Woodcutting => "woodcutting",
            Skill::Fletching => "fletching",
            Skill::Fishing => "fishing",
            Skill::Firemaking => "firemaking",
            Skill::Crafting => "crafting",
            Skill::Smithing => "smithing",
            Skill::Mining => "mining",
            Skill::Herblore => "herblore",
            Skill::Agility => "agility",
            Skill::Thieving => "thieving",
            Skill::Slayer => "slayer",
            Skill::Farming => "farming",
            Skill::Runecraft => "runecraft",
            Skill::Hunter => "hunter",
            Skill::Construction => "construction",
            Skill::Sailing => "sailing",
        }
    }

    /// Display name with a leading capital.
    pub fn display_name(self) -> &'static str {
        match self {
            Skill::Attack => "Attack",
            Skill::Defence => "Defence",
            Skill::Strength => "Strength",
            Skill::Hitpoints => "Hitpoints",
            Skill::Ranged => "Ranged",
            Skill::Prayer => "Prayer",
            Skill::Magic => "Magic",
            Skill::Cooking => "Cooking",
            Skill::Woodcutting => "Woodcutting",
            Skill::Fletching => "Fletching",
            Skill::Fishing => "Fishing",
            Skill::Firemaking => "Firemaking",
            Skill::Crafting => "Crafting",
            Skill::Smithing => "Smithing",
            Skill::Mining => "Mining",
            Skill::Herblore => "Herblore",
            Skill::Agility => "Agility",
            Skill::Thieving => "Thieving",
            Skill::Slayer => "Slayer",
            Skill::Farming => "Farming",
            Skill::Runecraft => "Runecraft",
            Skill::Hunter => "Hunter",
            Skill::Construction => "Construction",
            Skill::Sailing => "Sailing",
        }
    }

    /// Parse a skill name, case-insensitively.
    ///
    /// Accepts the abbreviations guide authors commonly use
    /// (`hp`, `wc`, `fm`, `rc`, `range`, `defense`, `runecrafting`).
    pub fn parse(value: &str) -> Option<Self> {
        let lower = value.trim().to_ascii_lowercase();
        let canonical = match lower.as_str() {
            "defense" => "defence",
            "hp" => "hitpoints",
            "range" => "ranged",
            "wc" => "woodcutting",
            "fm" => "firemaking",
            "rc" | "runecrafting" => "runecraft",
            other => other,
        };
        Skill::ALL.into_iter().find(|s| s.as_str() == canonical)
    }

    /// Whether this skill feeds the combat level formula.
    pub fn is_combat(self) -> bool {
        matches!(
            self,
            Skill::Attack
                | Skill::Strength
                | Skill::Defence
                | Skill::Hitpoints
                | Skill::Prayer
                | Skill::Ranged
                | Skill::Magic
        )
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Skill {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Skill::parse(s).ok_or_else(|| format!("unknown skill: {}", s))
    }
}
