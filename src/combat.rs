//! Combat level calculation.
//!
//! Implements the standard formula:
//!
//! ```text
//! base   = (defence + hitpoints + floor(prayer / 2)) / 4
//! melee  = 0.325 * (attack + strength)
//! ranged = 0.325 * floor(ranged * 1.5)
//! magic  = 0.325 * floor(magic * 1.5)
//! level  = floor(base + max(melee, ranged, magic))
//! ```
//!
//! # Example
//!
//! ```
//! use runetrack::combat::{calculate_combat_level, CombatStats};
//!
//! assert_eq!(calculate_combat_level(&CombatStats::minimum()), 3);
//! ```

use crate::skills::Skill;

/// The seven levels that feed the combat formula.
///
/// Inputs are raw numbers; [`calculate_combat_level`] normalizes them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombatStats {
    pub attack: f64,
    pub strength: f64,
    pub defence: f64,
    pub hitpoints: f64,
    pub prayer: f64,
    pub ranged: f64,
    pub magic: f64,
}

impl CombatStats {
    /// A fresh account: every combat skill at 1 except Hitpoints at 10.
    pub fn minimum() -> Self {
        Self {
            attack: 1.0,
            strength: 1.0,
            defence: 1.0,
            hitpoints: 10.0,
            prayer: 1.0,
            ranged: 1.0,
            magic: 1.0,
        }
    }

    /// Build stats from a level lookup. Returns `None` if any combat skill is missing.
    pub fn from_levels<F>(mut lookup: F) -> Option<Self>
    where
        F: FnMut(Skill) -> Option<u32>,
    {
        Some(Self {
            attack: f64::from(lookup(Skill::Attack)?),
            strength: f64::from(lookup(Skill::Strength)?),
            defence: f64::from(lookup(Skill::Defence)?),
            hitpoints: f64::from(lookup(Skill::Hitpoints)?),
            prayer: f64::from(lookup(Skill::Prayer)?),
            ranged: f64::from(lookup(Skill::Ranged)?),
            magic: f64::from(lookup(Skill::Magic)?),
        })
    }
}

/// Clamp a level input to an integer no lower than 1.
pub fn normalize_level(value: f64) -> f64 {
    if !value.is_finite() || value < 1.0 {
        1.0
    } else {
        value.floor()
    }
}

/// Compute the combat level for a set of stats.
pub fn calculate_combat_level(stats: &CombatStats) -> u32 {
    let attack = normalize_level(stats.attack);
    let strength = normalize_level(stats.strength);
    let defence = normalize_level(stats.defence);
    let hitpoints = normalize_level(stats.hitpoints);
    let prayer = normalize_level(stats.prayer);
    let ranged = normalize_level(stats.ranged);
    let magic = normalize_level(stats.magic);

    let base = (defence + hitpoints + (prayer / 2.0).floor()) / 4.0;
    let melee = 0.325 * (attack + strength);
    let range = 0.325 * (ranged * 1.5).floor();
    let mage = 0.325 * (magic * 1.5).floor();

    (base + melee.max(range).max(mage)).floor() as u32
}
