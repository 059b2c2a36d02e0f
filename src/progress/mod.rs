//! Progress snapshots and the differ.
//!
//! # Modules
//!
//! - [`snapshot`] - Captured totals, per-skill stats and activity scores
//! - [`diff`] - Element-wise deltas between two snapshots
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use runetrack::progress::{diff_snapshots, ProgressSnapshot};
//! use runetrack::skills::Skill;
//!
//! let before = ProgressSnapshot::new(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap())
//!     .with_skill(Skill::Woodcutting, 60, 273_742);
//! let after = ProgressSnapshot::new(Utc.with_ymd_and_hms(2026, 1, 8, 0, 0, 0).unwrap())
//!     .with_skill(Skill::Woodcutting, 61, 302_288);
//!
//! let diff = diff_snapshots(&before, &after);
//! assert_eq!(diff.skill(Skill::Woodcutting).unwrap().level_delta, 1);
//! ```

pub mod diff;
pub mod snapshot;

pub use diff::{baseline_since, diff_snapshots, latest, ActivityDelta, ProgressDiff, SkillDelta};
pub use snapshot::{
    load_snapshot, load_snapshot_dir, normalize_xp, ProgressSnapshot, SkillSnapshot, SkillValue,
};
