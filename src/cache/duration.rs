//! Human-friendly durations ("7d", "24h", "30m", "45s").

use anyhow::{bail, Context, Result};
use chrono::TimeDelta;

/// Parse a duration string. A bare number is seconds.
pub fn parse_duration(value: &str) -> Result<TimeDelta> {
    let value = value.trim();
    let (digits, unit) = match value.char_indices().last() {
        Some((idx, c)) if c.is_ascii_alphabetic() => (&value[..idx], Some(c)),
        Some(_) => (value, None),
        None => bail!("Empty duration"),
    };

    let n: i64 = digits
        .parse()
        .with_context(|| format!("Invalid duration '{}'", value))?;
    if n < 0 {
        bail!("Duration '{}' is negative", value);
    }

    let delta = match unit {
        Some('d') => TimeDelta::try_days(n),
        Some('h') => TimeDelta::try_hours(n),
        Some('m') => TimeDelta::try_minutes(n),
        Some('s') | None => TimeDelta::try_seconds(n),
        Some(other) => bail!("Unknown duration unit '{}' in '{}'", other, value),
    };
    delta.with_context(|| format!("Duration '{}' is out of range", value))
}

/// Format a duration using its largest whole unit.
pub fn format_duration(duration: TimeDelta) -> String {
    let secs = duration.num_seconds();

    if secs >= 86400 {
        format!("{}d", secs / 86400)
    } else if secs >= 3600 {
        format!("{}h", secs / 3600)
    } else if secs >= 60 {
        format!("{}m", secs / 60)
    } else {
        format!("{}s", secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_days() {
        assert_eq!(parse_duration("7d").unwrap().num_days(), 7);
    }

    #[test]
    fn parse_hours() {
        assert_eq!(parse_duration("24h").unwrap().num_hours(), 24);
    }

    #[test]
    fn parse_minutes() {
        assert_eq!(parse_duration("30m").unwrap().num_minutes(), 30);
    }

    #[test]
    fn parse_no_suffix_is_seconds() {
        assert_eq!(parse_duration("3600").unwrap().num_seconds(), 3600);
        assert_eq!(parse_duration("45s").unwrap().num_seconds(), 45);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("d").is_err());
        assert!(parse_duration("7w").is_err());
        assert!(parse_duration("-3d").is_err());
        assert!(parse_duration("abc").is_err());
    }

    #[test]
    fn format_units() {
        assert_eq!(format_duration(TimeDelta::days(7)), "7d");
        assert_eq!(format_duration(TimeDelta::hours(12)), "12h");
        assert_eq!(format_duration(TimeDelta::minutes(30)), "30m");
        assert_eq!(format_duration(TimeDelta::seconds(45)), "45s");
    }
}
