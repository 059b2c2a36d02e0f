//! Configuration validation rules.

use crate::config::schema::RunetrackConfig;
use crate::error::{Result, RunetrackError};

/// A configuration problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

/// Validate a configuration and return all errors.
pub fn validate_config(config: &RunetrackConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.settings.cache_ttl_seconds == 0 {
        errors.push(ValidationError {
            rule: "zero-cache-ttl".to_string(),
            message: "settings.cache_ttl_seconds must be greater than 0".to_string(),
        });
    }

    for (i, path) in config.content.iter().enumerate() {
        if path.as_os_str().is_empty() {
            errors.push(ValidationError {
                rule: "empty-content-path".to_string(),
                message: format!("content[{}] is an empty path", i),
            });
        }
    }

    if config
        .facts
        .as_ref()
        .is_some_and(|p| p.as_os_str().is_empty())
    {
        errors.push(ValidationError {
            rule: "empty-facts-path".to_string(),
            message: "facts is an empty path".to_string(),
        });
    }

    if config
        .snapshots_dir
        .as_ref()
        .is_some_and(|p| p.as_os_str().is_empty())
    {
        errors.push(ValidationError {
            rule: "empty-snapshots-path".to_string(),
            message: "snapshots_dir is an empty path".to_string(),
        });
    }

    errors
}

/// Validate and return Result (for convenience).
///
/// # Errors
///
/// Returns `ConfigValidationError` if any validation rules fail.
pub fn validate(config: &RunetrackConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(RunetrackError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
