//! Configuration validation rules.
//!
//! Every input path named in the config must point at an existing file.

use crate::config::schema::{GradtrackConfig, InputPaths};
use crate::error::{GradError, Result};
use std::path::Path;

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Config key the error refers to, e.g. `inputs.courses`
    pub field: Option<String>,
}

/// Validate a configuration and return all errors.
///
/// This function collects all validation errors rather than stopping
/// at the first one, allowing users to fix multiple issues at once.
pub fn validate_config(config: &GradtrackConfig, project_root: &Path) -> Vec<ValidationError> {
    let inputs = &config.inputs;
    [
        ("inputs.requirements", inputs.requirements.as_deref()),
        ("inputs.courses", inputs.courses.as_deref()),
        ("inputs.course_types", inputs.course_types.as_deref()),
    ]
    .into_iter()
    .filter_map(|(field, path)| {
        let path = path?;
        let resolved = InputPaths::resolve(project_root, path);
        if resolved.is_file() {
            return None;
        }
        Some(ValidationError {
            rule: "missing-input".to_string(),
            message: format!("'{}' points at {} which does not exist", field, resolved.display()),
            field: Some(field.to_string()),
        })
    })
    .collect()
}

/// Validate and return Result (for convenience).
///
/// # Errors
///
/// Returns `ConfigValidationError` if any validation rules fail.
pub fn validate(config: &GradtrackConfig, project_root: &Path) -> Result<()> {
    let errors = validate_config(config, project_root);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(GradError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
