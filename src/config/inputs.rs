//! Loading of the calculation inputs.
//!
//! Requirement definitions, course lists and the course-type master are
//! read as JSON when the file extension is `.json` and as YAML otherwise.
//! Requirement definitions pass through [`legacy::migrate_requirements`]
//! so older documents load transparently.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_yaml::Value;
use tracing::{debug, info};

use crate::config::legacy;
use crate::error::{GradError, Result};
use crate::model::{CourseRecord, CourseTypeMaster, GraduationRequirements};

/// The kind of input file, used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Requirements,
    Courses,
    CourseTypes,
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputKind::Requirements => write!(f, "Requirements"),
            InputKind::Courses => write!(f, "Courses"),
            InputKind::CourseTypes => write!(f, "Course types"),
        }
    }
}

/// Supported input encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InputFormat::Json,
            _ => InputFormat::Yaml,
        }
    }
}

fn parse_error(kind: InputKind, path: &Path, message: impl ToString) -> GradError {
    GradError::InputParseError {
        kind: kind.to_string(),
        path: path.to_path_buf(),
        message: message.to_string(),
    }
}

/// Read and decode `path` into `T`.
fn read_input<T: DeserializeOwned>(kind: InputKind, path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            GradError::InputNotFound {
                kind: kind.to_string(),
                path: path.to_path_buf(),
            }
        } else {
            GradError::Io(e)
        }
    })?;

    debug!("Loading {} from {}", kind, path.display());

    match InputFormat::from_path(path) {
        InputFormat::Json => serde_json::from_str(&content).map_err(|e| parse_error(kind, path, e)),
        InputFormat::Yaml => serde_yaml::from_str(&content).map_err(|e| parse_error(kind, path, e)),
    }
}

/// Load a requirement definition, migrating legacy documents.
///
/// # Errors
///
/// Returns `InputNotFound` if the file is missing, `InputParseError` if it
/// cannot be decoded, and `MigrationError` if it does not describe
/// requirements even after migration.
pub fn load_requirements(path: &Path) -> Result<GraduationRequirements> {
    let value: Value = read_input(InputKind::Requirements, path)?;
    if legacy::needs_migration(&value) {
        info!("Migrating legacy requirement definition {}", path.display());
    }
    legacy::migrate_requirements(value).map_err(|e| match e {
        GradError::MigrationError { message } => {
            parse_error(InputKind::Requirements, path, message)
        }
        other => other,
    })
}

/// Load a course list.
///
/// Accepts a bare list of course records or a mapping with a `courses`
/// list, as written by transcript exports.
pub fn load_courses(path: &Path) -> Result<Vec<CourseRecord>> {
    let value: Value = read_input(InputKind::Courses, path)?;
    let list = match value {
        Value::Mapping(mut map) => map
            .remove("courses")
            .ok_or_else(|| parse_error(InputKind::Courses, path, "expected a `courses` list"))?,
        other => other,
    };
    let courses: Vec<CourseRecord> =
        serde_yaml::from_value(list).map_err(|e| parse_error(InputKind::Courses, path, e))?;
    debug!("Loaded {} course record(s)", courses.len());
    Ok(courses)
}

/// Load the course-type master.
pub fn load_course_types(path: &Path) -> Result<CourseTypeMaster> {
    read_input(InputKind::CourseTypes, path)
}
