//! Project configuration schema.
//!
//! This module contains the struct definitions that map to
//! `.gradtrack/config.yml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure for `.gradtrack/config.yml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GradtrackConfig {
    /// Student name (for display purposes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,

    /// Global settings
    pub settings: Settings,

    /// Input file locations
    pub inputs: InputPaths,
}

/// Global settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default output mode: verbose, normal, quiet, silent
    pub default_output: OutputMode,

    /// List courses no requirement claimed after the status tree
    #[serde(default, skip_serializing_if = "is_false")]
    pub show_unmatched: bool,
}

fn is_false(v: &bool) -> bool {
    !v
}

/// Output verbosity mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    #[default]
    Normal,
    Quiet,
    Silent,
}

/// Locations of the input files, relative to the project root.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputPaths {
    /// Requirement definition (YAML or JSON)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<PathBuf>,

    /// Course records (YAML or JSON list)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub courses: Option<PathBuf>,

    /// Course-type master used by category rules
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_types: Option<PathBuf>,
}

impl InputPaths {
    /// Resolve a configured path against the project root.
    pub fn resolve(project_root: &Path, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            project_root.join(path)
        }
    }
}
