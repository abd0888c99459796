//! Configuration file discovery and loading.
//!
//! This module handles finding and loading the project configuration
//! files in the correct priority order.

use crate::config::merger::merge_configs;
use crate::config::schema::GradtrackConfig;
use crate::error::{GradError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding the project configuration.
pub const CONFIG_DIR: &str = ".gradtrack";

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. Project config (`.gradtrack/config.yml`)
/// 2. Local overrides (`.gradtrack/config.local.yml`)
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project config: .gradtrack/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .gradtrack/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            project: existing(project_root.join(CONFIG_DIR).join("config.yml")),
            project_local: existing(project_root.join(CONFIG_DIR).join("config.local.yml")),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project.iter().chain(self.project_local.iter()).collect()
    }

    /// Check if any project config exists.
    pub fn has_project_config(&self) -> bool {
        self.project.is_some()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// Find the project root by walking up from `start`.
///
/// Looks for:
/// 1. `.gradtrack` directory (primary indicator)
/// 2. `.git` directory (fallback)
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_DIR).is_dir() {
            return Some(current);
        }

        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load a single config file and parse it into [`GradtrackConfig`].
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<GradtrackConfig> {
    let value = load_config_value(path)?;
    parse_config_value(value, path)
}

/// Parse YAML content into [`GradtrackConfig`].
pub fn parse_config(content: &str, source_path: &Path) -> Result<GradtrackConfig> {
    let value: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| GradError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;
    parse_config_value(value, source_path)
}

fn parse_config_value(value: serde_yaml::Value, source_path: &Path) -> Result<GradtrackConfig> {
    // An empty file parses as null; treat it like an empty mapping.
    if value.is_null() {
        return Ok(GradtrackConfig::default());
    }
    serde_yaml::from_value(value).map_err(|e| GradError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a config file as a raw YAML value (for merging).
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            GradError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            GradError::Io(e)
        }
    })?;

    serde_yaml::from_str(&content).map_err(|e| GradError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and merge the project config with its local overrides.
///
/// # Errors
///
/// Returns `ConfigNotFound` if no project config exists.
/// Returns `ConfigParseError` if any config file is invalid.
pub fn load_merged_config(project_root: &Path) -> Result<GradtrackConfig> {
    let paths = ConfigPaths::discover(project_root);
    let project_path = project_root.join(CONFIG_DIR).join("config.yml");

    if !paths.has_project_config() {
        return Err(GradError::ConfigNotFound { path: project_path });
    }

    let configs = paths
        .all_existing()
        .into_iter()
        .map(|p| load_config_value(p))
        .collect::<Result<Vec<_>>>()?;

    let merged = merge_configs(&configs);

    serde_yaml::from_value(merged).map_err(|e| GradError::ConfigParseError {
        path: project_path,
        message: format!("Failed to parse merged config: {}", e),
    })
}

/// Load config with optional path override.
///
/// If `config_override` is provided, loads only that file without merging.
/// Otherwise, discovers and merges the project config files.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<GradtrackConfig> {
    if let Some(override_path) = config_override {
        load_config_file(override_path)
    } else {
        load_merged_config(project_root)
    }
}

/// Like [`load_config`], but a missing project config yields the defaults.
///
/// Commands that accept every input as a flag use this so they work
/// outside a configured project.
pub fn load_config_or_default(
    project_root: &Path,
    config_override: Option<&Path>,
) -> Result<GradtrackConfig> {
    match load_config(project_root, config_override) {
        Err(GradError::ConfigNotFound { .. }) if config_override.is_none() => {
            Ok(GradtrackConfig::default())
        }
        other => other,
    }
}
