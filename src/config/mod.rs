//! Configuration and input loading for gradtrack.
//!
//! This module handles everything read from disk:
//! - Project config schema in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//! - Validation in [`validator`]
//! - Requirement, course and course-type files in [`inputs`]
//! - Conversion of older requirement documents in [`legacy`]
//!
//! # Example
//!
//! ```
//! use gradtrack::config::{load_merged_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let config_dir = temp.path().join(".gradtrack");
//! fs::create_dir_all(&config_dir).unwrap();
//! fs::write(config_dir.join("config.yml"), "student_name: Hanako").unwrap();
//!
//! let config = load_merged_config(temp.path()).unwrap();
//! validate(&config, temp.path()).unwrap();
//! assert_eq!(config.student_name, Some("Hanako".to_string()));
//! ```
//!
//! # Configuration File Locations
//!
//! gradtrack merges configuration in this order:
//! 1. Project config (`.gradtrack/config.yml`)
//! 2. Local overrides (`.gradtrack/config.local.yml`)

pub mod inputs;
pub mod legacy;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use schema::{GradtrackConfig, InputPaths, OutputMode, Settings};

pub use loader::{
    find_project_root, load_config, load_config_file, load_config_or_default, load_config_value,
    load_merged_config, parse_config, ConfigPaths, CONFIG_DIR,
};

pub use merger::{deep_merge, merge_configs};

pub use validator::{validate, validate_config, ValidationError};

pub use inputs::{load_course_types, load_courses, load_requirements, InputFormat, InputKind};

pub use legacy::{migrate_requirements, migrate_value, needs_migration};
