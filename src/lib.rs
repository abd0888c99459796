//! gradtrack - Graduation requirement matching and status calculation.
//!
//! gradtrack evaluates a declarative graduation-requirement definition
//! (categories, subcategories, groups and matching rules) against a
//! student's course list. Every course counts toward at most one
//! requirement, and the result is a status tree with earned, in-progress
//! and missing credits for every node.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Project config and input file loading, legacy migration
//! - [`engine`] - Rule matching and status calculation
//! - [`error`] - Error types and result aliases
//! - [`lint`] - Requirement definition checks and JSON Schema
//! - [`model`] - Requirement, course and status types
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use gradtrack::engine::calculate;
//! use gradtrack::model::{CourseRecord, GraduationRequirements};
//!
//! let requirements: GraduationRequirements = serde_yaml::from_str(r#"
//! id: cs-2024
//! year: 2024
//! department: Computer Science
//! totalCredits: 4
//! categories:
//!   - id: general
//!     name: General
//!     subcategories:
//!       - id: science
//!         name: Science
//!         type: elective
//!         minCredits: 4
//!         groups:
//!           - id: sci
//!             minCredits: 4
//!             includeRules:
//!               - type: prefix
//!                 prefixes: [FG]
//! "#).unwrap();
//!
//! let courses = vec![
//!     CourseRecord::passed("FG101", "Physics", 2.0),
//!     CourseRecord::in_progress("FG102", "Chemistry", 2.0),
//! ];
//!
//! let status = calculate(&requirements, &courses);
//! assert_eq!(status.total_earned_credits, 2.0);
//! assert_eq!(status.total_in_progress_credits, 2.0);
//! assert!(!status.is_graduation_eligible);
//! ```

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod lint;
pub mod model;
pub mod ui;

pub use error::{GradError, Result};
