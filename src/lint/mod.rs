//! Requirement definition linting.
//!
//! The calculator accepts any well-formed definition and degrades bad
//! pieces to "matches nothing". This module finds those pieces up front
//! through a pluggable rule-based system.
//!
//! # Overview
//!
//! The lint system consists of:
//!
//! - **Rules** - Individual checks ([`LintRule`] trait)
//! - **Registry** - Collection of all available rules ([`RuleRegistry`])
//! - **Diagnostics** - Issue reports with severity and suggestions ([`LintDiagnostic`])
//!
//! # Example
//!
//! ```
//! use gradtrack::lint::{RuleRegistry, RuleId, Severity};
//!
//! let registry = RuleRegistry::with_builtins();
//! assert!(registry.get(&RuleId::new("credit-bounds")).is_some());
//!
//! // Severity has ordering
//! assert!(Severity::Hint < Severity::Warning);
//! assert!(Severity::Warning < Severity::Error);
//! ```

pub mod diagnostic;
pub mod output;
pub mod registry;
pub mod rule;
pub mod rules;
pub mod schema;

pub use diagnostic::{LintDiagnostic, RelatedInfo};
pub use output::{HumanFormatter, JsonFormatter, LintFormatter, OutputFormat};
pub use registry::RuleRegistry;
pub use rule::{LintRule, RuleId, Severity};
pub use rules::{
    CreditBoundsRule, DuplicateIdRule, EmptyGroupRule, InvalidPatternRule, TotalCreditsRule,
    UnknownRuleKindRule, UnresolvedCategoryRule,
};
pub use schema::{SchemaGenerator, SchemaTarget};
