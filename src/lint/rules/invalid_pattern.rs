//! Invalid regular expression detection.
//!
//! A `pattern` rule that does not compile matches nothing at calculation
//! time; this rule reports the compile error up front.

use regex::Regex;

use super::rules;
use crate::lint::{LintDiagnostic, LintRule, RuleId, Severity};
use crate::model::{GraduationRequirements, GroupRule};

/// Detects `pattern` rules whose regular expression fails to compile.
pub struct InvalidPatternRule;

impl LintRule for InvalidPatternRule {
    fn id(&self) -> RuleId {
        RuleId::new("invalid-pattern")
    }

    fn name(&self) -> &str {
        "Invalid Pattern"
    }

    fn description(&self) -> &str {
        "Detects pattern rules with an invalid regular expression"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, requirements: &GraduationRequirements) -> Vec<LintDiagnostic> {
        rules(requirements)
            .filter_map(|(path, rule)| match rule {
                GroupRule::Pattern { pattern } => {
                    Regex::new(pattern).err().map(|e| (path, pattern, e))
                }
                _ => None,
            })
            .map(|(path, pattern, err)| {
                LintDiagnostic::new(
                    self.id(),
                    self.default_severity(),
                    format!("Pattern '{}' does not compile: {}", pattern, err),
                )
                .with_path(path)
            })
            .collect()
    }
}
