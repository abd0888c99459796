//! Category rule resolution against the course-type master.
//!
//! Only registered when a master is available, since without one every
//! category rule would be reported.

use super::rules;
use crate::lint::{LintDiagnostic, LintRule, RuleId, Severity};
use crate::model::{CourseTypeMaster, GraduationRequirements, GroupRule};

/// Detects `category` rules that resolve to no course-id prefixes.
pub struct UnresolvedCategoryRule {
    master: CourseTypeMaster,
}

impl UnresolvedCategoryRule {
    /// Create the rule over a loaded course-type master.
    pub fn new(master: CourseTypeMaster) -> Self {
        Self { master }
    }
}

impl LintRule for UnresolvedCategoryRule {
    fn id(&self) -> RuleId {
        RuleId::new("unresolved-category")
    }

    fn name(&self) -> &str {
        "Unresolved Category"
    }

    fn description(&self) -> &str {
        "Detects category rules that name no node of the course-type master"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, requirements: &GraduationRequirements) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();

        for (path, rule) in rules(requirements) {
            let GroupRule::Category {
                major_category,
                middle_category,
                minor_category,
            } = rule
            else {
                continue;
            };

            let prefixes = self.master.resolve(
                major_category,
                middle_category.as_deref(),
                minor_category.as_deref(),
            );
            if prefixes.is_empty() {
                let selection = [
                    Some(major_category.as_str()),
                    middle_category.as_deref(),
                    minor_category.as_deref(),
                ]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(" > ");
                diagnostics.push(
                    LintDiagnostic::new(
                        self.id(),
                        self.default_severity(),
                        format!("Category '{}' resolves to no course prefixes", selection),
                    )
                    .with_path(path),
                );
            }
        }

        diagnostics
    }
}
