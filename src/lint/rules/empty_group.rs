//! Empty group detection.

use super::groups;
use crate::lint::{LintDiagnostic, LintRule, RuleId, Severity};
use crate::model::GraduationRequirements;

/// Detects groups without include rules, which can never match a course.
pub struct EmptyGroupRule;

impl LintRule for EmptyGroupRule {
    fn id(&self) -> RuleId {
        RuleId::new("empty-group")
    }

    fn name(&self) -> &str {
        "Empty Group"
    }

    fn description(&self) -> &str {
        "Detects groups that have no include rules"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, requirements: &GraduationRequirements) -> Vec<LintDiagnostic> {
        groups(requirements)
            .filter(|(_, g)| g.include_rules.is_empty())
            .map(|(path, g)| {
                let mut diag = LintDiagnostic::new(
                    self.id(),
                    self.default_severity(),
                    format!("Group '{}' has no include rules and matches nothing", g.id),
                )
                .with_path(path);
                if g.min_credits > 0.0 {
                    diag = diag.with_suggestion(format!(
                        "This group requires {} credit(s) it can never earn",
                        g.min_credits
                    ));
                }
                diag
            })
            .collect()
    }
}
