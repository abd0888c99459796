//! Unknown rule kind detection.

use super::rules;
use crate::lint::{LintDiagnostic, LintRule, RuleId, Severity};
use crate::model::{GraduationRequirements, GroupRule};

/// Detects rules whose `type` is not recognized. They match no course.
pub struct UnknownRuleKindRule;

impl LintRule for UnknownRuleKindRule {
    fn id(&self) -> RuleId {
        RuleId::new("unknown-rule-kind")
    }

    fn name(&self) -> &str {
        "Unknown Rule Kind"
    }

    fn description(&self) -> &str {
        "Detects group rules with an unrecognized type"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, requirements: &GraduationRequirements) -> Vec<LintDiagnostic> {
        rules(requirements)
            .filter(|(_, rule)| matches!(rule, GroupRule::Unknown))
            .map(|(path, _)| {
                LintDiagnostic::new(
                    self.id(),
                    self.default_severity(),
                    "Rule has an unknown type and will match no courses",
                )
                .with_path(path)
                .with_suggestion("Use one of: courses, prefix, category, pattern")
            })
            .collect()
    }
}
