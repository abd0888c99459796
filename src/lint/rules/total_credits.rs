//! Total credit sanity checks.

use super::subcategories;
use crate::lint::{LintDiagnostic, LintRule, RuleId, Severity};
use crate::model::{GraduationRequirements, SubcategoryKind};

/// Checks `totalCredits` is positive and consistent with the subcategory
/// minimums.
pub struct TotalCreditsRule;

impl LintRule for TotalCreditsRule {
    fn id(&self) -> RuleId {
        RuleId::new("total-credits")
    }

    fn name(&self) -> &str {
        "Total Credits"
    }

    fn description(&self) -> &str {
        "Checks totalCredits is positive and covers the subcategory minimums"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, requirements: &GraduationRequirements) -> Vec<LintDiagnostic> {
        let total = requirements.total_credits;

        if !total.is_finite() || total <= 0.0 {
            return vec![LintDiagnostic::new(
                self.id(),
                self.default_severity(),
                format!(
                    "totalCredits must be positive (found {}); every student would be eligible",
                    total
                ),
            )];
        }

        let minimums: f64 = subcategories(requirements)
            .filter_map(|(_, s)| match &s.kind {
                SubcategoryKind::Elective(pool) | SubcategoryKind::Free(pool) => {
                    Some(pool.min_credits.max(0.0))
                }
                SubcategoryKind::Required(_) => None,
            })
            .sum();

        if minimums > total {
            return vec![LintDiagnostic::new(
                self.id(),
                Severity::Hint,
                format!(
                    "Subcategory minimums add up to {} credits, more than totalCredits ({})",
                    minimums, total
                ),
            )];
        }

        Vec::new()
    }
}
