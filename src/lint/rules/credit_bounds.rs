//! Credit bound checks.
//!
//! Negative minimums or maximums, and minimums above maximums, produce
//! requirements that can never be met (or are met for free).

use super::{groups, subcategories};
use crate::lint::{LintDiagnostic, LintRule, RuleId, Severity};
use crate::model::{GraduationRequirements, SubcategoryKind};

/// Detects negative credit values and `minCredits > maxCredits`.
pub struct CreditBoundsRule;

impl CreditBoundsRule {
    fn check_bounds(
        &self,
        path: String,
        min: f64,
        max: Option<f64>,
        diagnostics: &mut Vec<LintDiagnostic>,
    ) {
        if min < 0.0 {
            diagnostics.push(
                LintDiagnostic::new(
                    self.id(),
                    self.default_severity(),
                    format!("minCredits is negative ({})", min),
                )
                .with_path(path.clone()),
            );
        }
        match max {
            Some(max) if max < 0.0 => diagnostics.push(
                LintDiagnostic::new(
                    self.id(),
                    self.default_severity(),
                    format!("maxCredits is negative ({})", max),
                )
                .with_path(path),
            ),
            Some(max) if min > max => diagnostics.push(
                LintDiagnostic::new(
                    self.id(),
                    self.default_severity(),
                    format!("minCredits ({}) exceeds maxCredits ({})", min, max),
                )
                .with_path(path)
                .with_suggestion("Raise maxCredits or lower minCredits"),
            ),
            _ => {}
        }
    }
}

impl LintRule for CreditBoundsRule {
    fn id(&self) -> RuleId {
        RuleId::new("credit-bounds")
    }

    fn name(&self) -> &str {
        "Credit Bounds"
    }

    fn description(&self) -> &str {
        "Detects negative credit values and minimums above maximums"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, requirements: &GraduationRequirements) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();

        for (path, sub) in subcategories(requirements) {
            if let SubcategoryKind::Elective(pool) | SubcategoryKind::Free(pool) = &sub.kind {
                self.check_bounds(path, pool.min_credits, pool.max_credits, &mut diagnostics);
            }
        }
        for (path, group) in groups(requirements) {
            self.check_bounds(path, group.min_credits, group.max_credits, &mut diagnostics);
        }

        diagnostics
    }
}
