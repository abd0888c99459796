//! Duplicate id detection.
//!
//! Status trees and tooling address nodes by id, so category ids must be
//! unique and subcategory and group ids must be unique across the whole
//! definition.

use std::collections::HashMap;

use super::{groups, subcategories};
use crate::lint::{LintDiagnostic, LintRule, RuleId, Severity};
use crate::model::GraduationRequirements;

/// Detects ids declared more than once at the same tree level.
pub struct DuplicateIdRule;

impl DuplicateIdRule {
    fn check_level<'a>(
        &self,
        level: &str,
        nodes: impl Iterator<Item = (String, &'a str)>,
        diagnostics: &mut Vec<LintDiagnostic>,
    ) {
        let mut seen: HashMap<&str, String> = HashMap::new();
        for (path, id) in nodes {
            match seen.get(id) {
                Some(first) => diagnostics.push(
                    LintDiagnostic::new(
                        self.id(),
                        self.default_severity(),
                        format!("Duplicate {} id '{}'", level, id),
                    )
                    .with_path(path)
                    .with_related(first.clone(), "first defined here"),
                ),
                None => {
                    seen.insert(id, path);
                }
            }
        }
    }
}

impl LintRule for DuplicateIdRule {
    fn id(&self) -> RuleId {
        RuleId::new("duplicate-id")
    }

    fn name(&self) -> &str {
        "Duplicate Id"
    }

    fn description(&self) -> &str {
        "Detects categories, subcategories or groups sharing an id"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, requirements: &GraduationRequirements) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();

        self.check_level(
            "category",
            requirements
                .categories
                .iter()
                .map(|c| (c.id.clone(), c.id.as_str())),
            &mut diagnostics,
        );
        self.check_level(
            "subcategory",
            subcategories(requirements).map(|(p, s)| (p, s.id.as_str())),
            &mut diagnostics,
        );
        self.check_level(
            "group",
            groups(requirements).map(|(p, g)| (p, g.id.as_str())),
            &mut diagnostics,
        );

        diagnostics
    }
}
