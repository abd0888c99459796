//! Built-in lint rules.
//!
//! This module contains all the built-in checks for requirement
//! definitions, plus the tree walk they share.

pub mod credit_bounds;
pub mod duplicate_id;
pub mod empty_group;
pub mod invalid_pattern;
pub mod total_credits;
pub mod unknown_rule_kind;
pub mod unresolved_category;

pub use credit_bounds::CreditBoundsRule;
pub use duplicate_id::DuplicateIdRule;
pub use empty_group::EmptyGroupRule;
pub use invalid_pattern::InvalidPatternRule;
pub use total_credits::TotalCreditsRule;
pub use unknown_rule_kind::UnknownRuleKindRule;
pub use unresolved_category::UnresolvedCategoryRule;

use crate::model::{GraduationRequirements, GroupRule, RequirementGroup, RequirementSubcategory};

/// A subcategory with its tree path (`category/subcategory`).
pub(crate) fn subcategories(
    requirements: &GraduationRequirements,
) -> impl Iterator<Item = (String, &RequirementSubcategory)> {
    requirements.categories.iter().flat_map(|c| {
        c.subcategories
            .iter()
            .map(move |s| (format!("{}/{}", c.id, s.id), s))
    })
}

/// A group with its tree path (`category/subcategory/group`).
pub(crate) fn groups(
    requirements: &GraduationRequirements,
) -> impl Iterator<Item = (String, &RequirementGroup)> {
    subcategories(requirements).flat_map(|(path, s)| {
        s.groups()
            .iter()
            .map(move |g| (format!("{}/{}", path, g.id), g))
    })
}

/// Every include and exclude rule with the path of its group.
pub(crate) fn rules(
    requirements: &GraduationRequirements,
) -> impl Iterator<Item = (String, &GroupRule)> {
    groups(requirements).flat_map(|(path, g)| {
        g.include_rules
            .iter()
            .chain(g.exclude_rules.iter())
            .map(move |r| (path.clone(), r))
    })
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::model::{
        CreditPool, GraduationRequirements, GroupRule, RequiredCourses, RequirementCategory,
        RequirementGroup, RequirementSubcategory, SubcategoryKind,
    };

    /// A small valid definition rules can mutate.
    pub fn requirements() -> GraduationRequirements {
        GraduationRequirements {
            id: "cs-2024".into(),
            year: 2024,
            department: "Computer Science".into(),
            major: None,
            total_credits: 20.0,
            version: 2,
            categories: vec![RequirementCategory {
                id: "general".into(),
                name: "General".into(),
                subcategories: vec![
                    RequirementSubcategory {
                        id: "must".into(),
                        name: "Mandatory".into(),
                        kind: SubcategoryKind::Required(RequiredCourses {
                            course_names: vec!["Calculus".into()],
                        }),
                    },
                    RequirementSubcategory {
                        id: "science".into(),
                        name: "Science".into(),
                        kind: SubcategoryKind::Elective(CreditPool {
                            min_credits: 8.0,
                            max_credits: Some(12.0),
                            groups: vec![RequirementGroup {
                                id: "sci".into(),
                                min_credits: 4.0,
                                include_rules: vec![GroupRule::Prefix {
                                    prefixes: vec!["FG".into()],
                                }],
                                ..Default::default()
                            }],
                        }),
                    },
                ],
            }],
        }
    }

    /// The elective pool of [`requirements`].
    pub fn science(req: &mut GraduationRequirements) -> &mut CreditPool {
        match &mut req.categories[0].subcategories[1].kind {
            SubcategoryKind::Elective(pool) => pool,
            _ => unreachable!(),
        }
    }
}
