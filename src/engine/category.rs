//! Category roll-up.

use super::matcher::RuleMatcher;
use super::pool::CoursePool;
use super::subcategory;
use crate::model::{CategoryStatus, RequirementCategory};

/// Evaluate a category's subcategories in order and sum their credits.
///
/// A category is satisfied when every subcategory is; it has no credit
/// minimum of its own.
pub fn evaluate<'a>(
    category: &RequirementCategory,
    pool: &mut CoursePool<'a>,
    matcher: &RuleMatcher<'_>,
) -> CategoryStatus {
    let subcategories: Vec<_> = category
        .subcategories
        .iter()
        .map(|s| subcategory::evaluate(s, pool, matcher))
        .collect();

    CategoryStatus {
        id: category.id.clone(),
        name: category.name.clone(),
        earned_credits: subcategories.iter().map(|s| s.earned_credits).sum(),
        in_progress_credits: subcategories.iter().map(|s| s.in_progress_credits).sum(),
        required_credits: subcategories.iter().map(|s| s.required_credits).sum(),
        is_satisfied: subcategories.iter().all(|s| s.is_satisfied),
        subcategories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        CourseRecord, CreditPool, GroupRule, RequiredCourses, RequirementGroup,
        RequirementSubcategory, SubcategoryKind,
    };

    fn category() -> RequirementCategory {
        RequirementCategory {
            id: "core".into(),
            name: "Core".into(),
            subcategories: vec![
                RequirementSubcategory {
                    id: "must".into(),
                    name: "Mandatory".into(),
                    kind: SubcategoryKind::Required(RequiredCourses {
                        course_names: vec!["Calculus".into()],
                    }),
                },
                RequirementSubcategory {
                    id: "math".into(),
                    name: "Math Electives".into(),
                    kind: SubcategoryKind::Elective(CreditPool {
                        min_credits: 4.0,
                        max_credits: None,
                        groups: vec![RequirementGroup {
                            id: "ma".into(),
                            include_rules: vec![GroupRule::Prefix {
                                prefixes: vec!["MA".into()],
                            }],
                            ..Default::default()
                        }],
                    }),
                },
            ],
        }
    }

    #[test]
    fn sums_subcategory_credits() {
        let courses = vec![
            CourseRecord::passed("MA101", "Calculus", 2.0),
            CourseRecord::passed("MA201", "Topology", 2.0),
            CourseRecord::in_progress("MA301", "Analysis", 2.0),
        ];
        let mut pool = CoursePool::new(&courses);

        let status = evaluate(&category(), &mut pool, &RuleMatcher::default());

        assert_eq!(status.earned_credits, 4.0);
        assert_eq!(status.in_progress_credits, 2.0);
        assert_eq!(status.required_credits, 6.0);
        assert!(!status.is_satisfied);
    }

    #[test]
    fn earlier_subcategory_claims_first() {
        let courses = vec![
            CourseRecord::passed("MA101", "Calculus", 2.0),
            CourseRecord::passed("MA201", "Topology", 4.0),
        ];
        let mut pool = CoursePool::new(&courses);

        let status = evaluate(&category(), &mut pool, &RuleMatcher::default());

        let math = &status.subcategories[1];
        assert_eq!(math.groups[0].matched_courses.len(), 1);
        assert_eq!(math.groups[0].matched_courses[0].id, "MA201");
        assert!(status.is_satisfied);
    }

    #[test]
    fn empty_category_is_satisfied() {
        let courses: Vec<CourseRecord> = vec![];
        let mut pool = CoursePool::new(&courses);
        let empty = RequirementCategory {
            id: "none".into(),
            name: "Nothing".into(),
            subcategories: vec![],
        };

        let status = evaluate(&empty, &mut pool, &RuleMatcher::default());

        assert!(status.is_satisfied);
        assert_eq!(status.earned_credits, 0.0);
    }
}
