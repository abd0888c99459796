//! Top-level requirement status calculation.
//!
//! [`Calculator`] owns nothing but a borrowed course-type master, so one
//! instance can be shared across threads and every call to
//! [`Calculator::calculate`] starts from a fresh [`CoursePool`].

use chrono::Utc;
use tracing::debug;

use super::category;
use super::matcher::RuleMatcher;
use super::pool::CoursePool;
use crate::model::{
    CourseRecord, CourseTypeMaster, GraduationRequirements, MatchedCourse, RequirementStatus,
};

/// Computes [`RequirementStatus`] trees.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator<'m> {
    matcher: RuleMatcher<'m>,
}

impl<'m> Calculator<'m> {
    /// A calculator without course-type data. Category rules match nothing
    /// and are reported as pending lookups.
    pub fn new() -> Self {
        Self::default()
    }

    /// A calculator resolving category rules against `course_types`.
    pub fn with_course_types(course_types: &'m CourseTypeMaster) -> Self {
        Self {
            matcher: RuleMatcher::new(Some(course_types)),
        }
    }

    /// Evaluate `requirements` against `courses`.
    ///
    /// Categories are evaluated in declaration order; each course is
    /// counted by at most one requirement node.
    pub fn calculate(
        &self,
        requirements: &GraduationRequirements,
        courses: &[CourseRecord],
    ) -> RequirementStatus {
        let mut pool = CoursePool::new(courses);

        let categories: Vec<_> = requirements
            .categories
            .iter()
            .map(|c| category::evaluate(c, &mut pool, &self.matcher))
            .collect();

        let total_earned: f64 = categories.iter().map(|c| c.earned_credits).sum();
        let total_in_progress: f64 = categories.iter().map(|c| c.in_progress_credits).sum();
        let pending_lookups = categories
            .iter()
            .flat_map(|c| c.subcategories.iter())
            .flat_map(|s| s.groups.iter())
            .filter(|g| g.lookup_pending)
            .count();
        let unmatched_courses: Vec<MatchedCourse> = pool
            .unclaimed()
            .into_iter()
            .map(MatchedCourse::from)
            .collect();

        debug!(
            "Requirements '{}': {}/{} credits, {} course(s) claimed, {} unmatched",
            requirements.id,
            total_earned,
            requirements.total_credits,
            pool.used_count(),
            unmatched_courses.len()
        );

        RequirementStatus {
            requirements_id: requirements.id.clone(),
            year: requirements.year,
            department: requirements.department.clone(),
            major: requirements.major.clone(),
            total_credits: requirements.total_credits,
            total_earned_credits: total_earned,
            total_in_progress_credits: total_in_progress,
            is_graduation_eligible: total_earned >= requirements.total_credits,
            all_categories_satisfied: categories.iter().all(|c| c.is_satisfied),
            pending_lookups,
            categories,
            unmatched_courses,
            calculated_at: Utc::now(),
        }
    }
}

/// Evaluate `requirements` against `courses` without course-type data.
pub fn calculate(
    requirements: &GraduationRequirements,
    courses: &[CourseRecord],
) -> RequirementStatus {
    Calculator::new().calculate(requirements, courses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        CourseTypeNode, CreditPool, GroupRule, RequirementCategory, RequirementGroup,
        RequirementSubcategory, SubcategoryKind,
    };

    fn single_group(total: f64, rule: GroupRule) -> GraduationRequirements {
        GraduationRequirements {
            id: "req".into(),
            year: 2024,
            department: "Engineering".into(),
            major: None,
            total_credits: total,
            version: 2,
            categories: vec![RequirementCategory {
                id: "cat".into(),
                name: "Category".into(),
                subcategories: vec![RequirementSubcategory {
                    id: "sub".into(),
                    name: "Sub".into(),
                    kind: SubcategoryKind::Elective(CreditPool {
                        min_credits: 4.0,
                        max_credits: None,
                        groups: vec![RequirementGroup {
                            id: "g".into(),
                            min_credits: 4.0,
                            include_rules: vec![rule],
                            ..Default::default()
                        }],
                    }),
                }],
            }],
        }
    }

    fn fg_rule() -> GroupRule {
        GroupRule::Prefix {
            prefixes: vec!["FG".into()],
        }
    }

    #[test]
    fn eligibility_boundary_is_inclusive() {
        let courses = vec![CourseRecord::passed("FG101", "Physics", 4.0)];

        assert!(calculate(&single_group(4.0, fg_rule()), &courses).is_graduation_eligible);
        assert!(!calculate(&single_group(5.0, fg_rule()), &courses).is_graduation_eligible);
    }

    #[test]
    fn reports_unmatched_courses() {
        let courses = vec![
            CourseRecord::passed("FG101", "Physics", 4.0),
            CourseRecord::passed("HI101", "History", 2.0),
            CourseRecord::failed("FG102", "Chemistry", 2.0),
        ];

        let status = calculate(&single_group(4.0, fg_rule()), &courses);

        let ids: Vec<_> = status
            .unmatched_courses
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, vec!["HI101", "FG102"]);
    }

    #[test]
    fn does_not_mutate_inputs_and_is_repeatable() {
        let requirements = single_group(4.0, fg_rule());
        let courses = vec![CourseRecord::passed("FG101", "Physics", 4.0)];
        let before = courses.clone();

        let first = calculate(&requirements, &courses);
        let mut second = calculate(&requirements, &courses);
        second.calculated_at = first.calculated_at;

        assert_eq!(courses, before);
        assert_eq!(first, second);
    }

    #[test]
    fn counts_pending_lookups_without_master() {
        let rule = GroupRule::Category {
            major_category: "Engineering".into(),
            middle_category: None,
            minor_category: None,
        };
        let courses = vec![CourseRecord::passed("FG101", "Physics", 4.0)];

        let status = calculate(&single_group(4.0, rule), &courses);

        assert_eq!(status.pending_lookups, 1);
        assert_eq!(status.total_earned_credits, 0.0);
    }

    #[test]
    fn resolves_category_rules_with_master() {
        let master = CourseTypeMaster::new(vec![CourseTypeNode::leaf("Engineering", &["FG"])]);
        let rule = GroupRule::Category {
            major_category: "Engineering".into(),
            middle_category: None,
            minor_category: None,
        };
        let courses = vec![CourseRecord::passed("FG101", "Physics", 4.0)];

        let status =
            Calculator::with_course_types(&master).calculate(&single_group(4.0, rule), &courses);

        assert_eq!(status.pending_lookups, 0);
        assert_eq!(status.total_earned_credits, 4.0);
        assert!(status.all_categories_satisfied);
    }
}
