//! Subcategory evaluation.
//!
//! `required` subcategories resolve each listed course name to one
//! available course. `elective` and `free` subcategories evaluate their
//! groups in order against the shared pool, so earlier groups get first
//! claim on courses that several groups would accept.

use super::group;
use super::matcher::RuleMatcher;
use super::pool::CoursePool;
use super::{cap, cap_in_progress};
use crate::model::{
    CourseRecord, CreditPool, MatchedCourse, RequiredCourseStatus, RequiredCourses,
    RequirementSubcategory, SubcategoryKind, SubcategoryStatus,
};

/// Evaluate a subcategory against the courses still available in `pool`.
pub fn evaluate<'a>(
    subcategory: &RequirementSubcategory,
    pool: &mut CoursePool<'a>,
    matcher: &RuleMatcher<'_>,
) -> SubcategoryStatus {
    let mut status = match &subcategory.kind {
        SubcategoryKind::Required(required) => evaluate_required(required, pool),
        SubcategoryKind::Elective(credit_pool) | SubcategoryKind::Free(credit_pool) => {
            evaluate_credit_pool(credit_pool, pool, matcher)
        }
    };
    status.id = subcategory.id.clone();
    status.name = subcategory.name.clone();
    status.kind = subcategory.kind.tag();
    status
}

fn empty_status() -> SubcategoryStatus {
    SubcategoryStatus {
        id: String::new(),
        name: String::new(),
        kind: crate::model::SubcategoryType::Required,
        earned_credits: 0.0,
        in_progress_credits: 0.0,
        required_credits: 0.0,
        max_credits: None,
        is_satisfied: false,
        groups: Vec::new(),
        required_courses: Vec::new(),
    }
}

/// Pick the course to consume for one required name: the first passed
/// match, otherwise the first in-progress match.
fn find_by_name<'a>(available: &[&'a CourseRecord], name: &str) -> Option<&'a CourseRecord> {
    let mut candidates = available.iter().copied().filter(|c| c.name == name);
    let first = candidates.next()?;
    if first.is_passed {
        return Some(first);
    }
    candidates.find(|c| c.is_passed).or(Some(first))
}

fn evaluate_required<'a>(
    required: &RequiredCourses,
    pool: &mut CoursePool<'a>,
) -> SubcategoryStatus {
    let mut earned = 0.0;
    let mut in_progress = 0.0;
    let mut entries = Vec::with_capacity(required.course_names.len());

    for name in &required.course_names {
        let available = pool.available();
        let matched = find_by_name(&available, name).filter(|c| pool.claim(*c));

        if let Some(course) = matched {
            if course.is_passed {
                earned += course.counted_credits();
            } else {
                in_progress += course.counted_credits();
            }
        }

        entries.push(RequiredCourseStatus {
            course_name: name.clone(),
            matched: matched.map(MatchedCourse::from),
        });
    }

    let is_satisfied = entries.iter().all(|e| e.matched.is_some());

    SubcategoryStatus {
        earned_credits: earned,
        in_progress_credits: in_progress,
        required_credits: earned + in_progress,
        is_satisfied,
        required_courses: entries,
        ..empty_status()
    }
}

fn evaluate_credit_pool<'a>(
    credit_pool: &CreditPool,
    pool: &mut CoursePool<'a>,
    matcher: &RuleMatcher<'_>,
) -> SubcategoryStatus {
    let groups: Vec<_> = credit_pool
        .groups
        .iter()
        .map(|g| group::evaluate(g, pool, matcher))
        .collect();

    let earned_sum: f64 = groups.iter().map(|g| g.earned_credits).sum();
    let in_progress_sum: f64 = groups.iter().map(|g| g.in_progress_credits).sum();

    let earned = cap(earned_sum, credit_pool.max_credits);
    let in_progress = cap_in_progress(in_progress_sum, earned, credit_pool.max_credits);
    let is_satisfied = credit_pool.min_credits <= 0.0 || earned >= credit_pool.min_credits;

    SubcategoryStatus {
        earned_credits: earned,
        in_progress_credits: in_progress,
        required_credits: credit_pool.min_credits,
        max_credits: credit_pool.max_credits,
        is_satisfied,
        groups,
        ..empty_status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GroupRule, RequirementGroup, SubcategoryType};

    fn required(names: &[&str]) -> RequirementSubcategory {
        RequirementSubcategory {
            id: "req".into(),
            name: "Required".into(),
            kind: SubcategoryKind::Required(RequiredCourses {
                course_names: names.iter().map(|n| n.to_string()).collect(),
            }),
        }
    }

    fn prefix_group(id: &str, prefix: &str, max: Option<f64>) -> RequirementGroup {
        RequirementGroup {
            id: id.into(),
            max_credits: max,
            include_rules: vec![GroupRule::Prefix {
                prefixes: vec![prefix.into()],
            }],
            ..Default::default()
        }
    }

    fn elective(min: f64, max: Option<f64>, groups: Vec<RequirementGroup>) -> RequirementSubcategory {
        RequirementSubcategory {
            id: "elec".into(),
            name: "Electives".into(),
            kind: SubcategoryKind::Elective(CreditPool {
                min_credits: min,
                max_credits: max,
                groups,
            }),
        }
    }

    #[test]
    fn required_consumes_first_matching_course_only() {
        let courses = vec![
            CourseRecord::passed("MA101", "微分積分学", 2.0),
            CourseRecord::passed("MA102", "微分積分学", 2.0),
        ];
        let mut pool = CoursePool::new(&courses);

        let status = evaluate(&required(&["微分積分学"]), &mut pool, &RuleMatcher::default());

        assert!(status.is_satisfied);
        assert_eq!(status.kind, SubcategoryType::Required);
        assert_eq!(status.earned_credits, 2.0);
        assert_eq!(status.required_credits, 2.0);
        assert!(pool.is_used("MA101"));
        assert!(!pool.is_used("MA102"));
    }

    #[test]
    fn required_prefers_passed_attempt() {
        let courses = vec![
            CourseRecord::in_progress("MA201", "Algebra", 2.0),
            CourseRecord::passed("MA202", "Algebra", 2.0),
        ];
        let mut pool = CoursePool::new(&courses);

        let status = evaluate(&required(&["Algebra"]), &mut pool, &RuleMatcher::default());

        let matched = status.required_courses[0].matched.as_ref().unwrap();
        assert_eq!(matched.id, "MA202");
        assert_eq!(status.earned_credits, 2.0);
        assert_eq!(status.in_progress_credits, 0.0);
    }

    #[test]
    fn required_in_progress_counts_as_resolved() {
        let courses = vec![CourseRecord::in_progress("MA201", "Algebra", 2.0)];
        let mut pool = CoursePool::new(&courses);

        let status = evaluate(&required(&["Algebra"]), &mut pool, &RuleMatcher::default());

        assert!(status.is_satisfied);
        assert_eq!(status.earned_credits, 0.0);
        assert_eq!(status.in_progress_credits, 2.0);
        assert_eq!(status.required_credits, 2.0);
    }

    #[test]
    fn required_missing_entry_fails() {
        let courses = vec![
            CourseRecord::passed("MA101", "Calculus", 2.0),
            CourseRecord::failed("MA201", "Algebra", 2.0),
        ];
        let mut pool = CoursePool::new(&courses);

        let status = evaluate(
            &required(&["Calculus", "Algebra"]),
            &mut pool,
            &RuleMatcher::default(),
        );

        assert!(!status.is_satisfied);
        assert_eq!(status.missing_courses(), vec!["Algebra"]);
        assert_eq!(status.required_credits, 2.0);
    }

    #[test]
    fn required_repeated_name_needs_two_courses() {
        let courses = vec![
            CourseRecord::passed("PE1", "Physical Education", 1.0),
            CourseRecord::passed("PE2", "Physical Education", 1.0),
        ];
        let mut pool = CoursePool::new(&courses);

        let status = evaluate(
            &required(&["Physical Education", "Physical Education"]),
            &mut pool,
            &RuleMatcher::default(),
        );

        assert!(status.is_satisfied);
        assert_eq!(status.earned_credits, 2.0);
    }

    #[test]
    fn earlier_groups_claim_shared_courses() {
        let courses = vec![CourseRecord::passed("FG101", "Physics", 2.0)];
        let mut pool = CoursePool::new(&courses);
        let sub = elective(
            2.0,
            None,
            vec![prefix_group("first", "FG", None), prefix_group("second", "F", None)],
        );

        let status = evaluate(&sub, &mut pool, &RuleMatcher::default());

        assert_eq!(status.groups[0].matched_courses.len(), 1);
        assert!(status.groups[1].matched_courses.is_empty());
        assert!(status.is_satisfied);
    }

    #[test]
    fn group_caps_apply_before_subcategory_sum() {
        let courses = vec![
            CourseRecord::passed("FG1", "A", 2.0),
            CourseRecord::passed("FG2", "B", 2.0),
            CourseRecord::passed("LA1", "C", 2.0),
        ];
        let mut pool = CoursePool::new(&courses);
        let sub = elective(
            6.0,
            None,
            vec![prefix_group("fg", "FG", Some(2.0)), prefix_group("la", "LA", None)],
        );

        let status = evaluate(&sub, &mut pool, &RuleMatcher::default());

        assert_eq!(status.earned_credits, 4.0);
        assert!(!status.is_satisfied);
    }

    #[test]
    fn subcategory_maximum_caps_total() {
        let courses = vec![
            CourseRecord::passed("FG1", "A", 4.0),
            CourseRecord::passed("LA1", "B", 4.0),
        ];
        let mut pool = CoursePool::new(&courses);
        let sub = elective(
            4.0,
            Some(6.0),
            vec![prefix_group("fg", "FG", None), prefix_group("la", "LA", None)],
        );

        let status = evaluate(&sub, &mut pool, &RuleMatcher::default());

        assert_eq!(status.earned_credits, 6.0);
        assert_eq!(status.max_credits, Some(6.0));
        assert!(status.is_satisfied);
    }

    #[test]
    fn free_subcategory_evaluates_like_elective() {
        let courses = vec![CourseRecord::passed("XX1", "Anything", 2.0)];
        let mut pool = CoursePool::new(&courses);
        let sub = RequirementSubcategory {
            id: "free".into(),
            name: "Free".into(),
            kind: SubcategoryKind::Free(CreditPool {
                min_credits: 2.0,
                max_credits: None,
                groups: vec![prefix_group("any", "", None)],
            }),
        };

        let status = evaluate(&sub, &mut pool, &RuleMatcher::default());

        assert_eq!(status.kind, SubcategoryType::Free);
        assert!(status.is_satisfied);
    }
}
