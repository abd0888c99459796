//! Group evaluation.
//!
//! A course belongs to a group when it matches at least one include rule
//! and no exclude rule. Every member is claimed from the pool, passed and
//! in-progress alike, so later groups cannot count it again.

use tracing::debug;

use super::matcher::RuleMatcher;
use super::pool::CoursePool;
use super::{cap, cap_in_progress};
use crate::model::{GroupStatus, MatchedCourse, RequirementGroup};

/// Evaluate a group against the courses still available in `pool`.
pub fn evaluate<'a>(
    group: &RequirementGroup,
    pool: &mut CoursePool<'a>,
    matcher: &RuleMatcher<'_>,
) -> GroupStatus {
    let include = matcher.compile_all(&group.include_rules);
    let exclude = matcher.compile_all(&group.exclude_rules);
    let lookup_pending = include
        .iter()
        .chain(exclude.iter())
        .any(|r| r.is_lookup_pending());

    let mut matched_courses = Vec::new();
    let mut uncapped_earned = 0.0;
    let mut in_progress = 0.0;

    for course in pool.available() {
        let included = include.iter().any(|r| r.matches(course));
        if !included || exclude.iter().any(|r| r.matches(course)) {
            continue;
        }
        if !pool.claim(course) {
            continue;
        }

        if course.is_passed {
            uncapped_earned += course.counted_credits();
        } else {
            in_progress += course.counted_credits();
        }
        matched_courses.push(MatchedCourse::from(course));
    }

    let earned = cap(uncapped_earned, group.max_credits);
    let in_progress = cap_in_progress(in_progress, earned, group.max_credits);
    let is_satisfied = group.min_credits <= 0.0 || uncapped_earned >= group.min_credits;

    debug!(
        "Group '{}': {} course(s), {}/{} credits",
        group.id,
        matched_courses.len(),
        earned,
        group.min_credits
    );

    GroupStatus {
        id: group.id.clone(),
        name: group.name.clone(),
        earned_credits: earned,
        uncapped_earned_credits: uncapped_earned,
        in_progress_credits: in_progress,
        required_credits: group.min_credits,
        max_credits: group.max_credits,
        is_satisfied,
        lookup_pending,
        matched_courses,
    }
}
