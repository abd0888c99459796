//! Requirement matching and status calculation.
//!
//! The engine is a pure, synchronous, single pass over the requirement
//! tree. Categories, subcategories and groups are evaluated in declaration
//! order against a shrinking pool of courses: a course claimed by one node
//! is never counted by another node during the same calculation.
//!
//! # Modules
//!
//! - [`matcher`] - Rule compilation and course matching
//! - [`pool`] - The per-calculation course pool and used-course ledger
//! - [`group`] - Group evaluation (include/exclude rules, credit bounds)
//! - [`subcategory`] - Required and elective/free subcategory evaluation
//! - [`category`] - Category roll-up
//! - [`calculator`] - Top-level orchestration and eligibility
//!
//! # Example
//!
//! ```
//! use gradtrack::engine::calculate;
//! use gradtrack::model::{
//!     CourseRecord, CreditPool, GraduationRequirements, GroupRule, RequirementCategory,
//!     RequirementGroup, RequirementSubcategory, SubcategoryKind,
//! };
//!
//! let requirements = GraduationRequirements {
//!     id: "req".into(),
//!     year: 2024,
//!     department: "Engineering".into(),
//!     major: None,
//!     total_credits: 4.0,
//!     version: 2,
//!     categories: vec![RequirementCategory {
//!         id: "cat".into(),
//!         name: "Core".into(),
//!         subcategories: vec![RequirementSubcategory {
//!             id: "sub".into(),
//!             name: "Foundations".into(),
//!             kind: SubcategoryKind::Elective(CreditPool {
//!                 min_credits: 4.0,
//!                 max_credits: None,
//!                 groups: vec![RequirementGroup {
//!                     id: "fg".into(),
//!                     min_credits: 4.0,
//!                     include_rules: vec![GroupRule::Prefix { prefixes: vec!["FG".into()] }],
//!                     ..Default::default()
//!                 }],
//!             }),
//!         }],
//!     }],
//! };
//!
//! let courses = vec![CourseRecord::passed("FG101", "Physics", 4.0)];
//! let status = calculate(&requirements, &courses);
//!
//! assert!(status.is_graduation_eligible);
//! assert_eq!(status.categories[0].subcategories[0].earned_credits, 4.0);
//! ```

pub mod calculator;
pub mod category;
pub mod group;
pub mod matcher;
pub mod pool;
pub mod subcategory;

pub use calculator::{calculate, Calculator};
pub use matcher::{matches, CompiledRule, RuleMatcher};
pub use pool::CoursePool;

/// Cap a credit sum at an optional maximum.
pub(crate) fn cap(value: f64, max: Option<f64>) -> f64 {
    match max {
        Some(m) => value.min(m.max(0.0)),
        None => value,
    }
}

/// Cap in-progress credits at the room left under an optional maximum.
pub(crate) fn cap_in_progress(in_progress: f64, earned: f64, max: Option<f64>) -> f64 {
    match max {
        Some(m) => in_progress.min((m - earned).max(0.0)),
        None => in_progress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cap_without_maximum_is_identity() {
        assert_eq!(cap(7.0, None), 7.0);
    }

    #[test]
    fn cap_limits_to_maximum() {
        assert_eq!(cap(7.0, Some(4.0)), 4.0);
        assert_eq!(cap(3.0, Some(4.0)), 3.0);
        assert_eq!(cap(3.0, Some(-1.0)), 0.0);
    }

    #[test]
    fn in_progress_only_fills_remaining_room() {
        assert_eq!(cap_in_progress(4.0, 2.0, Some(4.0)), 2.0);
        assert_eq!(cap_in_progress(4.0, 4.0, Some(4.0)), 0.0);
        assert_eq!(cap_in_progress(4.0, 2.0, None), 4.0);
    }
}
