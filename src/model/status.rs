//! Status tree produced by the calculation engine.
//!
//! The status tree mirrors the requirement tree one to one. It is
//! recomputed from scratch on every calculation and never persisted.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::course::CourseRecord;
use super::requirements::SubcategoryType;

/// A course counted toward a requirement node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedCourse {
    pub id: String,
    pub name: String,
    pub credits: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    pub is_passed: bool,
    pub is_in_progress: bool,
}

impl From<&CourseRecord> for MatchedCourse {
    fn from(course: &CourseRecord) -> Self {
        Self {
            id: course.id.clone(),
            name: course.name.clone(),
            credits: course.counted_credits(),
            grade: course.grade.clone(),
            is_passed: course.is_passed,
            is_in_progress: course.is_in_progress && !course.is_passed,
        }
    }
}

/// Status of a single group.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupStatus {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Passed credits, capped at `max_credits`.
    pub earned_credits: f64,
    /// Passed credits before the cap.
    pub uncapped_earned_credits: f64,
    /// In-progress credits, capped at the room left under `max_credits`.
    pub in_progress_credits: f64,
    pub required_credits: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_credits: Option<f64>,
    pub is_satisfied: bool,
    /// A `category` rule of this group resolved to no prefixes.
    pub lookup_pending: bool,
    pub matched_courses: Vec<MatchedCourse>,
}

impl GroupStatus {
    /// Credits still missing to reach the minimum.
    pub fn remaining_credits(&self) -> f64 {
        (self.required_credits - self.uncapped_earned_credits).max(0.0)
    }
}

/// Per-entry result of a `required` subcategory.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequiredCourseStatus {
    pub course_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched: Option<MatchedCourse>,
}

/// Status of a subcategory.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubcategoryStatus {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SubcategoryType,
    pub earned_credits: f64,
    pub in_progress_credits: f64,
    pub required_credits: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_credits: Option<f64>,
    pub is_satisfied: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<GroupStatus>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required_courses: Vec<RequiredCourseStatus>,
}

impl SubcategoryStatus {
    /// Names from a `required` list that no course resolved.
    pub fn missing_courses(&self) -> Vec<&str> {
        self.required_courses
            .iter()
            .filter(|r| r.matched.is_none())
            .map(|r| r.course_name.as_str())
            .collect()
    }

    /// Every course counted by this subcategory.
    pub fn matched_courses(&self) -> impl Iterator<Item = &MatchedCourse> {
        self.groups
            .iter()
            .flat_map(|g| g.matched_courses.iter())
            .chain(self.required_courses.iter().filter_map(|r| r.matched.as_ref()))
    }
}

/// Status of a category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStatus {
    pub id: String,
    pub name: String,
    pub earned_credits: f64,
    pub in_progress_credits: f64,
    pub required_credits: f64,
    pub is_satisfied: bool,
    pub subcategories: Vec<SubcategoryStatus>,
}

/// Status of a whole requirement definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementStatus {
    pub requirements_id: String,
    pub year: i32,
    pub department: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
    pub total_credits: f64,
    pub total_earned_credits: f64,
    pub total_in_progress_credits: f64,
    pub is_graduation_eligible: bool,
    /// Every category is satisfied. Not part of eligibility.
    pub all_categories_satisfied: bool,
    /// Number of groups waiting on course-type lookups.
    pub pending_lookups: usize,
    pub categories: Vec<CategoryStatus>,
    /// Input courses no requirement claimed.
    pub unmatched_courses: Vec<MatchedCourse>,
    pub calculated_at: DateTime<Utc>,
}

impl RequirementStatus {
    /// Credits still missing for eligibility.
    pub fn remaining_credits(&self) -> f64 {
        (self.total_credits - self.total_earned_credits).max(0.0)
    }

    /// Every course counted anywhere in the tree, in claim order.
    pub fn matched_courses(&self) -> impl Iterator<Item = &MatchedCourse> {
        self.categories
            .iter()
            .flat_map(|c| c.subcategories.iter())
            .flat_map(|s| s.matched_courses())
    }
}
