//! Requirement tree definitions.
//!
//! This module contains the canonical shape of a graduation requirement
//! definition: categories contain subcategories, subcategories contain
//! groups (or a list of mandatory course names), groups contain rules.
//!
//! Older definitions using a flat `rules` array are converted into this
//! shape by [`crate::config::legacy`] before deserialization, so nothing
//! downstream ever sees the legacy form.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Schema version written by this crate.
pub const CURRENT_SCHEMA_VERSION: u32 = 2;

/// Root of a requirement definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GraduationRequirements {
    pub id: String,

    /// Entrance year the definition applies to.
    pub year: i32,

    pub department: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,

    /// Credits needed for graduation eligibility.
    pub total_credits: f64,

    #[serde(default)]
    pub categories: Vec<RequirementCategory>,

    #[serde(default = "default_version")]
    pub version: u32,
}

fn default_version() -> u32 {
    CURRENT_SCHEMA_VERSION
}

impl GraduationRequirements {
    /// Iterate over every group in declaration order.
    pub fn groups(&self) -> impl Iterator<Item = &RequirementGroup> {
        self.categories
            .iter()
            .flat_map(|c| c.subcategories.iter())
            .flat_map(|s| s.groups())
    }

    /// Iterate over every rule (include and exclude) in declaration order.
    pub fn rules(&self) -> impl Iterator<Item = &GroupRule> {
        self.groups()
            .flat_map(|g| g.include_rules.iter().chain(g.exclude_rules.iter()))
    }
}

/// A top-level requirement category (e.g. general education, major courses).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequirementCategory {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub subcategories: Vec<RequirementSubcategory>,
}

/// A subcategory. Its `type` tag selects how it is evaluated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequirementSubcategory {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub kind: SubcategoryKind,
}

impl RequirementSubcategory {
    /// Groups of an elective or free subcategory; empty for required ones.
    pub fn groups(&self) -> &[RequirementGroup] {
        match &self.kind {
            SubcategoryKind::Required(_) => &[],
            SubcategoryKind::Elective(pool) | SubcategoryKind::Free(pool) => &pool.groups,
        }
    }
}

/// Evaluation strategy of a subcategory, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SubcategoryKind {
    /// Every named course must be taken.
    Required(RequiredCourses),
    /// Credits collected from groups up to a minimum.
    Elective(CreditPool),
    /// Same evaluation as `elective`; kept distinct for display.
    Free(CreditPool),
}

impl SubcategoryKind {
    /// The bare tag of this kind.
    pub fn tag(&self) -> SubcategoryType {
        match self {
            SubcategoryKind::Required(_) => SubcategoryType::Required,
            SubcategoryKind::Elective(_) => SubcategoryType::Elective,
            SubcategoryKind::Free(_) => SubcategoryType::Free,
        }
    }
}

/// Tag-only view of [`SubcategoryKind`], carried into the status tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SubcategoryType {
    Required,
    Elective,
    Free,
}

impl std::fmt::Display for SubcategoryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubcategoryType::Required => write!(f, "required"),
            SubcategoryType::Elective => write!(f, "elective"),
            SubcategoryType::Free => write!(f, "free"),
        }
    }
}

/// Payload of a `required` subcategory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequiredCourses {
    pub course_names: Vec<String>,
}

/// Payload of an `elective` or `free` subcategory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreditPool {
    #[serde(default)]
    pub min_credits: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_credits: Option<f64>,
    #[serde(default)]
    pub groups: Vec<RequirementGroup>,
}

/// A credit bucket filled by courses matching its include rules and none
/// of its exclude rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequirementGroup {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub min_credits: f64,
    /// Caps the credits this group contributes upward. Does not affect
    /// the group's own satisfaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_credits: Option<f64>,
    #[serde(default)]
    pub include_rules: Vec<GroupRule>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude_rules: Vec<GroupRule>,
}

/// A predicate deciding whether a course belongs to a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GroupRule {
    /// Exact match on course name.
    #[serde(rename_all = "camelCase")]
    Courses { course_names: Vec<String> },

    /// Course id starts with one of the prefixes.
    Prefix { prefixes: Vec<String> },

    /// Membership in the course-type master hierarchy.
    #[serde(rename_all = "camelCase")]
    Category {
        major_category: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        middle_category: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        minor_category: Option<String>,
    },

    /// Regular expression tested against the course id.
    Pattern { pattern: String },

    /// Any unrecognized `type` tag. Matches nothing.
    #[serde(other)]
    #[schemars(skip)]
    Unknown,
}

impl GroupRule {
    /// The `type` tag of this rule.
    pub fn kind(&self) -> &'static str {
        match self {
            GroupRule::Courses { .. } => "courses",
            GroupRule::Prefix { .. } => "prefix",
            GroupRule::Category { .. } => "category",
            GroupRule::Pattern { .. } => "pattern",
            GroupRule::Unknown => "unknown",
        }
    }
}
