//! Rule matching.
//!
//! Rules are compiled once per group evaluation: `category` rules are
//! resolved against the course-type master into a prefix list and
//! `pattern` rules are compiled into a [`Regex`]. Rules that cannot be
//! compiled become rules that match nothing, so a bad rule only degrades
//! its own group.

use regex::Regex;
use tracing::warn;

use crate::model::{CourseRecord, CourseTypeMaster, GroupRule};

/// A rule ready for repeated matching.
#[derive(Debug, Clone)]
pub enum CompiledRule<'r> {
    /// Exact name match.
    Courses(&'r [String]),
    /// Id prefix match.
    Prefix(&'r [String]),
    /// Id prefix match against prefixes resolved from the master.
    Category { prefixes: Vec<String> },
    /// Regex over the id. `None` when the pattern did not compile.
    Pattern(Option<Regex>),
    /// Unrecognized rule kind.
    Never,
}

impl CompiledRule<'_> {
    /// Whether the course satisfies this rule.
    pub fn matches(&self, course: &CourseRecord) -> bool {
        match self {
            CompiledRule::Courses(names) => names.iter().any(|n| *n == course.name),
            CompiledRule::Prefix(prefixes) => prefixes.iter().any(|p| course.id.starts_with(p)),
            CompiledRule::Category { prefixes } => {
                prefixes.iter().any(|p| course.id.starts_with(p))
            }
            CompiledRule::Pattern(Some(re)) => re.is_match(&course.id),
            CompiledRule::Pattern(None) | CompiledRule::Never => false,
        }
    }

    /// Whether this is a category rule whose lookup produced no prefixes.
    pub fn is_lookup_pending(&self) -> bool {
        matches!(self, CompiledRule::Category { prefixes } if prefixes.is_empty())
    }
}

/// Compiles [`GroupRule`]s, resolving category rules against an optional
/// course-type master.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleMatcher<'m> {
    course_types: Option<&'m CourseTypeMaster>,
}

impl<'m> RuleMatcher<'m> {
    /// Create a matcher. Without a master, category rules match nothing.
    pub fn new(course_types: Option<&'m CourseTypeMaster>) -> Self {
        Self { course_types }
    }

    /// Compile a rule.
    pub fn compile<'r>(&self, rule: &'r GroupRule) -> CompiledRule<'r> {
        match rule {
            GroupRule::Courses { course_names } => CompiledRule::Courses(course_names),
            GroupRule::Prefix { prefixes } => CompiledRule::Prefix(prefixes),
            GroupRule::Category {
                major_category,
                middle_category,
                minor_category,
            } => {
                let prefixes = self
                    .course_types
                    .map(|m| {
                        m.resolve(
                            major_category,
                            middle_category.as_deref(),
                            minor_category.as_deref(),
                        )
                    })
                    .unwrap_or_default();
                if prefixes.is_empty() {
                    warn!(
                        "Category rule '{}' resolved to no course prefixes",
                        major_category
                    );
                }
                CompiledRule::Category { prefixes }
            }
            GroupRule::Pattern { pattern } => match Regex::new(pattern) {
                Ok(re) => CompiledRule::Pattern(Some(re)),
                Err(e) => {
                    warn!("Ignoring invalid pattern rule '{}': {}", pattern, e);
                    CompiledRule::Pattern(None)
                }
            },
            GroupRule::Unknown => {
                warn!("Ignoring rule with unknown type");
                CompiledRule::Never
            }
        }
    }

    /// Compile a slice of rules.
    pub fn compile_all<'r>(&self, rules: &'r [GroupRule]) -> Vec<CompiledRule<'r>> {
        rules.iter().map(|r| self.compile(r)).collect()
    }
}

/// Match a single rule against a course without a course-type master.
pub fn matches(rule: &GroupRule, course: &CourseRecord) -> bool {
    RuleMatcher::default().compile(rule).matches(course)
}
