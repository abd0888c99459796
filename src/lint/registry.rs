//! Rule registry for managing lint rules.
//!
//! The [`RuleRegistry`] stores all available lint rules and provides
//! methods for registering, retrieving, and iterating over them. Rules are
//! kept ordered by id so diagnostics come out in a stable order.

use std::collections::BTreeMap;

use super::diagnostic::LintDiagnostic;
use super::rule::{LintRule, RuleId};
use super::rules::{
    CreditBoundsRule, DuplicateIdRule, EmptyGroupRule, InvalidPatternRule, TotalCreditsRule,
    UnknownRuleKindRule, UnresolvedCategoryRule,
};
use crate::model::{CourseTypeMaster, GraduationRequirements};

/// Registry of all available lint rules.
pub struct RuleRegistry {
    rules: BTreeMap<RuleId, Box<dyn LintRule>>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Create a registry with all built-in rules.
    ///
    /// [`UnresolvedCategoryRule`] needs a course-type master and is added
    /// by [`RuleRegistry::with_course_types`].
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(DuplicateIdRule));
        registry.register(Box::new(CreditBoundsRule));
        registry.register(Box::new(UnknownRuleKindRule));
        registry.register(Box::new(InvalidPatternRule));
        registry.register(Box::new(EmptyGroupRule));
        registry.register(Box::new(TotalCreditsRule));
        registry
    }

    /// Add the rules that check against a course-type master.
    pub fn with_course_types(mut self, master: CourseTypeMaster) -> Self {
        self.register(Box::new(UnresolvedCategoryRule::new(master)));
        self
    }

    /// Register a lint rule.
    pub fn register(&mut self, rule: Box<dyn LintRule>) {
        self.rules.insert(rule.id(), rule);
    }

    /// Get a rule by ID.
    pub fn get(&self, id: &RuleId) -> Option<&dyn LintRule> {
        self.rules.get(id).map(|r| r.as_ref())
    }

    /// Iterate over all rules.
    pub fn iter(&self) -> impl Iterator<Item = &dyn LintRule> {
        self.rules.values().map(|r| r.as_ref())
    }

    /// Run every rule and collect the diagnostics.
    pub fn check(&self, requirements: &GraduationRequirements) -> Vec<LintDiagnostic> {
        self.iter()
            .flat_map(|rule| rule.check(requirements))
            .collect()
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
