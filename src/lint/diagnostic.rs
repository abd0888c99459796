//! Lint diagnostic messages.
//!
//! A [`LintDiagnostic`] points into the requirement tree with a slash
//! separated id path such as `general/science/sci`, which stays stable
//! regardless of whether the definition was written as YAML or JSON.

use super::rule::{RuleId, Severity};

/// A diagnostic message produced by a lint rule.
#[derive(Debug, Clone)]
pub struct LintDiagnostic {
    /// The rule that produced this diagnostic.
    pub rule_id: RuleId,
    /// Severity of this diagnostic.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Location in the requirement tree.
    pub path: Option<String>,
    /// Optional suggestion for fixing the issue.
    pub suggestion: Option<String>,
    /// Additional related locations.
    pub related: Vec<RelatedInfo>,
}

/// Additional information related to a diagnostic.
#[derive(Debug, Clone)]
pub struct RelatedInfo {
    pub path: String,
    pub message: String,
}

impl LintDiagnostic {
    /// Create a new diagnostic.
    pub fn new(rule_id: RuleId, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            rule_id,
            severity,
            message: message.into(),
            path: None,
            suggestion: None,
            related: vec![],
        }
    }

    /// Attach the tree location.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add a fix suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add related information.
    pub fn with_related(mut self, path: impl Into<String>, message: impl Into<String>) -> Self {
        self.related.push(RelatedInfo {
            path: path.into(),
            message: message.into(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_creation() {
        let diag = LintDiagnostic::new(RuleId::new("empty-group"), Severity::Warning, "No rules");

        assert_eq!(diag.rule_id, RuleId::new("empty-group"));
        assert_eq!(diag.severity, Severity::Warning);
        assert_eq!(diag.message, "No rules");
        assert!(diag.path.is_none());
        assert!(diag.suggestion.is_none());
        assert!(diag.related.is_empty());
    }

    #[test]
    fn diagnostic_builder_pattern() {
        let diag = LintDiagnostic::new(RuleId::new("credit-bounds"), Severity::Error, "min > max")
            .with_path("general/science/sci")
            .with_suggestion("Raise maxCredits");

        assert_eq!(diag.path.as_deref(), Some("general/science/sci"));
        assert_eq!(diag.suggestion.as_deref(), Some("Raise maxCredits"));
    }

    #[test]
    fn diagnostic_with_related_info() {
        let diag = LintDiagnostic::new(
            RuleId::new("duplicate-id"),
            Severity::Error,
            "Duplicate group id 'sci'",
        )
        .with_related("general/science/sci", "first defined here");

        assert_eq!(diag.related.len(), 1);
        assert_eq!(diag.related[0].path, "general/science/sci");
    }
}
