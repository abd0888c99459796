//! Status vocabulary for requirement nodes.
//!
//! `StatusKind` provides a single canonical set of status icons and
//! colors for categories, subcategories and groups in every output mode.

use super::theme::GradtrackTheme;

/// Display state of one node of the status tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Requirement met with passed courses.
    Satisfied,
    /// Not met yet, but would be once in-progress courses pass.
    InProgress,
    /// Not met.
    Unsatisfied,
    /// Depends on course-type data that was not available.
    Pending,
}

impl StatusKind {
    /// Classify a node from its satisfaction flag and credit figures.
    pub fn classify(is_satisfied: bool, earned: f64, in_progress: f64, required: f64) -> Self {
        if is_satisfied {
            Self::Satisfied
        } else if in_progress > 0.0 && earned + in_progress >= required {
            Self::InProgress
        } else {
            Self::Unsatisfied
        }
    }

    /// Unicode icon for TTY output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Satisfied => "✓",
            Self::InProgress => "◐",
            Self::Unsatisfied => "✗",
            Self::Pending => "◌",
        }
    }

    /// Bracketed text for non-TTY output.
    pub fn bracketed(self) -> &'static str {
        match self {
            Self::Satisfied => "[ok]",
            Self::InProgress => "[in progress]",
            Self::Unsatisfied => "[missing]",
            Self::Pending => "[pending]",
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &GradtrackTheme) -> String {
        let icon = self.icon();
        match self {
            Self::Satisfied => theme.success.apply_to(icon).to_string(),
            Self::InProgress => theme.warning.apply_to(icon).to_string(),
            Self::Unsatisfied => theme.error.apply_to(icon).to_string(),
            Self::Pending => theme.info.apply_to(icon).to_string(),
        }
    }

    /// Format a status line: styled icon + message.
    pub fn format(self, theme: &GradtrackTheme, msg: &str) -> String {
        format!("{} {}", self.styled(theme), msg)
    }

    /// Format a status line for non-TTY: bracketed + message.
    pub fn format_plain(self, msg: &str) -> String {
        format!("{} {}", self.bracketed(), msg)
    }
}
