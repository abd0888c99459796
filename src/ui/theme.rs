//! Visual theme and styling.

use console::Style;

/// gradtrack's visual theme.
#[derive(Debug, Clone)]
pub struct GradtrackTheme {
    /// Satisfied requirements (green).
    pub success: Style,
    /// Credits still in progress (orange).
    pub warning: Style,
    /// Unsatisfied requirements (red bold).
    pub error: Style,
    /// Pending lookups and informational markers (magenta).
    pub info: Style,
    /// Secondary text such as ids and matched course lists.
    pub dim: Style,
    /// Node names (bold).
    pub highlight: Style,
    /// Headers (magenta bold).
    pub header: Style,
    /// Box-drawing borders and tree guides (dim).
    pub border: Style,
    /// Contextual hints (magenta dim).
    pub hint: Style,
    /// Credit figures (bold).
    pub credits: Style,
}

impl Default for GradtrackTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl GradtrackTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            info: Style::new().magenta(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().magenta(),
            border: Style::new().dim(),
            hint: Style::new().magenta().dim(),
            credits: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            border: Style::new(),
            hint: Style::new(),
            credits: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{} {}",
            self.header.apply_to("🎓"),
            self.highlight.apply_to(title)
        )
    }

    /// Format an `earned / required` credit figure.
    pub fn format_credits(&self, earned: f64, required: f64) -> String {
        format!(
            "{} / {}",
            self.credits.apply_to(format_credit(earned)),
            format_credit(required)
        )
    }
}

/// Render a credit value without a trailing `.0` for whole numbers.
pub fn format_credit(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_messages() {
        let theme = GradtrackTheme::plain();

        assert_eq!(theme.format_success("Complete"), "✓ Complete");
        assert_eq!(theme.format_warning("Caution"), "⚠ Caution");
        assert_eq!(theme.format_error("Failed"), "✗ Failed");
    }

    #[test]
    fn theme_formats_header() {
        let theme = GradtrackTheme::plain();
        let msg = theme.format_header("Computer Science 2024");
        assert!(msg.contains("Computer Science 2024"));
    }

    #[test]
    fn formats_credit_values() {
        assert_eq!(format_credit(4.0), "4");
        assert_eq!(format_credit(1.5), "1.5");
        assert_eq!(GradtrackTheme::plain().format_credits(2.0, 4.5), "2 / 4.5");
    }

    #[test]
    fn default_impl_matches_new() {
        let default = GradtrackTheme::default();
        let new = GradtrackTheme::new();
        assert_eq!(default.format_success("test"), new.format_success("test"));
    }
}
