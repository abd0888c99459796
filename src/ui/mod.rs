//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for TTY output with colors
//! - [`NonInteractiveUI`] for pipes, CI and `--no-color`
//! - [`MockUI`] capturing output for tests
//! - Tables, status icons and theme
//!
//! # Example
//!
//! ```
//! use gradtrack::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("Computer Science 2024");
//! ui.success("Eligible for graduation");
//! ```

pub mod icons;
pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod table;
pub mod terminal;
pub mod theme;

pub use icons::StatusKind;
pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use table::Table;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{format_credit, should_use_colors, GradtrackTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Change the output mode (config defaults apply after startup).
    fn set_output_mode(&mut self, mode: OutputMode);

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Shown in every mode.
    fn error(&mut self, msg: &str);

    /// Display one line of the requirement tree.
    fn status_line(&mut self, kind: StatusKind, indent: usize, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show a contextual hint.
    fn show_hint(&mut self, hint: &str);

    /// Write machine-readable output verbatim, regardless of mode.
    fn emit(&mut self, data: &str);

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}
