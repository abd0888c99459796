//! Plain UI for pipes, CI logs and `--no-color`.

use super::{OutputMode, StatusKind, UserInterface};

/// UI implementation writing unstyled text.
///
/// Status lines use bracketed markers (`[ok]`, `[missing]`) so output
/// stays greppable. Warnings and errors go to stderr.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn status_line(&mut self, kind: StatusKind, indent: usize, msg: &str) {
        if self.mode.shows_status() {
            println!("{}{}", "  ".repeat(indent), kind.format_plain(msg));
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("=== {} ===", title);
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            println!("  {}", hint);
        }
    }

    fn emit(&mut self, data: &str) {
        println!("{}", data);
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
