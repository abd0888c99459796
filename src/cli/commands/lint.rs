//! Lint command implementation.
//!
//! The `gradtrack lint` command checks a requirement definition using the
//! lint rule system.

use std::path::{Path, PathBuf};

use crate::cli::args::LintArgs;
use crate::config::load_requirements;
use crate::error::{GradError, Result};
use crate::lint::{
    HumanFormatter, JsonFormatter, LintDiagnostic, LintFormatter, OutputFormat, RuleRegistry,
    Severity,
};
use crate::ui::{should_use_colors, UserInterface};

use super::context::ProjectContext;
use super::dispatcher::{Command, CommandResult};

/// The lint command implementation.
pub struct LintCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: LintArgs,
}

impl LintCommand {
    /// Create a new lint command.
    pub fn new(project_root: &Path, args: LintArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: None,
            args,
        }
    }

    /// Read the project config from `path` instead of `.gradtrack/`.
    pub fn with_config(mut self, path: Option<PathBuf>) -> Self {
        self.config_override = path;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Format diagnostics using the appropriate formatter.
    fn format_output(&self, diagnostics: &[LintDiagnostic]) -> String {
        let mut output = Vec::new();

        match self.args.format {
            OutputFormat::Json => {
                JsonFormatter::new().format(diagnostics, &mut output).ok();
            }
            OutputFormat::Human => {
                HumanFormatter::new(should_use_colors())
                    .format(diagnostics, &mut output)
                    .ok();
            }
        }

        String::from_utf8(output).unwrap_or_default()
    }
}

impl Command for LintCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = ProjectContext::load(&self.project_root, self.config_override.as_deref(), ui)?;

        let Some(path) = ctx.requirements_path(&self.args.inputs) else {
            ui.error("No requirement definition given.");
            ui.show_hint("Pass --requirements or set inputs.requirements in .gradtrack/config.yml");
            return Ok(CommandResult::failure(2));
        };

        let requirements = match load_requirements(&path) {
            Ok(r) => r,
            Err(GradError::InputParseError { path, message, .. }) => {
                ui.error(&format!("Parse error in {}: {}", path.display(), message));
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        let mut registry = RuleRegistry::with_builtins();
        if let Some(master) = ctx.course_types(&self.args.inputs)? {
            registry = registry.with_course_types(master);
        }

        let diagnostics = registry.check(&requirements);

        let has_errors = diagnostics.iter().any(|d| d.severity == Severity::Error);
        let has_warnings = diagnostics.iter().any(|d| d.severity == Severity::Warning);
        let should_fail = has_errors || (self.args.strict && has_warnings);

        match self.args.format {
            OutputFormat::Json => ui.emit(self.format_output(&diagnostics).trim_end()),
            OutputFormat::Human if diagnostics.is_empty() => {
                ui.success(&format!("{} is valid", path.display()));
            }
            OutputFormat::Human => {
                for line in self.format_output(&diagnostics).lines() {
                    let plain = console::strip_ansi_codes(line);
                    if plain.starts_with("error[") {
                        ui.error(line);
                    } else if plain.starts_with("warning[") {
                        ui.warning(line);
                    } else {
                        ui.message(line);
                    }
                }
            }
        }

        if should_fail {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}
