//! Migrate command implementation.
//!
//! The `gradtrack migrate` command rewrites a requirement definition into
//! the current schema and prints it (or writes it to `--output`).

use std::fs;
use std::path::PathBuf;

use crate::cli::args::{DocumentFormat, MigrateArgs};
use crate::config::{load_requirements, needs_migration, InputFormat};
use crate::error::{GradError, Result};
use crate::model::GraduationRequirements;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The migrate command implementation.
pub struct MigrateCommand {
    args: MigrateArgs,
}

impl MigrateCommand {
    /// Create a new migrate command.
    pub fn new(args: MigrateArgs) -> Self {
        Self { args }
    }

    /// Whether the source file used any legacy construct.
    fn was_legacy(&self) -> Result<bool> {
        let content = fs::read_to_string(&self.args.file)?;
        let value: serde_yaml::Value = match InputFormat::from_path(&self.args.file) {
            InputFormat::Json => serde_json::from_str(&content).map_err(anyhow::Error::from)?,
            InputFormat::Yaml => serde_yaml::from_str(&content).map_err(anyhow::Error::from)?,
        };
        Ok(needs_migration(&value))
    }

    fn render(&self, requirements: &GraduationRequirements) -> Result<String> {
        let rendered = match self.args.format {
            DocumentFormat::Yaml => {
                serde_yaml::to_string(requirements).map_err(anyhow::Error::from)?
            }
            DocumentFormat::Json => {
                serde_json::to_string_pretty(requirements).map_err(anyhow::Error::from)?
            }
        };
        Ok(rendered)
    }

    fn output_path(&self) -> Option<&PathBuf> {
        self.args.output.as_ref()
    }
}

impl Command for MigrateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let requirements = match load_requirements(&self.args.file) {
            Ok(r) => r,
            Err(e @ (GradError::InputNotFound { .. } | GradError::InputParseError { .. })) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        let rendered = self.render(&requirements)?;

        match self.output_path() {
            Some(path) => {
                fs::write(path, &rendered)?;
                if self.was_legacy()? {
                    ui.success(&format!(
                        "Migrated {} to {}",
                        self.args.file.display(),
                        path.display()
                    ));
                } else {
                    ui.message(&format!(
                        "{} already uses the current schema; written to {}",
                        self.args.file.display(),
                        path.display()
                    ));
                }
            }
            None => ui.emit(rendered.trim_end()),
        }

        Ok(CommandResult::success())
    }
}
