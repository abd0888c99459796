//! Schema command implementation.
//!
//! The `gradtrack schema` command prints the JSON Schema of an input
//! document, for editor integration.

use crate::cli::args::SchemaArgs;
use crate::error::Result;
use crate::lint::SchemaGenerator;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The schema command implementation.
pub struct SchemaCommand {
    args: SchemaArgs,
}

impl SchemaCommand {
    /// Create a new schema command.
    pub fn new(args: SchemaArgs) -> Self {
        Self { args }
    }
}

impl Command for SchemaCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let schema = SchemaGenerator::new().generate(self.args.target);
        let json = serde_json::to_string_pretty(&schema).map_err(anyhow::Error::from)?;
        ui.emit(&json);
        Ok(CommandResult::success())
    }
}
