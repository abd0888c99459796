//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::lint::{OutputFormat, SchemaTarget};

/// gradtrack - Graduation requirement status calculator.
#[derive(Debug, Parser)]
#[command(name = "gradtrack")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .gradtrack/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show matched courses for every group
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Summary only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Calculate graduation requirement status (default if no command specified)
    Check(CheckArgs),

    /// Check a requirement definition for mistakes
    Lint(LintArgs),

    /// Convert a legacy requirement definition to the current schema
    Migrate(MigrateArgs),

    /// Print the JSON Schema of an input document
    Schema(SchemaArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Input file overrides shared by commands that read requirements.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InputArgs {
    /// Requirement definition (YAML or JSON)
    #[arg(short = 'r', long, value_name = "FILE", env = "GRADTRACK_REQUIREMENTS")]
    pub requirements: Option<PathBuf>,

    /// Course-type master used by category rules
    #[arg(short = 't', long, value_name = "FILE", env = "GRADTRACK_COURSE_TYPES")]
    pub course_types: Option<PathBuf>,
}

/// Report format of the `check` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Human,
    Json,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Course records (YAML or JSON list)
    #[arg(short = 'C', long, value_name = "FILE", env = "GRADTRACK_COURSES")]
    pub courses: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = ReportFormat::Human)]
    pub format: ReportFormat,

    /// List courses no requirement claimed
    #[arg(long)]
    pub unmatched: bool,

    /// Exit with status 1 when the student is not eligible to graduate
    #[arg(long)]
    pub fail_if_ineligible: bool,
}

/// Arguments for the `lint` command.
#[derive(Debug, Clone, clap::Args)]
pub struct LintArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

impl Default for LintArgs {
    fn default() -> Self {
        Self {
            inputs: InputArgs::default(),
            format: OutputFormat::Human,
            strict: false,
        }
    }
}

/// Document format written by `migrate`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DocumentFormat {
    #[default]
    Yaml,
    Json,
}

/// Arguments for the `migrate` command.
#[derive(Debug, Clone, clap::Args)]
pub struct MigrateArgs {
    /// Requirement definition to convert
    pub file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = DocumentFormat::Yaml)]
    pub format: DocumentFormat,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `schema` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SchemaArgs {
    /// Which document to describe
    #[arg(long, value_enum, default_value_t = SchemaTarget::Requirements)]
    pub target: SchemaTarget,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_check_with_inputs() {
        let cli = Cli::parse_from([
            "gradtrack",
            "check",
            "--requirements",
            "req.yml",
            "--courses",
            "courses.json",
            "--format",
            "json",
            "--fail-if-ineligible",
        ]);

        match cli.command {
            Some(Commands::Check(args)) => {
                assert_eq!(args.inputs.requirements, Some(PathBuf::from("req.yml")));
                assert_eq!(args.courses, Some(PathBuf::from("courses.json")));
                assert_eq!(args.format, ReportFormat::Json);
                assert!(args.fail_if_ineligible);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["gradtrack", "lint", "--strict", "--quiet", "--no-color"]);

        assert!(cli.quiet);
        assert!(cli.no_color);
        assert!(matches!(cli.command, Some(Commands::Lint(LintArgs { strict: true, .. }))));
    }

    #[test]
    fn parses_migrate_format() {
        let cli = Cli::parse_from(["gradtrack", "migrate", "old.yml", "--format", "json"]);

        match cli.command {
            Some(Commands::Migrate(args)) => {
                assert_eq!(args.file, PathBuf::from("old.yml"));
                assert_eq!(args.format, DocumentFormat::Json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::parse_from(["gradtrack"]);
        assert!(cli.command.is_none());
    }
}
