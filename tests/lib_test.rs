//! Library integration tests.

use gradtrack::GradError;

#[test]
fn error_types_are_public() {
    let err = GradError::MigrationError {
        message: "test".into(),
    };
    assert!(err.to_string().contains("test"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> gradtrack::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use gradtrack::cli::{Cli, Commands, ReportFormat};
    use clap::Parser;

    let cli = Cli::parse_from(["gradtrack", "check", "--format", "json"]);
    assert!(cli.command.is_some());

    if let Some(Commands::Check(args)) = cli.command {
        assert_eq!(args.format, ReportFormat::Json);
    } else {
        panic!("Expected Check command");
    }
}
