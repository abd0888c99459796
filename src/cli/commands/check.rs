//! Check command implementation.
//!
//! The `gradtrack check` command loads the requirement definition and the
//! student's courses, runs the calculator and prints the status tree.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::args::{CheckArgs, ReportFormat};
use crate::config::{load_courses, load_requirements};
use crate::engine::Calculator;
use crate::error::Result;
use crate::model::RequirementStatus;
use crate::ui::UserInterface;

use super::context::ProjectContext;
use super::dispatcher::{Command, CommandResult};
use super::display;

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, args: CheckArgs) -> Self {
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

    pub fn args(&self) -> &CheckArgs {
        &self.args
    }

    /// Load inputs and calculate. `Ok(None)` means an input path is missing
    /// and has already been reported.
    fn calculate(
        &self,
        ctx: &ProjectContext,
        ui: &mut dyn UserInterface,
    ) -> Result<Option<RequirementStatus>> {
        let Some(requirements_path) = ctx.requirements_path(&self.args.inputs) else {
            ui.error("No requirement definition given.");
            ui.show_hint("Pass --requirements or set inputs.requirements in .gradtrack/config.yml");
            return Ok(None);
        };
        let Some(courses_path) = ctx.courses_path(self.args.courses.as_deref()) else {
            ui.error("No course list given.");
            ui.show_hint("Pass --courses or set inputs.courses in .gradtrack/config.yml");
            return Ok(None);
        };

        let requirements = load_requirements(&requirements_path)?;
        let courses = load_courses(&courses_path)?;
        let course_types = ctx.course_types(&self.args.inputs)?;

        let calculator = match &course_types {
            Some(master) => Calculator::with_course_types(master),
            None => Calculator::new(),
        };
        let status = calculator.calculate(&requirements, &courses);

        debug!(
            "Calculated {}: {} / {} credits",
            status.requirements_id, status.total_earned_credits, status.total_credits
        );
        Ok(Some(status))
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = ProjectContext::load(&self.project_root, self.config_override.as_deref(), ui)?;

        let Some(status) = self.calculate(&ctx, ui)? else {
            return Ok(CommandResult::failure(2));
        };

        match self.args.format {
            ReportFormat::Json => {
                let json = serde_json::to_string_pretty(&status)
                    .map_err(|e| anyhow::anyhow!("Failed to serialize status: {}", e))?;
                ui.emit(&json);
            }
            ReportFormat::Human => {
                let unmatched = self.args.unmatched || ctx.config().settings.show_unmatched;
                display::show_report(ui, &status, unmatched);
            }
        }

        if self.args.fail_if_ineligible && !status.is_graduation_eligible {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::InputArgs;
    use crate::ui::{MockUI, StatusKind};
    use std::fs;
    use tempfile::TempDir;

    const REQUIREMENTS: &str = r#"
id: cs-2024
year: 2024
department: Computer Science
totalCredits: 4
categories:
  - id: general
    name: General
    subcategories:
      - id: must
        name: Mandatory
        type: required
        courseNames: [Calculus]
      - id: science
        name: Science
        type: elective
        minCredits: 2
        groups:
          - id: sci
            minCredits: 2
            includeRules:
              - type: prefix
                prefixes: [FG]
"#;

    fn project(courses: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".gradtrack");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("config.yml"),
            "inputs:\n  requirements: req.yml\n  courses: courses.json\n",
        )
        .unwrap();
        fs::write(temp.path().join("req.yml"), REQUIREMENTS).unwrap();
        fs::write(temp.path().join("courses.json"), courses).unwrap();
        temp
    }

    const ELIGIBLE: &str = r#"[
  {"id": "MA101", "name": "Calculus", "credits": 2, "isPassed": true},
  {"id": "FG101", "name": "Physics", "credits": 2, "isPassed": true}
]"#;

    #[test]
    fn check_reports_eligible_student() {
        let temp = project(ELIGIBLE);
        let cmd = CheckCommand::new(temp.path(), CheckArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_success("Eligible for graduation"));
        assert!(ui.has_status(StatusKind::Satisfied, "Science"));
    }

    #[test]
    fn fail_if_ineligible_sets_exit_code() {
        let temp = project(r#"[{"id": "FG101", "name": "Physics", "credits": 2, "isPassed": true}]"#);
        let args = CheckArgs {
            fail_if_ineligible: true,
            ..Default::default()
        };
        let cmd = CheckCommand::new(temp.path(), args);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_warning("2 credit(s) remaining"));
    }

    #[test]
    fn json_format_emits_status() {
        let temp = project(ELIGIBLE);
        let args = CheckArgs {
            format: ReportFormat::Json,
            ..Default::default()
        };
        let cmd = CheckCommand::new(temp.path(), args);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let json: serde_json::Value = serde_json::from_str(&ui.emitted()[0]).unwrap();
        assert_eq!(json["isGraduationEligible"], true);
        assert_eq!(json["totalEarnedCredits"], 4.0);
        assert!(ui.status_lines().is_empty());
    }

    #[test]
    fn missing_requirements_path_exits_2() {
        let temp = TempDir::new().unwrap();
        let cmd = CheckCommand::new(temp.path(), CheckArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 2);
        assert!(ui.has_error("No requirement definition"));
    }

    #[test]
    fn missing_course_file_is_an_error() {
        let temp = project(ELIGIBLE);
        let args = CheckArgs {
            courses: Some(temp.path().join("absent.json")),
            ..Default::default()
        };
        let cmd = CheckCommand::new(temp.path(), args);
        let mut ui = MockUI::new();

        assert!(cmd.execute(&mut ui).is_err());
    }

    #[test]
    fn flags_override_configured_inputs() {
        let temp = project("[]");
        fs::write(temp.path().join("other.json"), ELIGIBLE).unwrap();
        let args = CheckArgs {
            inputs: InputArgs::default(),
            courses: Some(temp.path().join("other.json")),
            ..Default::default()
        };
        let cmd = CheckCommand::new(temp.path(), args);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_success("Eligible for graduation"));
    }

    #[test]
    fn config_override_path_is_used() {
        let temp = project(ELIGIBLE);
        let alt = temp.path().join("alt.yml");
        fs::write(
            &alt,
            format!(
                "settings:\n  show_unmatched: true\ninputs:\n  requirements: {}\n  courses: {}\n",
                temp.path().join("req.yml").display(),
                temp.path().join("courses.json").display()
            ),
        )
        .unwrap();
        let cmd = CheckCommand::new(temp.path(), CheckArgs::default()).with_config(Some(alt));
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_message("All courses counted"));
    }
}
