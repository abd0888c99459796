//! Project context shared by commands that read calculation inputs.
//!
//! Loads the merged project config, applies its output settings and
//! resolves input files. Paths given on the command line are used as is;
//! paths from the config are relative to the project root.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::cli::args::InputArgs;
use crate::config::{
    load_config_or_default, load_course_types, validate_config, GradtrackConfig, InputPaths,
};
use crate::error::Result;
use crate::model::CourseTypeMaster;
use crate::ui::{OutputMode, UserInterface};

/// Loaded configuration for one command invocation.
#[derive(Debug)]
pub struct ProjectContext {
    root: PathBuf,
    config: GradtrackConfig,
}

impl ProjectContext {
    /// Load the project config and apply `settings.default_output` when no
    /// output flag was given.
    pub fn load(
        root: &Path,
        config_override: Option<&Path>,
        ui: &mut dyn UserInterface,
    ) -> Result<Self> {
        let config = load_config_or_default(root, config_override)?;

        for error in validate_config(&config, root) {
            warn!("{}", error.message);
        }

        if ui.output_mode() == OutputMode::Normal {
            ui.set_output_mode(config.settings.default_output.into());
        }

        Ok(Self::new(root, config))
    }

    /// Build a context from an already loaded config.
    pub fn new(root: &Path, config: GradtrackConfig) -> Self {
        Self {
            root: root.to_path_buf(),
            config,
        }
    }

    pub fn config(&self) -> &GradtrackConfig {
        &self.config
    }

    fn pick(&self, flag: Option<&Path>, configured: Option<&Path>) -> Option<PathBuf> {
        flag.map(Path::to_path_buf)
            .or_else(|| configured.map(|p| InputPaths::resolve(&self.root, p)))
    }

    /// Requirement definition path, flag first.
    pub fn requirements_path(&self, args: &InputArgs) -> Option<PathBuf> {
        self.pick(
            args.requirements.as_deref(),
            self.config.inputs.requirements.as_deref(),
        )
    }

    /// Course list path, flag first.
    pub fn courses_path(&self, flag: Option<&Path>) -> Option<PathBuf> {
        self.pick(flag, self.config.inputs.courses.as_deref())
    }

    /// Load the course-type master if one is configured.
    pub fn course_types(&self, args: &InputArgs) -> Result<Option<CourseTypeMaster>> {
        match self.pick(
            args.course_types.as_deref(),
            self.config.inputs.course_types.as_deref(),
        ) {
            Some(path) => load_course_types(&path).map(Some),
            None => {
                debug!("No course-type master configured");
                Ok(None)
            }
        }
    }
}
