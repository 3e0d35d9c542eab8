//! Readme command implementation.
//!
//! The `daykit readme <day>` command runs both parts of a unit through the
//! configured runner and writes the captured output to the unit's report.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::cli::args::ReadmeArgs;
use crate::config::DaykitConfig;
use crate::error::Result;
use crate::report::{Part, PartCapture, PartRunner, ReportGenerator};
use crate::ui::{SpinnerHandle, UserInterface};
use crate::unit::Unit;

use super::dispatcher::{Command, CommandResult, UNIT_USAGE};

/// Names the running part on the spinner before delegating.
struct ProgressRunner<'r> {
    inner: &'r dyn PartRunner,
    spinner: RefCell<Box<dyn SpinnerHandle>>,
}

impl PartRunner for ProgressRunner<'_> {
    fn run(&self, unit: &Unit, part: Part) -> Result<PartCapture> {
        self.spinner
            .borrow_mut()
            .set_message(&format!("Running day {} part {}...", unit, part));
        self.inner.run(unit, part)
    }
}

/// The readme command implementation.
pub struct ReadmeCommand {
    project_root: PathBuf,
    config: DaykitConfig,
    args: ReadmeArgs,
}

impl ReadmeCommand {
    /// Create a new readme command.
    pub fn new(project_root: &Path, config: DaykitConfig, args: ReadmeArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config,
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ReadmeArgs {
        &self.args
    }

    /// Execute with a specific part runner.
    pub fn execute_with(
        &self,
        ui: &mut dyn UserInterface,
        runner: &dyn PartRunner,
    ) -> Result<CommandResult> {
        let Some(day) = self.args.day else {
            ui.message(UNIT_USAGE);
            return Ok(CommandResult::failure(1));
        };

        let unit = Unit::for_layout(day, &self.config.layout);
        let generator =
            ReportGenerator::new(&self.project_root, &self.config).strict(self.args.strict);

        let progress = ProgressRunner {
            inner: runner,
            spinner: RefCell::new(ui.start_spinner(&format!("Running day {}...", unit))),
        };
        let result = generator.generate(&unit, &progress);
        let mut spinner = progress.spinner.into_inner();
        let outcome = match result {
            Ok(outcome) => outcome,
            Err(e) => {
                spinner.finish_error(&format!("Day {} failed", unit));
                return Err(e);
            }
        };

        let failed = outcome.failed_parts();
        if failed.is_empty() {
            spinner.finish_success(&format!("Ran both parts of day {}", unit));
        } else {
            spinner.finish_error(&format!("Day {} had failing parts", unit));
        }

        for capture in &outcome.captures {
            if ui.output_mode().shows_command_output() {
                ui.message(&format!(
                    "Part {} ({:.2?}):\n{}",
                    capture.part, capture.duration, capture.output
                ));
            }
            if !capture.status.is_success() {
                ui.warning(&format!("Part {} failed: {}", capture.part, capture.status));
            }
        }

        let path = outcome
            .path
            .strip_prefix(&self.project_root)
            .unwrap_or(&outcome.path);

        if !outcome.written {
            ui.error(&format!("Not writing {}: a part failed", path.display()));
            return Ok(CommandResult::failure(1));
        }

        ui.success(&format!("Wrote {}", path.display()));
        Ok(CommandResult::success())
    }
}

impl Command for ReadmeCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let runner = ReportGenerator::new(&self.project_root, &self.config).shell_runner();
        tracing::debug!("Runner command: {}", self.config.runner.command);
        self.execute_with(ui, &runner)
    }
}
