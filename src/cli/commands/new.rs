//! New command implementation.
//!
//! The `daykit new <day>` command creates a unit's skeleton and registers
//! it in the aggregator and dispatcher files.

use std::path::{Path, PathBuf};

use crate::cli::args::NewArgs;
use crate::config::DaykitConfig;
use crate::error::Result;
use crate::scaffold::{ActivationOutcome, RegistrationOutcome, ScaffoldReport, Scaffolder, SkeletonOutcome};
use crate::ui::{hints, UserInterface};
use crate::unit::Unit;

use super::dispatcher::{Command, CommandResult, UNIT_USAGE};

/// The new command implementation.
pub struct NewCommand {
    project_root: PathBuf,
    config: DaykitConfig,
    args: NewArgs,
}

impl NewCommand {
    /// Create a new `new` command.
    pub fn new(project_root: &Path, config: DaykitConfig, args: NewArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config,
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &NewArgs {
        &self.args
    }

    fn relative<'p>(&self, path: &'p Path) -> &'p Path {
        path.strip_prefix(&self.project_root).unwrap_or(path)
    }

    fn show_report(&self, ui: &mut dyn UserInterface, unit: &Unit, report: &ScaffoldReport) {
        let details = ui.output_mode().shows_details();
        let verb = if self.args.dry_run { "Would create" } else { "Created" };
        let skeleton = self.relative(report.skeleton.path());
        match report.skeleton {
            SkeletonOutcome::Created(_) => {
                ui.success(&format!("{} {}", verb, skeleton.display()));
            }
            SkeletonOutcome::AlreadyExists(_) => {
                if details {
                    ui.message(&format!("{} already exists", skeleton.display()));
                }
            }
        }

        let layout = &self.config.layout;
        let ctx = unit.context();
        match report.aggregator {
            ActivationOutcome::Activated => {
                let verb = if self.args.dry_run { "Would activate" } else { "Activated" };
                ui.success(&format!("{} module in {}", verb, layout.aggregator.display()));
            }
            ActivationOutcome::AlreadyActive => {
                if details {
                    ui.message(&format!("Module already active in {}", layout.aggregator.display()));
                }
            }
            ActivationOutcome::MarkerMissing => {
                let expected = crate::config::render(&self.config.markers.aggregator_inactive, &ctx)
                    .unwrap_or_default();
                ui.warning(&format!(
                    "No module line for day {} in {}",
                    unit,
                    layout.aggregator.display()
                ));
                ui.show_hint(&hints::missing_marker(
                    &layout.aggregator.display().to_string(),
                    &expected,
                ));
            }
        }

        match report.dispatcher {
            RegistrationOutcome::Registered => {
                let verb = if self.args.dry_run { "Would register" } else { "Registered" };
                ui.success(&format!("{} day {} in {}", verb, unit, layout.dispatcher.display()));
            }
            RegistrationOutcome::AlreadyRegistered => {
                if details {
                    ui.message(&format!(
                        "Day {} already registered in {}",
                        unit,
                        layout.dispatcher.display()
                    ));
                }
            }
            RegistrationOutcome::PlaceholderMissing => {
                let expected =
                    crate::config::render(&self.config.markers.dispatcher_placeholder, &ctx)
                        .unwrap_or_default();
                ui.warning(&format!(
                    "No placeholder arm for day {} in {}",
                    unit,
                    layout.dispatcher.display()
                ));
                ui.show_hint(&hints::missing_marker(
                    &layout.dispatcher.display().to_string(),
                    &expected,
                ));
            }
        }
    }
}

impl Command for NewCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(day) = self.args.day else {
            ui.message(UNIT_USAGE);
            return Ok(CommandResult::failure(1));
        };

        let unit = Unit::for_layout(day, &self.config.layout);
        ui.show_header(&format!("Day {}", unit));

        let report = Scaffolder::new(&self.project_root, &self.config)
            .dry_run(self.args.dry_run)
            .scaffold(&unit)?;

        self.show_report(ui, &unit, &report);

        if report.has_missing_marker() && self.args.strict {
            ui.error("Registries are out of sync");
            return Ok(CommandResult::failure(1));
        }

        if report.is_noop() {
            ui.message(&format!("Day {} is already set up", unit));
        } else if !self.args.dry_run {
            ui.show_hint(&hints::after_scaffold(unit.id()));
        }

        Ok(CommandResult::success())
    }
}
