//! Check command implementation.
//!
//! The `daykit check` command verifies that every unit directory has a
//! report. It never modifies the project.

use std::path::{Path, PathBuf};

use crate::checker::{CheckSummary, ConsistencyChecker};
use crate::cli::args::CheckArgs;
use crate::config::DaykitConfig;
use crate::error::Result;
use crate::ui::{hints, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    config: DaykitConfig,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, config: DaykitConfig, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config,
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }

    fn show_human(&self, ui: &mut dyn UserInterface, summary: &CheckSummary) {
        ui.show_header("Report check");

        for missing in &summary.missing {
            let path = missing
                .path
                .strip_prefix(&self.project_root)
                .unwrap_or(&missing.path);
            ui.error(&format!("{} has no report ({})", missing.unit, path.display()));
            ui.show_hint(&hints::generate_report(missing.day, &missing.unit));
        }

        if summary.is_ok() {
            ui.success(&format!(
                "All {} unit directories have a report",
                summary.checked
            ));
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let summary = ConsistencyChecker::new(&self.project_root, &self.config)
            .fail_fast(self.args.fail_fast)
            .check()?;

        match self.args.format.as_str() {
            "json" => {
                let json = serde_json::to_string_pretty(&summary).map_err(anyhow::Error::from)?;
                println!("{}", json);
            }
            _ => self.show_human(ui, &summary),
        }

        if summary.is_ok() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DaykitError;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn setup(units: &[(&str, bool)]) -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("lib/solution/src");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("lib.rs"), "").unwrap();
        for (name, has_report) in units {
            fs::create_dir_all(root.join(name)).unwrap();
            if *has_report {
                fs::write(root.join(name).join("readme.md"), "# done\n").unwrap();
            }
        }
        temp
    }

    fn run(temp: &TempDir, args: CheckArgs) -> Result<(CommandResult, MockUI)> {
        let cmd = CheckCommand::new(temp.path(), DaykitConfig::default(), args);
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui)?;
        Ok((result, ui))
    }

    fn human() -> CheckArgs {
        CheckArgs {
            fail_fast: false,
            format: "human".to_string(),
        }
    }

    #[test]
    fn passes_when_all_reports_exist() {
        let temp = setup(&[("day01", true), ("day02", true)]);

        let (result, ui) = run(&temp, human()).unwrap();

        assert!(result.success);
        assert!(ui.has_success("All 2 unit directories"));
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn reports_every_missing_unit() {
        let temp = setup(&[("day01", true), ("day02", false), ("day05", false)]);

        let (result, ui) = run(&temp, human()).unwrap();

        assert_eq!(result.exit_code, 1);
        assert_eq!(ui.errors().len(), 2);
        assert!(ui.has_error("day02"));
        assert!(ui.has_error("day05"));
        assert!(ui.has_hint("daykit readme 2"));
        assert!(ui.has_hint("daykit readme 5"));
    }

    #[test]
    fn fail_fast_reports_one() {
        let temp = setup(&[("day01", false), ("day02", false)]);

        let (result, ui) = run(
            &temp,
            CheckArgs {
                fail_fast: true,
                ..human()
            },
        )
        .unwrap();

        assert_eq!(result.exit_code, 1);
        assert_eq!(ui.errors().len(), 1);
    }

    #[test]
    fn json_format_skips_human_output() {
        let temp = setup(&[("day01", false)]);

        let (result, ui) = run(
            &temp,
            CheckArgs {
                fail_fast: false,
                format: "json".to_string(),
            },
        )
        .unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.errors().is_empty());
        assert!(ui.headers().is_empty());
    }

    #[test]
    fn missing_solution_root_is_an_error() {
        let temp = TempDir::new().unwrap();

        let err = run(&temp, human()).unwrap_err();

        assert!(matches!(err, DaykitError::SolutionRootMissing { .. }));
    }

    #[test]
    fn does_not_modify_project() {
        let temp = setup(&[("day01", false)]);

        run(&temp, human()).unwrap();

        assert!(!temp.path().join("lib/solution/src/day01/readme.md").exists());
    }
}
