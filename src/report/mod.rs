//! Report generation.
//!
//! A unit's report is rendered from the report template with the unit
//! number and the captured output of both parts. It is regenerated from
//! scratch on every run.

pub mod capture;

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{render, DaykitConfig};
use crate::error::Result;
use crate::templates::{load_template, TemplateKind};
use crate::unit::Unit;

pub use capture::{trim_trailing_blank_lines, Part, PartCapture, PartRunner, RunStatus, ShellRunner};

/// Result of generating one report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOutcome {
    /// Report file location.
    pub path: PathBuf,
    /// One capture per part, in part order.
    pub captures: Vec<PartCapture>,
    /// False when a strict run refused to write.
    pub written: bool,
}

impl ReportOutcome {
    /// Parts whose runner did not exit successfully.
    pub fn failed_parts(&self) -> Vec<&PartCapture> {
        self.captures
            .iter()
            .filter(|c| !c.status.is_success())
            .collect()
    }
}

/// Render report text from captured parts.
pub fn render_report(template: &str, unit: &Unit, captures: &[PartCapture]) -> Result<String> {
    let mut ctx = unit.context();
    for capture in captures {
        ctx.set(capture.part.slot(), capture.output.clone());
    }
    render(template, &ctx)
}

/// Generates report files for units of a project.
pub struct ReportGenerator<'a> {
    project_root: &'a Path,
    config: &'a DaykitConfig,
    strict: bool,
}

impl<'a> ReportGenerator<'a> {
    /// Create a generator for a project.
    pub fn new(project_root: &'a Path, config: &'a DaykitConfig) -> Self {
        Self {
            project_root,
            config,
            strict: false,
        }
    }

    /// Refuse to write a report when any part failed.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Runner for the configured command, executed from the project root.
    pub fn shell_runner(&self) -> ShellRunner {
        ShellRunner::new(self.config.runner.command.clone(), self.project_root)
    }

    /// Run both parts and write the unit's report.
    pub fn generate(&self, unit: &Unit, runner: &dyn PartRunner) -> Result<ReportOutcome> {
        let template = load_template(self.project_root, &self.config.templates, TemplateKind::Report)?;
        let path = unit.report_path(self.project_root, &self.config.layout);

        let captures = Part::ALL
            .iter()
            .map(|&part| runner.run(unit, part))
            .collect::<Result<Vec<_>>>()?;

        let mut outcome = ReportOutcome {
            path,
            captures,
            written: false,
        };

        if self.strict && !outcome.failed_parts().is_empty() {
            tracing::debug!("Not writing {}: a part failed", outcome.path.display());
            return Ok(outcome);
        }

        let content = render_report(&template, unit, &outcome.captures)?;
        if let Some(dir) = outcome.path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&outcome.path, content)?;
        tracing::debug!("Wrote report {}", outcome.path.display());

        outcome.written = true;
        Ok(outcome)
    }
}
