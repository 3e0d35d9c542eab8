//! Running one part of a unit and capturing its output.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::Result;
use crate::shell::execute_merged;
use crate::unit::Unit;

/// The two sub-parts of every unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    One,
    Two,
}

impl Part {
    /// Both parts, in report order.
    pub const ALL: [Part; 2] = [Part::One, Part::Two];

    /// Numeric form passed to the runner.
    pub fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }

    /// Template slot holding this part's output.
    pub fn slot(self) -> &'static str {
        match self {
            Self::One => "part1",
            Self::Two => "part2",
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// How the runner process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Exit status 0.
    Success,
    /// Any other exit status.
    NonZeroExit(i32),
    /// Killed by a signal, no exit status.
    Terminated,
}

impl RunStatus {
    /// Build from an optional exit code.
    pub fn from_exit_code(code: Option<i32>) -> Self {
        match code {
            Some(0) => Self::Success,
            Some(code) => Self::NonZeroExit(code),
            None => Self::Terminated,
        }
    }

    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::NonZeroExit(code) => write!(f, "exit code {}", code),
            Self::Terminated => write!(f, "terminated by signal"),
        }
    }
}

/// Captured output of one part.
#[derive(Debug, Clone, PartialEq)]
pub struct PartCapture {
    pub part: Part,
    /// Combined stdout/stderr with trailing blank lines removed.
    pub output: String,
    pub status: RunStatus,
    pub duration: Duration,
}

/// Produces the output of one part of a unit.
pub trait PartRunner {
    fn run(&self, unit: &Unit, part: Part) -> Result<PartCapture>;
}

/// Runs parts through the configured shell command.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    command: String,
    cwd: PathBuf,
}

impl ShellRunner {
    /// Create a runner executing `command` from `cwd`.
    pub fn new(command: impl Into<String>, cwd: &Path) -> Self {
        Self {
            command: command.into(),
            cwd: cwd.to_path_buf(),
        }
    }

    /// Full command line for one part.
    pub fn command_line(&self, unit: &Unit, part: Part) -> String {
        format!(
            "{} --day={} --part={} --time-it",
            self.command.trim_end(),
            unit.id(),
            part
        )
    }
}

impl PartRunner for ShellRunner {
    fn run(&self, unit: &Unit, part: Part) -> Result<PartCapture> {
        let command = self.command_line(unit, part);
        let result = execute_merged(&command, Some(&self.cwd))?;

        Ok(PartCapture {
            part,
            output: trim_trailing_blank_lines(&result.stdout),
            status: RunStatus::from_exit_code(result.exit_code),
            duration: result.duration,
        })
    }
}

/// Drop whitespace-only lines from the end of `text`.
///
/// Lines are rejoined with `\n` and the result has no trailing newline.
/// Everything else, including blank lines in the middle, is kept verbatim.
pub fn trim_trailing_blank_lines(text: &str) -> String {
    let mut lines: Vec<&str> = text.lines().collect();
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}
