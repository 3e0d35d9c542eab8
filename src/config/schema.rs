//! Configuration schema types.
//!
//! Every field has a default matching the conventional puzzle-workspace
//! layout, so a project without a config file works out of the box.
//!
//! ```yaml
//! layout:
//!   solution_root: lib/solution/src
//!   unit_prefix: day
//!   pad_width: 2
//! runner:
//!   command: cargo run --release --quiet --
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DaykitConfig {
    /// Where units and registries live.
    pub layout: Layout,

    /// Project-level template files.
    pub templates: TemplatePaths,

    /// Registration line patterns.
    pub markers: Markers,

    /// External command that builds and runs the dispatcher.
    pub runner: Runner,
}

/// Filesystem layout, relative to the project root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Layout {
    /// Directory holding one subdirectory per unit.
    pub solution_root: PathBuf,

    /// Prefix of each unit directory name (`day` in `day07`).
    pub unit_prefix: String,

    /// Zero-padding width of the unit number.
    pub pad_width: usize,

    /// Skeleton file name inside a unit directory.
    pub skeleton_file: String,

    /// Report file name inside a unit directory.
    pub report_file: String,

    /// Module aggregator file.
    pub aggregator: PathBuf,

    /// Runtime dispatcher file.
    pub dispatcher: PathBuf,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            solution_root: PathBuf::from("lib/solution/src"),
            unit_prefix: "day".to_string(),
            pad_width: 2,
            skeleton_file: "mod.rs".to_string(),
            report_file: "readme.md".to_string(),
            aggregator: PathBuf::from("lib/solution/src/lib.rs"),
            dispatcher: PathBuf::from("bin/aoc2022/src/main.rs"),
        }
    }
}

/// Template locations. Missing files fall back to the built-in templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplatePaths {
    /// Skeleton template, slots `day` and `padded_day`.
    pub skeleton: PathBuf,

    /// Report template, slots `day`, `part1` and `part2`.
    pub report: PathBuf,
}

impl Default for TemplatePaths {
    fn default() -> Self {
        Self {
            skeleton: PathBuf::from("template/day_mod.rs"),
            report: PathBuf::from("template/day_readme.md"),
        }
    }
}

/// Registration lines, rendered with `day` and `padded_day`.
///
/// Matching is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Markers {
    /// Commented-out module reference in the aggregator.
    pub aggregator_inactive: String,

    /// Live module reference in the aggregator.
    pub aggregator_active: String,

    /// Dispatcher arm pointing at the missing-solution handler.
    pub dispatcher_placeholder: String,

    /// Dispatcher arm constructing the unit's solution.
    pub dispatcher_concrete: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            aggregator_inactive: "//pub mod day${padded_day};".to_string(),
            aggregator_active: "pub mod day${padded_day};".to_string(),
            dispatcher_placeholder:
                "Day::Day${padded_day} => Box::new(aoc::MissingSolution::new()),".to_string(),
            dispatcher_concrete:
                "Day::Day${padded_day} => Box::new(solution::day${padded_day}::Solution::new()),"
                    .to_string(),
        }
    }
}

/// Runner command settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Runner {
    /// Command prefix; `--day=<id> --part=<n> --time-it` is appended.
    pub command: String,
}

impl Default for Runner {
    fn default() -> Self {
        Self {
            command: "cargo run --quiet --".to_string(),
        }
    }
}
