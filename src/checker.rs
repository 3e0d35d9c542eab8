//! Report consistency checking.
//!
//! Every unit directory under the solution root must contain a report.
//! The checker only reads the filesystem.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::DaykitConfig;
use crate::error::{DaykitError, Result};
use crate::unit::UnitNamePattern;

/// A unit directory without a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingReport {
    /// Directory name, e.g. `day07`.
    pub unit: String,
    /// Expected report path.
    pub path: PathBuf,
    /// Unit number parsed from the directory name, when it has one.
    pub day: Option<u32>,
}

/// Outcome of a check run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckSummary {
    /// Unit directories examined.
    pub checked: usize,
    /// Directories lacking a report.
    pub missing: Vec<MissingReport>,
}

impl CheckSummary {
    pub fn is_ok(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Checks that every unit directory has a report.
pub struct ConsistencyChecker<'a> {
    project_root: &'a Path,
    config: &'a DaykitConfig,
    fail_fast: bool,
}

impl<'a> ConsistencyChecker<'a> {
    /// Create a checker for a project.
    pub fn new(project_root: &'a Path, config: &'a DaykitConfig) -> Self {
        Self {
            project_root,
            config,
            fail_fast: false,
        }
    }

    /// Stop at the first missing report, in directory iteration order.
    pub fn fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Examine every unit directory.
    ///
    /// Without fail-fast, directories are visited in name order so the
    /// list of missing reports is stable across platforms.
    pub fn check(&self) -> Result<CheckSummary> {
        let layout = &self.config.layout;
        let root = self.project_root.join(&layout.solution_root);
        if !root.is_dir() {
            return Err(DaykitError::SolutionRootMissing { path: root });
        }

        let pattern = UnitNamePattern::new(&layout.unit_prefix)?;
        let mut dirs = Vec::new();
        for entry in fs::read_dir(&root)? {
            // Follows symlinks so linked unit directories are checked too.
            let path = entry?.path();
            if path.is_dir() {
                dirs.push(path);
            }
        }
        if !self.fail_fast {
            dirs.sort();
        }

        let mut summary = CheckSummary::default();
        for dir in dirs {
            summary.checked += 1;
            let report = dir.join(&layout.report_file);
            if report.exists() {
                continue;
            }

            let unit = dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            tracing::debug!("{} has no report", dir.display());

            summary.missing.push(MissingReport {
                day: pattern.parse(&unit),
                unit,
                path: report,
            });

            if self.fail_fast {
                break;
            }
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup(units: &[(&str, bool)]) -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("lib/solution/src");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("lib.rs"), "pub mod day01;\n").unwrap();
        for (name, has_report) in units {
            let dir = root.join(name);
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join("mod.rs"), "").unwrap();
            if *has_report {
                fs::write(dir.join("readme.md"), "# report\n").unwrap();
            }
        }
        temp
    }

    #[test]
    fn all_reports_present() {
        let temp = setup(&[("day01", true), ("day02", true)]);
        let config = DaykitConfig::default();

        let summary = ConsistencyChecker::new(temp.path(), &config).check().unwrap();

        assert!(summary.is_ok());
        assert_eq!(summary.checked, 2);
    }

    #[test]
    fn plain_files_are_ignored() {
        let temp = setup(&[]);
        let config = DaykitConfig::default();

        let summary = ConsistencyChecker::new(temp.path(), &config).check().unwrap();

        assert!(summary.is_ok());
        assert_eq!(summary.checked, 0);
    }

    #[test]
    fn collects_every_missing_report_in_order() {
        let temp = setup(&[("day03", false), ("day01", true), ("day02", false)]);
        let config = DaykitConfig::default();

        let summary = ConsistencyChecker::new(temp.path(), &config).check().unwrap();

        let units: Vec<&str> = summary.missing.iter().map(|m| m.unit.as_str()).collect();
        assert_eq!(units, vec!["day02", "day03"]);
        assert_eq!(summary.missing[0].day, Some(2));
        assert_eq!(summary.checked, 3);
    }

    #[test]
    fn fail_fast_stops_at_first() {
        let temp = setup(&[("day01", false), ("day02", false), ("day03", false)]);
        let config = DaykitConfig::default();

        let summary = ConsistencyChecker::new(temp.path(), &config)
            .fail_fast(true)
            .check()
            .unwrap();

        assert_eq!(summary.missing.len(), 1);
        assert_eq!(summary.checked, 1);
    }

    #[test]
    fn non_unit_directory_has_no_day() {
        let temp = setup(&[("helpers", false)]);
        let config = DaykitConfig::default();

        let summary = ConsistencyChecker::new(temp.path(), &config).check().unwrap();

        assert_eq!(summary.missing[0].unit, "helpers");
        assert_eq!(summary.missing[0].day, None);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_unit_directory_is_checked() {
        let temp = setup(&[]);
        let target = temp.path().join("elsewhere/day09");
        fs::create_dir_all(&target).unwrap();
        std::os::unix::fs::symlink(&target, temp.path().join("lib/solution/src/day09")).unwrap();
        let config = DaykitConfig::default();

        let summary = ConsistencyChecker::new(temp.path(), &config).check().unwrap();

        assert_eq!(summary.checked, 1);
        assert_eq!(summary.missing.len(), 1);
        assert_eq!(summary.missing[0].day, Some(9));
    }

    #[test]
    fn missing_root_is_an_error() {
        let temp = TempDir::new().unwrap();
        let config = DaykitConfig::default();

        let err = ConsistencyChecker::new(temp.path(), &config)
            .check()
            .unwrap_err();

        assert!(matches!(err, DaykitError::SolutionRootMissing { .. }));
    }

    #[test]
    fn summary_serializes_to_json() {
        let summary = CheckSummary {
            checked: 1,
            missing: vec![MissingReport {
                unit: "day07".to_string(),
                path: PathBuf::from("lib/solution/src/day07/readme.md"),
                day: Some(7),
            }],
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["checked"], 1);
        assert_eq!(json["missing"][0]["unit"], "day07");
        assert_eq!(json["missing"][0]["day"], 7);
    }
}
