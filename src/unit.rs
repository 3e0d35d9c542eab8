//! Unit identity and path derivation.
//!
//! A unit is one numbered puzzle day. Its identifier is rendered both raw
//! (`7`) and zero-padded (`07`); every path and marker derives from those
//! two forms.

use regex::Regex;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::{Layout, TemplateContext};
use crate::error::Result;

/// A numbered work unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    id: u32,
    padded: String,
}

impl Unit {
    /// Create a unit, padding the identifier to `pad_width` digits.
    pub fn new(id: u32, pad_width: usize) -> Self {
        Self {
            id,
            padded: format!("{:0width$}", id, width = pad_width),
        }
    }

    /// Create a unit using the layout's padding width.
    pub fn for_layout(id: u32, layout: &Layout) -> Self {
        Self::new(id, layout.pad_width)
    }

    /// Raw identifier.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Zero-padded identifier.
    pub fn padded(&self) -> &str {
        &self.padded
    }

    /// Template variables `day` and `padded_day`.
    pub fn context(&self) -> TemplateContext {
        TemplateContext::new()
            .with("day", self.id.to_string())
            .with("padded_day", self.padded.clone())
    }

    /// Directory name, e.g. `day07`.
    pub fn dir_name(&self, layout: &Layout) -> String {
        format!("{}{}", layout.unit_prefix, self.padded)
    }

    /// Absolute unit directory.
    pub fn dir(&self, project_root: &Path, layout: &Layout) -> PathBuf {
        project_root
            .join(&layout.solution_root)
            .join(self.dir_name(layout))
    }

    /// Absolute skeleton file path.
    pub fn skeleton_path(&self, project_root: &Path, layout: &Layout) -> PathBuf {
        self.dir(project_root, layout).join(&layout.skeleton_file)
    }

    /// Absolute report file path.
    pub fn report_path(&self, project_root: &Path, layout: &Layout) -> PathBuf {
        self.dir(project_root, layout).join(&layout.report_file)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.padded)
    }
}

/// Matches unit directory names against a prefix.
#[derive(Debug, Clone)]
pub struct UnitNamePattern {
    regex: Regex,
}

impl UnitNamePattern {
    /// Build the pattern `^<prefix>(\d+)$`.
    pub fn new(prefix: &str) -> Result<Self> {
        let pattern = format!(r"^{}(\d+)$", regex::escape(prefix));
        let regex = Regex::new(&pattern).map_err(anyhow::Error::from)?;
        Ok(Self { regex })
    }

    /// Extract the unit number from a directory name.
    pub fn parse(&self, name: &str) -> Option<u32> {
        self.regex
            .captures(name)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }
}
