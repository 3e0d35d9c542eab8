//! Skeleton and report templates.
//!
//! A project's own template file wins; when it is absent the built-in copy
//! embedded at compile time is used. Loaded text always has `\n` line
//! endings.

use std::fs;
use std::path::{Path, PathBuf};

use include_dir::{include_dir, Dir};

use crate::config::TemplatePaths;
use crate::error::{DaykitError, Result};

/// Embedded default templates.
static BUILTIN_TEMPLATES: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// The two template assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// Starting source file of a new unit.
    Skeleton,
    /// Per-unit report embedding both parts' output.
    Report,
}

impl TemplateKind {
    /// File name of the built-in copy.
    fn builtin_name(self) -> &'static str {
        match self {
            Self::Skeleton => "day_mod.rs",
            Self::Report => "day_readme.md",
        }
    }

    /// Project-relative path from config.
    fn configured_path(self, paths: &TemplatePaths) -> &Path {
        match self {
            Self::Skeleton => &paths.skeleton,
            Self::Report => &paths.report,
        }
    }
}

/// Load a template, preferring the project's copy.
pub fn load_template(
    project_root: &Path,
    paths: &TemplatePaths,
    kind: TemplateKind,
) -> Result<String> {
    let path = project_root.join(kind.configured_path(paths));
    if path.is_file() {
        tracing::debug!("Using project template {}", path.display());
        let content = fs::read_to_string(&path)?;
        return Ok(normalize_line_endings(&content));
    }

    tracing::debug!(
        "No template at {}, using built-in {}",
        path.display(),
        kind.builtin_name()
    );
    builtin_template(kind)
}

/// Load the embedded copy of a template.
pub fn builtin_template(kind: TemplateKind) -> Result<String> {
    let name = kind.builtin_name();
    let content = BUILTIN_TEMPLATES
        .get_file(name)
        .and_then(|f| f.contents_utf8())
        .ok_or_else(|| DaykitError::TemplateNotFound {
            path: PathBuf::from("templates").join(name),
        })?;
    Ok(normalize_line_endings(content))
}

/// Convert `\r\n` and lone `\r` to `\n`.
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{render, TemplateContext};
    use tempfile::TempDir;

    #[test]
    fn builtin_skeleton_renders_with_day_slots() {
        let text = builtin_template(TemplateKind::Skeleton).unwrap();
        let ctx = TemplateContext::new()
            .with("day", "7")
            .with("padded_day", "07");

        let out = render(&text, &ctx).unwrap();
        assert!(out.contains("day07"));
        assert!(!out.contains("${"));
    }

    #[test]
    fn builtin_report_has_both_parts() {
        let text = builtin_template(TemplateKind::Report).unwrap();
        let ctx = TemplateContext::new()
            .with("day", "3")
            .with("part1", "first answer")
            .with("part2", "second answer");

        let out = render(&text, &ctx).unwrap();
        assert!(out.contains("Day 3"));
        assert!(out.contains("first answer"));
        assert!(out.contains("second answer"));
    }

    #[test]
    fn project_template_overrides_builtin() {
        let temp = TempDir::new().unwrap();
        let paths = TemplatePaths::default();
        let path = temp.path().join(&paths.report);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "custom ${day}\r\n").unwrap();

        let text = load_template(temp.path(), &paths, TemplateKind::Report).unwrap();
        assert_eq!(text, "custom ${day}\n");
    }

    #[test]
    fn missing_project_template_falls_back() {
        let temp = TempDir::new().unwrap();
        let text =
            load_template(temp.path(), &TemplatePaths::default(), TemplateKind::Skeleton).unwrap();
        assert!(text.contains("impl aoc::Solver for Solution"));
    }

    #[test]
    fn normalizes_line_endings() {
        assert_eq!(normalize_line_endings("a\r\nb\rc\n"), "a\nb\nc\n");
    }
}
