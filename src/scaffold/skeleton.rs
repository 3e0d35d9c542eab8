//! Skeleton file creation.
//!
//! The skeleton is the one file a person edits by hand right after it is
//! generated, so it is never overwritten: the write uses create-new
//! semantics and an existing file short-circuits before the template is
//! even loaded.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::config::{render, DaykitConfig};
use crate::error::Result;
use crate::templates::{load_template, TemplateKind};
use crate::unit::Unit;

/// What skeleton creation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkeletonOutcome {
    /// A new skeleton was written (or would be, in dry-run mode).
    Created(PathBuf),
    /// A skeleton already exists and was left untouched.
    AlreadyExists(PathBuf),
}

impl SkeletonOutcome {
    /// Path of the skeleton file.
    pub fn path(&self) -> &Path {
        match self {
            Self::Created(p) | Self::AlreadyExists(p) => p,
        }
    }
}

/// Create the unit's skeleton file unless one exists.
pub fn ensure_skeleton(
    project_root: &Path,
    config: &DaykitConfig,
    unit: &Unit,
    dry_run: bool,
) -> Result<SkeletonOutcome> {
    let path = unit.skeleton_path(project_root, &config.layout);

    if path.exists() {
        tracing::debug!("Skeleton {} exists, leaving it alone", path.display());
        return Ok(SkeletonOutcome::AlreadyExists(path));
    }

    let template = load_template(project_root, &config.templates, TemplateKind::Skeleton)?;
    let content = render(&template, &unit.context())?;

    if dry_run {
        return Ok(SkeletonOutcome::Created(path));
    }

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            tracing::debug!("Skeleton {} appeared concurrently", path.display());
            return Ok(SkeletonOutcome::AlreadyExists(path));
        }
        Err(e) => return Err(e.into()),
    };
    file.write_all(content.as_bytes())?;

    tracing::debug!("Wrote skeleton {}", path.display());
    Ok(SkeletonOutcome::Created(path))
}
