//! Module aggregator activation.
//!
//! The aggregator lists every unit as either `//pub mod dayNN;` (inactive)
//! or `pub mod dayNN;` (active). Activation is an exact substring replace;
//! the file is rewritten only when the replace changed something.

use std::fs;
use std::path::Path;

use crate::error::Result;

/// What aggregator activation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationOutcome {
    /// The inactive marker was turned into the active one.
    Activated,
    /// The active marker was already present.
    AlreadyActive,
    /// Neither form of the marker was found.
    MarkerMissing,
}

/// Replace `inactive` with `active` in `content`.
///
/// Returns the new text when it differs from the input.
pub fn activate_marker(
    content: &str,
    inactive: &str,
    active: &str,
) -> (Option<String>, ActivationOutcome) {
    let updated = content.replace(inactive, active);
    if updated != content {
        return (Some(updated), ActivationOutcome::Activated);
    }

    // Trailing comments after an active declaration still count.
    if content
        .lines()
        .any(|line| line.trim_start().starts_with(active))
    {
        (None, ActivationOutcome::AlreadyActive)
    } else {
        (None, ActivationOutcome::MarkerMissing)
    }
}

/// Activate a unit's marker in the aggregator file at `path`.
pub fn activate_module(
    path: &Path,
    inactive: &str,
    active: &str,
    dry_run: bool,
) -> Result<ActivationOutcome> {
    let content = fs::read_to_string(path)?;
    let (updated, outcome) = activate_marker(&content, inactive, active);

    match updated {
        Some(text) if !dry_run => {
            fs::write(path, text)?;
            tracing::debug!("Activated `{}` in {}", active, path.display());
        }
        _ => tracing::debug!("{} unchanged ({:?})", path.display(), outcome),
    }

    Ok(outcome)
}
