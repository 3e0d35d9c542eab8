//! Runtime dispatcher registration.
//!
//! Each unit has one match arm in the dispatcher. It starts out pointing at
//! the missing-solution placeholder and is switched, once, to the unit's
//! own constructor.

use std::fs;
use std::path::Path;

use crate::error::Result;

/// What dispatcher registration did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// The placeholder arm was replaced with the constructor arm.
    Registered,
    /// The constructor arm was already present.
    AlreadyRegistered,
    /// Neither the placeholder nor the constructor arm was found.
    PlaceholderMissing,
}

/// Swap `placeholder` for `concrete` in `content`.
///
/// Returns the new text when a replacement happened.
pub fn register_entry(
    content: &str,
    placeholder: &str,
    concrete: &str,
) -> (Option<String>, RegistrationOutcome) {
    if content.contains(concrete) {
        return (None, RegistrationOutcome::AlreadyRegistered);
    }
    if !content.contains(placeholder) {
        return (None, RegistrationOutcome::PlaceholderMissing);
    }

    (
        Some(content.replace(placeholder, concrete)),
        RegistrationOutcome::Registered,
    )
}

/// Register a unit in the dispatcher file at `path`.
pub fn register_unit(
    path: &Path,
    placeholder: &str,
    concrete: &str,
    dry_run: bool,
) -> Result<RegistrationOutcome> {
    let content = fs::read_to_string(path)?;
    let (updated, outcome) = register_entry(&content, placeholder, concrete);

    match updated {
        Some(text) if !dry_run => {
            fs::write(path, text)?;
            tracing::debug!("Registered `{}` in {}", concrete, path.display());
        }
        _ => tracing::debug!("{} unchanged ({:?})", path.display(), outcome),
    }

    Ok(outcome)
}
