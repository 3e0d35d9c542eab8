//! Unit scaffolding and registration.
//!
//! Scaffolding a unit runs three independent patch operations:
//!
//! - [`skeleton`] - create the unit directory and starting source file
//! - [`aggregator`] - activate the unit's module line
//! - [`dispatcher`] - point the unit's dispatcher arm at its constructor
//!
//! Every operation is attempted on every run and checks its own target
//! state, so re-running after a partial failure finishes the job without
//! duplicating anything.

pub mod aggregator;
pub mod dispatcher;
pub mod skeleton;

use std::path::{Path, PathBuf};

use crate::config::{render, DaykitConfig};
use crate::error::Result;
use crate::unit::Unit;

pub use aggregator::{activate_marker, activate_module, ActivationOutcome};
pub use dispatcher::{register_entry, register_unit, RegistrationOutcome};
pub use skeleton::{ensure_skeleton, SkeletonOutcome};

/// Combined result of scaffolding one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub skeleton: SkeletonOutcome,
    pub aggregator: ActivationOutcome,
    pub dispatcher: RegistrationOutcome,
}

impl ScaffoldReport {
    /// True when a registry lacked the line this unit needs.
    ///
    /// This signals drift between the aggregator and dispatcher files.
    pub fn has_missing_marker(&self) -> bool {
        self.aggregator == ActivationOutcome::MarkerMissing
            || self.dispatcher == RegistrationOutcome::PlaceholderMissing
    }

    /// True when nothing needed doing.
    pub fn is_noop(&self) -> bool {
        matches!(self.skeleton, SkeletonOutcome::AlreadyExists(_))
            && self.aggregator != ActivationOutcome::Activated
            && self.dispatcher != RegistrationOutcome::Registered
    }
}

/// Creates and registers units inside a project.
pub struct Scaffolder<'a> {
    project_root: &'a Path,
    config: &'a DaykitConfig,
    dry_run: bool,
}

impl<'a> Scaffolder<'a> {
    /// Create a scaffolder for a project.
    pub fn new(project_root: &'a Path, config: &'a DaykitConfig) -> Self {
        Self {
            project_root,
            config,
            dry_run: false,
        }
    }

    /// Report what would change without writing.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Absolute aggregator path.
    pub fn aggregator_path(&self) -> PathBuf {
        self.project_root.join(&self.config.layout.aggregator)
    }

    /// Absolute dispatcher path.
    pub fn dispatcher_path(&self) -> PathBuf {
        self.project_root.join(&self.config.layout.dispatcher)
    }

    /// Run all three patch operations for `unit`.
    pub fn scaffold(&self, unit: &Unit) -> Result<ScaffoldReport> {
        let skeleton = ensure_skeleton(self.project_root, self.config, unit, self.dry_run)?;
        let aggregator = self.activate(unit)?;
        let dispatcher = self.register(unit)?;

        Ok(ScaffoldReport {
            skeleton,
            aggregator,
            dispatcher,
        })
    }

    /// Activate the unit's module line in the aggregator.
    pub fn activate(&self, unit: &Unit) -> Result<ActivationOutcome> {
        let ctx = unit.context();
        let markers = &self.config.markers;
        let inactive = render(&markers.aggregator_inactive, &ctx)?;
        let active = render(&markers.aggregator_active, &ctx)?;

        activate_module(&self.aggregator_path(), &inactive, &active, self.dry_run)
    }

    /// Point the unit's dispatcher arm at its constructor.
    pub fn register(&self, unit: &Unit) -> Result<RegistrationOutcome> {
        let ctx = unit.context();
        let markers = &self.config.markers;
        let placeholder = render(&markers.dispatcher_placeholder, &ctx)?;
        let concrete = render(&markers.dispatcher_concrete, &ctx)?;

        register_unit(&self.dispatcher_path(), &placeholder, &concrete, self.dry_run)
    }
}
