//! Configuration loading and template interpolation.
//!
//! - [`schema`] - Config structure with defaults for every field
//! - [`loader`] - Finding and parsing `.daykit/config.yml`
//! - [`interpolation`] - `${name}` substitution used by templates and markers

pub mod interpolation;
pub mod loader;
pub mod schema;

pub use interpolation::{parse_interpolation, render, Segment, TemplateContext};
pub use loader::{default_config_path, load_config, parse_config, CONFIG_DIR, CONFIG_FILE};
pub use schema::{DaykitConfig, Layout, Markers, Runner, TemplatePaths};
