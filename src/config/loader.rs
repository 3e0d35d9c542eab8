//! Configuration file discovery and loading.
//!
//! A project may carry `.daykit/config.yml`; without one every setting
//! takes its default. An explicit `--config` path must exist.

use crate::config::schema::DaykitConfig;
use crate::error::{DaykitError, Result};
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding project configuration.
pub const CONFIG_DIR: &str = ".daykit";

/// Project configuration file name.
pub const CONFIG_FILE: &str = "config.yml";

/// Default config location for a project root.
pub fn default_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Load configuration for a project.
///
/// # Arguments
///
/// * `project_root` - Directory all configured paths are relative to
/// * `explicit` - Path from `--config`, resolved against `project_root` when relative
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<DaykitConfig> {
    let path = match explicit {
        Some(p) => project_root.join(p),
        None => {
            let path = default_config_path(project_root);
            if !path.exists() {
                tracing::debug!("No config at {}, using defaults", path.display());
                return Ok(DaykitConfig::default());
            }
            path
        }
    };

    let content = read_config(&path)?;
    let config = parse_config(&content, &path)?;
    validate(&config, &path)?;

    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

fn read_config(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read config {}", path.display()))
}

/// Parse YAML content into a config.
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, path: &Path) -> Result<DaykitConfig> {
    if content.trim().is_empty() {
        return Ok(DaykitConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| DaykitError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn validate(config: &DaykitConfig, path: &Path) -> Result<()> {
    let invalid = |message: &str| DaykitError::ConfigParseError {
        path: path.to_path_buf(),
        message: message.to_string(),
    };

    if config.layout.unit_prefix.is_empty() {
        return Err(invalid("layout.unit_prefix must not be empty"));
    }
    if config.layout.skeleton_file.is_empty() || config.layout.report_file.is_empty() {
        return Err(invalid("layout file names must not be empty"));
    }
    if config.runner.command.trim().is_empty() {
        return Err(invalid("runner.command must not be empty"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(temp: &TempDir, content: &str) {
        let dir = temp.path().join(CONFIG_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(CONFIG_FILE), content).unwrap();
    }

    #[test]
    fn missing_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config, DaykitConfig::default());
    }

    #[test]
    fn project_config_is_loaded() {
        let temp = TempDir::new().unwrap();
        write_config(&temp, "layout:\n  unit_prefix: puzzle\n");
        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config.layout.unit_prefix, "puzzle");
    }

    #[test]
    fn empty_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        write_config(&temp, "\n");
        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config, DaykitConfig::default());
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        let err = load_config(temp.path(), Some(Path::new("nope.yml"))).unwrap_err();
        assert!(matches!(err, DaykitError::Other(_)));
        assert!(err.to_string().contains("nope.yml"));
    }

    #[test]
    fn explicit_config_is_relative_to_project() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("alt.yml"), "layout:\n  pad_width: 3\n").unwrap();
        let config = load_config(temp.path(), Some(Path::new("alt.yml"))).unwrap();
        assert_eq!(config.layout.pad_width, 3);
    }

    #[test]
    fn malformed_yaml_reports_path() {
        let temp = TempDir::new().unwrap();
        write_config(&temp, "layout: [unclosed\n");
        let err = load_config(temp.path(), None).unwrap_err();
        assert!(matches!(err, DaykitError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.yml"));
    }

    #[test]
    fn empty_prefix_is_rejected() {
        let temp = TempDir::new().unwrap();
        write_config(&temp, "layout:\n  unit_prefix: \"\"\n");
        let err = load_config(temp.path(), None).unwrap_err();
        assert!(err.to_string().contains("unit_prefix"));
    }
}
