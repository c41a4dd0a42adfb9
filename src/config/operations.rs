//! Config loading, resolution, and validation.

use super::model::Config;
use super::types::DEFAULT_CONFIG_FILE;
use crate::error::{CsbError, Result};
use std::path::Path;
use tracing::debug;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(CsbError::UserError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            CsbError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the config for a command run.
    ///
    /// An explicit path must load. Without one, `csb.yaml` in `dir` is used
    /// when present; otherwise defaults apply.
    pub fn resolve_in(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading config");
            return Self::load(path);
        }

        let discovered = dir.join(DEFAULT_CONFIG_FILE);
        if discovered.is_file() {
            debug!(path = %discovered.display(), "loading discovered config");
            return Self::load(&discovered);
        }

        Ok(Self::default())
    }

    /// Resolve the config relative to the current working directory.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| {
            CsbError::UserError(format!("failed to get current working directory: {}", e))
        })?;
        Self::resolve_in(explicit, &cwd)
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| CsbError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| CsbError::UserError(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `log_filter` must be non-empty
    /// - `audit_log`, when set, must be non-empty
    pub fn validate(&self) -> Result<()> {
        if self.log_filter.trim().is_empty() {
            return Err(CsbError::UserError(
                "config validation failed: log_filter must be non-empty".to_string(),
            ));
        }

        if let Some(audit_log) = &self.audit_log
            && audit_log.trim().is_empty()
        {
            return Err(CsbError::UserError(
                "config validation failed: audit_log must be a non-empty path when set"
                    .to_string(),
            ));
        }

        Ok(())
    }
}
