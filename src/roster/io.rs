//! Roster loading and parsing.

use super::Roster;
use crate::error::{CsbError, Result};
use std::path::Path;
use tracing::debug;

impl Roster {
    /// Load a roster from a file.
    ///
    /// Files with a `.json` extension are parsed as JSON; anything else is
    /// parsed as YAML.
    ///
    /// # Returns
    ///
    /// * `Ok(Roster)` - Successfully parsed roster (not yet validated)
    /// * `Err(CsbError::UserError)` - Read or parse failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            CsbError::UserError(format!(
                "failed to read roster file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        let roster = if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
        .map_err(|e| CsbError::UserError(format!("roster '{}': {}", path.display(), e)))?;

        debug!(path = %path.display(), json = is_json, "loaded roster");
        Ok(roster)
    }

    /// Parse a roster from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document is a roster with nothing in it.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
            .map_err(|e| CsbError::UserError(format!("failed to parse roster YAML: {}", e)))
    }

    /// Parse a roster from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| CsbError::UserError(format!("failed to parse roster JSON: {}", e)))
    }
}
