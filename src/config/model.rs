//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for csb.
///
/// This struct represents the contents of `csb.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Output settings
    // =========================================================================
    /// Output format used when `--format` is not given.
    #[serde(default)]
    pub output: OutputFormat,

    /// Whether text output lists each agent's customers.
    #[serde(default)]
    pub show_assignments: bool,

    // =========================================================================
    // Logging settings
    // =========================================================================
    /// `tracing` filter directive used when `CSB_LOG` is unset (default: "warn").
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// NDJSON file that receives one event per balancing run (disabled when unset).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audit_log: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputFormat::default(),
            show_assignments: false,
            log_filter: default_log_filter(),
            audit_log: None,
        }
    }
}
