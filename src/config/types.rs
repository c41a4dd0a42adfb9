//! Configuration types and defaults for csb.
//!
//! This module defines enums, constants, and default value functions
//! used by the Config struct.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "csb.yaml";

/// How balancing results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable text (default).
    #[default]
    Text,
    /// A single JSON document on stdout.
    Json,
}

impl OutputFormat {
    /// Parse an output format from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

// Default value functions for serde
pub(super) fn default_log_filter() -> String {
    "warn".to_string()
}
