//! Configuration type definitions

use crate::format::OutputFormat;
use serde::{Deserialize, Serialize};

/// Top-level edgeroute configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Edge list parsing settings
    #[serde(default)]
    pub input: InputConfig,

    /// Result rendering settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// How edge list files are read
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Field delimiter, a single ASCII character
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Comment marker; lines starting with it are skipped. Empty disables comments.
    #[serde(default = "default_comment")]
    pub comment: String,
}

/// How routes are printed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Print the total path cost after the route
    #[serde(default)]
    pub show_cost: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            comment: default_comment(),
        }
    }
}

fn default_delimiter() -> String {
    ",".to_string()
}

fn default_comment() -> String {
    "#".to_string()
}
