//! Configuration for edgeroute
//!
//! An optional TOML file supplies defaults for edge list parsing and
//! output rendering. Command-line flags take precedence over it.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{Result, RouteError};
use crate::graph::builder::ParseOptions;

pub use types::{InputConfig, OutputConfig, RouteConfig};

impl InputConfig {
    /// Convert the textual settings into byte-level parse options
    pub fn parse_options(&self) -> std::result::Result<ParseOptions, String> {
        let delimiter = single_byte("delimiter", &self.delimiter)?
            .ok_or_else(|| "delimiter must not be empty".to_string())?;
        let comment = single_byte("comment", &self.comment)?;

        if comment == Some(delimiter) {
            return Err("comment marker must differ from delimiter".to_string());
        }

        Ok(ParseOptions { delimiter, comment })
    }
}

impl RouteConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: RouteConfig = toml::from_str(&content)?;

        config
            .input
            .parse_options()
            .map_err(|reason| RouteError::InvalidConfig {
                path: path.to_path_buf(),
                reason,
            })?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

/// Interpret a setting as at most one ASCII byte
fn single_byte(field: &str, value: &str) -> std::result::Result<Option<u8>, String> {
    match value.as_bytes() {
        [] => Ok(None),
        [b] if b.is_ascii() => Ok(Some(*b)),
        _ => Err(format!(
            "{} must be a single ASCII character, got {:?}",
            field, value
        )),
    }
}
