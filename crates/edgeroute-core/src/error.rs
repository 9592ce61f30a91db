//! Error types and exit codes for edgeroute
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, unreachable destination, internal errors)
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown location, malformed edge list, bad config)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown location, malformed input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading a graph or searching it
#[derive(Error, Debug)]
pub enum RouteError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("location not found: {name}")]
    NotFound { name: String },

    #[error("malformed input on line {line}: {reason}")]
    MalformedInput { line: u64, reason: String },

    #[error("negative edge weight {weight} on line {line}")]
    NegativeWeight { line: u64, weight: i64 },

    #[error("invalid config in {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("no path from {start} to {end}")]
    Unreachable { start: String, end: String },

    #[error("location {name} was not reached by the last search")]
    NotReached { name: String },

    #[error("path cost overflow while reaching {name}")]
    CostOverflow { name: String },

    #[error("back-pointer chain from {name} does not terminate")]
    BrokenBackPointers { name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl RouteError {
    /// Create a not-found error for a location name
    pub fn not_found(name: impl Into<String>) -> Self {
        RouteError::NotFound { name: name.into() }
    }

    /// Create a malformed-input error for a 1-based line number
    pub fn malformed(line: u64, reason: impl Into<String>) -> Self {
        RouteError::MalformedInput {
            line,
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RouteError::UnknownFormat(_) | RouteError::UsageError(_) => ExitCode::Usage,

            RouteError::NotFound { .. }
            | RouteError::MalformedInput { .. }
            | RouteError::NegativeWeight { .. }
            | RouteError::InvalidConfig { .. }
            | RouteError::Toml(_) => ExitCode::Data,

            RouteError::Unreachable { .. }
            | RouteError::NotReached { .. }
            | RouteError::CostOverflow { .. }
            | RouteError::BrokenBackPointers { .. }
            | RouteError::Io(_)
            | RouteError::Json(_)
            | RouteError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            RouteError::UnknownFormat(_) => "unknown_format",
            RouteError::UsageError(_) => "usage_error",
            RouteError::NotFound { .. } => "not_found",
            RouteError::MalformedInput { .. } => "malformed_input",
            RouteError::NegativeWeight { .. } => "negative_weight",
            RouteError::InvalidConfig { .. } => "invalid_config",
            RouteError::Unreachable { .. } => "unreachable",
            RouteError::NotReached { .. } => "not_reached",
            RouteError::CostOverflow { .. } => "cost_overflow",
            RouteError::BrokenBackPointers { .. } => "broken_back_pointers",
            RouteError::Io(_) => "io_error",
            RouteError::Json(_) => "json_error",
            RouteError::Toml(_) => "toml_error",
            RouteError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for edgeroute operations
pub type Result<T> = std::result::Result<T, RouteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_by_category() {
        assert_eq!(
            RouteError::UsageError("bad".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(RouteError::not_found("C").exit_code(), ExitCode::Data);
        assert_eq!(
            RouteError::NegativeWeight { line: 2, weight: -4 }.exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            RouteError::Unreachable {
                start: "A".into(),
                end: "D".into()
            }
            .exit_code(),
            ExitCode::Failure
        );
    }

    #[test]
    fn test_to_json_envelope() {
        let json = RouteError::not_found("C").to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "not_found");
        assert_eq!(json["error"]["message"], "location not found: C");
    }

    #[test]
    fn test_malformed_message_includes_line() {
        let err = RouteError::malformed(7, "expected 3 fields, found 2");
        assert_eq!(
            err.to_string(),
            "malformed input on line 7: expected 3 fields, found 2"
        );
    }
}
