//! Error types and exit codes for trailhead
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown node, malformed graph file, etc.)

mod macros;

use thiserror::Error;

/// Exit codes reported by the trailhead binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown node, malformed graph (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during trailhead operations
#[derive(Error, Debug)]
pub enum TrailheadError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("unknown strategy: {0} (expected: bfs or dfs)")]
    UnknownStrategy(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("unknown node: {node}")]
    UnknownNode { node: String },

    #[error("invalid graph: {reason}")]
    InvalidGraph { reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("{0}")]
    Other(String),
}

impl TrailheadError {
    /// Create an error for a node that is not part of the searched graph
    pub fn unknown_node(node: impl std::fmt::Debug) -> Self {
        TrailheadError::UnknownNode {
            node: format!("{:?}", node),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        TrailheadError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a graph definition that cannot be loaded
    pub fn invalid_graph(reason: impl std::fmt::Display) -> Self {
        TrailheadError::InvalidGraph {
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            TrailheadError::UnknownFormat(_)
            | TrailheadError::UnknownStrategy(_)
            | TrailheadError::UsageError(_)
            | TrailheadError::InvalidValue { .. } => ExitCode::Usage,

            TrailheadError::UnknownNode { .. } | TrailheadError::InvalidGraph { .. } => {
                ExitCode::Data
            }

            TrailheadError::Io(_)
            | TrailheadError::Json(_)
            | TrailheadError::Toml(_)
            | TrailheadError::TomlSer(_)
            | TrailheadError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            TrailheadError::UnknownFormat(_) => "unknown_format",
            TrailheadError::UnknownStrategy(_) => "unknown_strategy",
            TrailheadError::UsageError(_) => "usage_error",
            TrailheadError::InvalidValue { .. } => "invalid_value",
            TrailheadError::UnknownNode { .. } => "unknown_node",
            TrailheadError::InvalidGraph { .. } => "invalid_graph",
            TrailheadError::Io(_) => "io_error",
            TrailheadError::Json(_) => "json_error",
            TrailheadError::Toml(_) => "toml_error",
            TrailheadError::TomlSer(_) => "toml_error",
            TrailheadError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
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

/// Result type alias for trailhead operations
pub type Result<T> = std::result::Result<T, TrailheadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            TrailheadError::UsageError("bad".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(TrailheadError::unknown_node(42).exit_code(), ExitCode::Data);
        assert_eq!(
            TrailheadError::Other("boom".into()).exit_code(),
            ExitCode::Failure
        );
        assert_eq!(i32::from(ExitCode::Data), 3);
    }

    #[test]
    fn test_unknown_node_message() {
        let err = TrailheadError::unknown_node(99u32);
        assert_eq!(err.to_string(), "unknown node: 99");
    }

    #[test]
    fn test_unknown_strategy_message_lists_core_strategies() {
        let err = "both".parse::<crate::graph::Strategy>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown strategy: both (expected: bfs or dfs)"
        );
    }

    #[test]
    fn test_to_json_envelope() {
        let json = TrailheadError::unknown_node(7).to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "unknown_node");
        assert_eq!(json["error"]["message"], "unknown node: 7");
    }
}
