//! Error types and exit codes for anscore
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data/config error (invalid config, malformed input record, missing asset)

mod macros;

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
    /// Data/config error (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during anscore operations
#[derive(Error, Debug)]
pub enum AnscoreError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data/config errors (exit code 3)
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },

    #[error("{resource} unavailable: {reason}")]
    ResourceUnavailable { resource: String, reason: String },

    #[error("invalid input at line {line}: {reason}")]
    InvalidInput { line: usize, reason: String },

    // Generic failures (exit code 1)
    #[error("{scorer} failed: {reason}")]
    Computation { scorer: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl AnscoreError {
    /// Create an error for an invalid value
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        AnscoreError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an invalid configuration
    pub fn invalid_config(reason: impl std::fmt::Display) -> Self {
        AnscoreError::InvalidConfig {
            reason: reason.to_string(),
        }
    }

    /// Create an error for a language asset that could not be loaded
    pub fn resource_unavailable(resource: &str, reason: impl std::fmt::Display) -> Self {
        AnscoreError::ResourceUnavailable {
            resource: resource.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for a scorer that failed on its input
    pub fn computation(scorer: &str, reason: impl std::fmt::Display) -> Self {
        AnscoreError::Computation {
            scorer: scorer.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AnscoreError::UnknownFormat(_)
            | AnscoreError::UsageError(_)
            | AnscoreError::InvalidValue { .. } => ExitCode::Usage,

            AnscoreError::InvalidConfig { .. }
            | AnscoreError::ResourceUnavailable { .. }
            | AnscoreError::InvalidInput { .. }
            | AnscoreError::Toml(_) => ExitCode::Data,

            AnscoreError::Computation { .. }
            | AnscoreError::Io(_)
            | AnscoreError::Json(_)
            | AnscoreError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            AnscoreError::UnknownFormat(_) => "unknown_format",
            AnscoreError::UsageError(_) => "usage_error",
            AnscoreError::InvalidValue { .. } => "invalid_value",
            AnscoreError::InvalidConfig { .. } => "invalid_config",
            AnscoreError::ResourceUnavailable { .. } => "resource_unavailable",
            AnscoreError::InvalidInput { .. } => "invalid_input",
            AnscoreError::Computation { .. } => "computation_error",
            AnscoreError::Io(_) => "io_error",
            AnscoreError::Json(_) => "json_error",
            AnscoreError::Toml(_) => "toml_error",
            AnscoreError::Other(_) => "other",
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

/// Result type alias for anscore operations
pub type Result<T> = std::result::Result<T, AnscoreError>;
