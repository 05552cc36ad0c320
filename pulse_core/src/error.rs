//! Error types for the pulse_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for pulse_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Activity code not present in the dispatch table
    #[error("Unknown activity code: {0:?}")]
    UnknownActivity(String),

    /// Wrong number of parameters for an activity
    #[error("{code} expects {expected} parameters, got {actual}")]
    Arity {
        code: String,
        expected: usize,
        actual: usize,
    },

    /// A parameter has a value its field cannot hold
    #[error("Invalid value for {field}: {value}")]
    InvalidParameter { field: &'static str, value: f64 },

    /// A parameter could not be parsed as a number
    #[error("Invalid number {value:?}: {source}")]
    InvalidNumber {
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// Division by zero while computing a statistic
    #[error("Division by zero while computing {0}")]
    DivisionByZero(&'static str),

    /// One or more batch items failed
    #[error("{failed} of {total} workouts failed")]
    Batch { failed: usize, total: usize },
}
