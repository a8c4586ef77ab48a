//! Error handling for the remap application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for remap operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// Represents errors that occur while reading or writing JSON
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Represents errors that occur while reading YAML
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Represents a rule or target pattern that cannot be parsed
    #[error("Invalid pattern '{pattern}': {reason}")]
    PatternError { pattern: String, reason: String },

    /// Raised when the source nests deeper than the configured limit
    #[error("Source nesting exceeds the maximum depth of {depth}")]
    DepthLimitExceeded { depth: usize },

    /// Represents a template or value file in a format remap cannot read
    #[error("Unsupported file format: {0}")]
    UnsupportedFormatError(String),
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
