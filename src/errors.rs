//! Defines application-specific error types.
//!
//! Only conditions that abort a run are represented here: the output file
//! cannot be created or written, the scan root cannot be resolved, or the
//! configuration is invalid. Per-entry failures during a scan are recorded in
//! [`ScanStatistics`](crate::stats::ScanStatistics) instead.

use thiserror::Error;

/// Errors that abort a scan.
#[derive(Error, Debug)]
pub enum Error {
    /// Error occurring while accessing the scan root or the output file.
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// The configuration could not be built.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while building a [`ScanConfig`](crate::config::ScanConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An option has a value that cannot be used.
    #[error("invalid value for {option}: {reason}")]
    InvalidValue {
        /// The option name, e.g. `--name`.
        option: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A wildcard ignore pattern could not be compiled.
    #[error("invalid ignore pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern as given by the user.
        pattern: String,
        /// The regex compilation error.
        #[source]
        source: regex::Error,
    },

    /// A size string such as `10MiB` could not be parsed.
    #[error("invalid size format '{value}': {reason}")]
    InvalidSize {
        /// The size string as given by the user.
        value: String,
        /// The parser's explanation.
        reason: String,
    },
}

/// Crate-wide result type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Helper function to create an [`Error::Io`] with path context.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}
