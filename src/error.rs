//! Error handling for helm-scaffold.
//! Defines the error type and result alias used throughout the crate.

use std::io;
use thiserror::Error;

/// Errors that can occur while discovering, resolving and writing templates.
///
/// Every failure is unrecoverable at the point where it happens and is
/// propagated to the caller. Only `main` decides to terminate the process.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Invalid or incomplete configuration
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// The chart directory does not hold a usable `Chart.yaml`
    #[error("Chart error: {0}.")]
    ChartError(String),

    /// The template library or the chart's templates directory could not be read
    #[error("Failed to discover templates in '{root}': {reason}.")]
    DiscoveryError { root: String, reason: String },

    /// The placeholder pattern is not a usable regular expression
    #[error("Invalid placeholder pattern: {0}.")]
    PatternError(String),

    /// A template file could not be loaded
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// An interactive prompt failed or was interrupted
    #[error("Prompt failed: {0}.")]
    PromptError(String),

    /// A prompt failed while asking for a variable's value
    #[error("Failed to resolve variable '{name}': {reason}.")]
    ResolutionError { name: String, reason: String },

    /// The destination file already exists and was left untouched
    #[error("Resource already exists: '{path}'.")]
    WriteRefused { path: String },

    #[error("Failed to write '{path}': {source}.")]
    WriteFailed {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Prints the error to stderr and exits the program with status code 1.
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
