//! Error handling for the droidgen application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for droidgen operations.
///
/// Each failure class carries its own process exit code (see
/// [`Error::exit_code`]) so scripts can branch on what went wrong.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors that occur while rendering a project template
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents errors while building the template render context
    #[error("Context error: {0}.")]
    ContextError(#[from] serde_json::Error),

    /// The caller-supplied source file does not exist
    #[error("Source file does not exist: '{path}'.")]
    SourceNotFound { path: String },

    /// The project root already exists; nothing was written
    #[error("Project directory already exists: '{path}'.")]
    ProjectExists { path: String },

    /// No local Gradle wrapper and the system `gradle` could not produce one
    #[error("Gradle not found. Install Gradle or place gradlew/gradlew.bat in the project root.")]
    GradleMissing,

    /// Gradle ran and returned a non-zero exit code
    #[error("Build failed with exit code {exit_code}.")]
    BuildFailed { exit_code: i32 },
}

impl Error {
    /// Process exit code for this failure class.
    ///
    /// `BuildFailed` reuses Gradle's own exit code so callers see the
    /// same code the build tool produced.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::SourceNotFound { .. } => 2,
            Error::ProjectExists { .. } => 3,
            Error::GradleMissing => 4,
            Error::BuildFailed { exit_code } => *exit_code,
            _ => 1,
        }
    }
}

/// Convenience type alias for Results with droidgen's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints a single diagnostic line to stderr and exits with the
/// failure class's exit code
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(err.exit_code());
}
