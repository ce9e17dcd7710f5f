//! droidgen materializes a buildable Android (Kotlin + AppCompat)
//! project skeleton around a single activity source file and can hand
//! the result straight to Gradle for an offline-capable APK build.

/// Command-line interface module for the droidgen application
pub mod cli;

/// Error types and handling for the droidgen application
pub mod error;

/// Gradle wrapper location, bootstrap and build invocation
pub mod gradle;

/// Output path planning
/// Maps the dotted application id and project name to concrete paths
pub mod layout;

/// Logger initialization keyed off the verbose flag
pub mod logger;

/// Core project materialization
/// Combines all components to write the generated tree
pub mod processor;

/// Project parameters and name sanitization
pub mod project;

/// The fixed template catalog and rendering functionality
pub mod templates;
