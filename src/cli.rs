//! Command-line interface implementation for droidgen.
//! Provides argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for droidgen.
#[derive(Parser, Debug)]
#[command(author, version, about = "droidgen: package a Kotlin activity into an Android project", long_about = None)]
pub struct Args {
    /// Path to a MainActivity.kt source file; the built-in stub is used when omitted
    #[arg(long, value_name = "PATH")]
    pub source: Option<PathBuf>,

    /// Output directory under which the project root is created
    #[arg(long, value_name = "DIR", default_value = "dist")]
    pub out: PathBuf,

    /// Project directory name (sanitized to [A-Za-z0-9_-])
    #[arg(long, default_value = "AiGeneratedAndroidApp")]
    pub project: String,

    /// Human-readable application label
    #[arg(long, default_value = "AI Generated App")]
    pub app_name: String,

    /// Android application id used for the namespace, package and source directory
    #[arg(long, default_value = "com.example.aigeneratedapp")]
    pub application_id: String,

    #[arg(long, default_value_t = 34)]
    pub compile_sdk: u32,

    #[arg(long, default_value_t = 24)]
    pub min_sdk: u32,

    #[arg(long, default_value_t = 34)]
    pub target_sdk: u32,

    /// Build the APK right after creating the project
    #[arg(long)]
    pub build: bool,

    /// Pass --offline to Gradle so no remote dependencies are fetched
    #[arg(long)]
    pub offline: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
