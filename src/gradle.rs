//! Gradle build invocation over a generated project tree.
//! Locates or bootstraps the Gradle wrapper and runs `assembleDebug`
//! as a blocking subprocess with inherited stdio.

use log::info;
use std::io;
use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};

/// Gradle task invoked for every build.
pub const BUILD_TASK: &str = "assembleDebug";

/// Outcome of one Gradle invocation. Not persisted.
#[derive(Debug, Clone, Copy)]
pub struct BuildResult {
    pub exit_code: i32,
    pub succeeded: bool,
}

/// Platform-appropriate wrapper executable name.
pub fn wrapper_file_name() -> &'static str {
    if cfg!(windows) {
        "gradlew.bat"
    } else {
        "gradlew"
    }
}

/// Arguments passed to the wrapper.
pub fn build_args(offline: bool) -> Vec<&'static str> {
    let mut args = vec![BUILD_TASK];
    if offline {
        args.push("--offline");
    }
    args
}

/// Generates a Gradle wrapper in `project_root` using the system
/// `gradle` binary.
///
/// # Errors
/// * `Error::GradleMissing` if `gradle` is not installed or its
///   `wrapper` task exits non-zero
fn bootstrap_wrapper(project_root: &Path) -> Result<()> {
    info!("No local Gradle wrapper, generating one with the system gradle...");
    let status = Command::new("gradle")
        .arg("wrapper")
        .current_dir(project_root)
        .status()
        .map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                Error::GradleMissing
            } else {
                Error::IoError(e)
            }
        })?;

    if !status.success() {
        return Err(Error::GradleMissing);
    }
    Ok(())
}

/// Runs a blocking `assembleDebug` build over `project_root`.
///
/// The wrapper is bootstrapped first if absent. Stdout and stderr are
/// inherited so Gradle's own output streams to the caller; nothing is
/// captured or parsed. There is no timeout and no retry.
///
/// # Returns
/// * `Result<BuildResult>` - The wrapper's exit status whenever the
///   wrapper actually ran; `Err` is reserved for toolchain problems
pub fn build<P: AsRef<Path>>(project_root: P, offline: bool) -> Result<BuildResult> {
    let project_root = project_root.as_ref();
    // The wrapper is spawned with cwd = project root, so its path must
    // be absolute to keep resolving after the directory change
    let base_path = std::env::current_dir()?;
    let project_root = if project_root.is_absolute() {
        project_root.to_path_buf()
    } else {
        base_path.join(project_root)
    };
    let wrapper = project_root.join(wrapper_file_name());

    if !wrapper.exists() {
        bootstrap_wrapper(&project_root)?;
    }

    let args = build_args(offline);
    info!("Running build command: {} {}", wrapper.display(), args.join(" "));

    // A vanished wrapper (e.g. the bootstrap exited 0 without writing
    // one) is still a missing toolchain, not a generic IO failure
    let status = Command::new(&wrapper)
        .args(&args)
        .current_dir(&project_root)
        .status()
        .map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                Error::GradleMissing
            } else {
                Error::IoError(e)
            }
        })?;

    // code() is None when the process was killed by a signal
    let exit_code = status.code().unwrap_or(1);
    Ok(BuildResult { exit_code, succeeded: status.success() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapper_file_name_matches_host_family() {
        if cfg!(windows) {
            assert_eq!(wrapper_file_name(), "gradlew.bat");
        } else {
            assert_eq!(wrapper_file_name(), "gradlew");
        }
    }

    #[test]
    fn test_build_args_offline_flag() {
        assert_eq!(build_args(false), vec!["assembleDebug"]);
        assert_eq!(build_args(true), vec!["assembleDebug", "--offline"]);
    }
}
