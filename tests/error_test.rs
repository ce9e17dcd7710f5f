use std::io;

use droidgen::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::SourceNotFound { path: "/missing/file.kt".to_string() };
    assert_eq!(err.to_string(), "Source file does not exist: '/missing/file.kt'.");

    let err = Error::ProjectExists { path: "dist/Foo".to_string() };
    assert_eq!(err.to_string(), "Project directory already exists: 'dist/Foo'.");

    let err = Error::BuildFailed { exit_code: 7 };
    assert_eq!(err.to_string(), "Build failed with exit code 7.");
}

#[test]
fn test_exit_codes_distinguish_failure_classes() {
    assert_eq!(Error::SourceNotFound { path: "x".to_string() }.exit_code(), 2);
    assert_eq!(Error::ProjectExists { path: "x".to_string() }.exit_code(), 3);
    assert_eq!(Error::GradleMissing.exit_code(), 4);
    // A failed build reuses Gradle's own exit code
    assert_eq!(Error::BuildFailed { exit_code: 7 }.exit_code(), 7);

    let io_err = Error::IoError(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
    assert_eq!(io_err.exit_code(), 1);
}
