use clap::Parser;
use droidgen::cli::Args;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("droidgen")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_defaults() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();

    assert_eq!(parsed.source, None);
    assert_eq!(parsed.out, PathBuf::from("dist"));
    assert_eq!(parsed.project, "AiGeneratedAndroidApp");
    assert_eq!(parsed.app_name, "AI Generated App");
    assert_eq!(parsed.application_id, "com.example.aigeneratedapp");
    assert_eq!(parsed.compile_sdk, 34);
    assert_eq!(parsed.min_sdk, 24);
    assert_eq!(parsed.target_sdk, 34);
    assert!(!parsed.build);
    assert!(!parsed.offline);
    assert!(!parsed.verbose);
}

#[test]
fn test_all_flags() {
    let parsed = Args::try_parse_from(make_args(&[
        "--source",
        "./MainActivity.kt",
        "--out",
        "./output",
        "--project",
        "My Project",
        "--app-name",
        "My App",
        "--application-id",
        "com.x.y",
        "--compile-sdk",
        "35",
        "--min-sdk",
        "26",
        "--target-sdk",
        "35",
        "--build",
        "--offline",
        "--verbose",
    ]))
    .unwrap();

    assert_eq!(parsed.source, Some(PathBuf::from("./MainActivity.kt")));
    assert_eq!(parsed.out, PathBuf::from("./output"));
    assert_eq!(parsed.project, "My Project");
    assert_eq!(parsed.app_name, "My App");
    assert_eq!(parsed.application_id, "com.x.y");
    assert_eq!(parsed.compile_sdk, 35);
    assert_eq!(parsed.min_sdk, 26);
    assert_eq!(parsed.target_sdk, 35);
    assert!(parsed.build);
    assert!(parsed.offline);
    assert!(parsed.verbose);
}

#[test]
fn test_short_verbose_flag() {
    let parsed = Args::try_parse_from(make_args(&["-v"])).unwrap();
    assert!(parsed.verbose);
}

#[test]
fn test_non_numeric_sdk_rejected() {
    assert!(Args::try_parse_from(make_args(&["--compile-sdk", "latest"])).is_err());
}

#[test]
fn test_unknown_positional_rejected() {
    assert!(Args::try_parse_from(make_args(&["extra"])).is_err());
}
