use clap::Parser;
use ngxgen::cli::Args;
use ngxgen::config::FeatureFlags;
use ngxgen::constants::DEFAULT_TEMPLATES_DIR;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("ngxgen")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_defaults() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();

    assert_eq!(parsed.project_folder, PathBuf::from("."));
    assert_eq!(parsed.templates, PathBuf::from(DEFAULT_TEMPLATES_DIR));
    assert!(!parsed.skip_checks);
    assert!(!parsed.skip_styles);
    assert!(!parsed.skip_demo);
    assert!(!parsed.skip_sample);
    assert!(!parsed.npm);
    assert!(!parsed.skip_install);
    assert!(!parsed.skip_cache);
    assert!(!parsed.stdin);
    assert!(!parsed.verbose);
}

#[test]
fn test_project_folder() {
    let parsed = Args::try_parse_from(make_args(&["./my-lib"])).unwrap();
    assert_eq!(parsed.project_folder, PathBuf::from("./my-lib"));
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "--skip-checks",
        "--skip-styles",
        "--skip-demo",
        "--skip-sample",
        "--npm",
        "--skip-install",
        "--skip-cache",
        "--stdin",
        "--verbose",
        "--templates",
        "./templates",
        "./my-lib",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.skip_checks);
    assert!(parsed.npm);
    assert!(parsed.skip_install);
    assert!(parsed.skip_cache);
    assert!(parsed.stdin);
    assert!(parsed.verbose);
    assert_eq!(parsed.templates, PathBuf::from("./templates"));
    assert_eq!(
        parsed.feature_flags(),
        FeatureFlags { skip_styles: true, skip_sample: true, skip_demo: true }
    );
}

#[test]
fn test_short_flags() {
    let parsed = Args::try_parse_from(make_args(&["-s", "-v"])).unwrap();

    assert!(parsed.stdin);
    assert!(parsed.verbose);
}

#[test]
fn test_unknown_flag() {
    assert!(Args::try_parse_from(make_args(&["--skip-everything"])).is_err());
}

#[test]
fn test_too_many_args() {
    assert!(Args::try_parse_from(make_args(&["./a", "./b"])).is_err());
}
