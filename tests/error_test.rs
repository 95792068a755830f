use std::io;

use ngxgen::error::Error;

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
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: Error = json_err.into();

    assert!(matches!(err, Error::JsonError(_)));
}

#[test]
fn test_error_display() {
    let err = Error::ConfigError("invalid config".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid config.");

    let err = Error::PathError { path: "a\\0b".to_string(), reason: "contains a NUL byte".to_string() };
    assert_eq!(err.to_string(), "Invalid path 'a\\0b': contains a NUL byte.");

    let err = Error::TemplateMissingError { template: "gulpfile.js.j2".to_string() };
    assert_eq!(
        err.to_string(),
        "Template 'gulpfile.js.j2' does not exist in the template directory."
    );

    let err = Error::ExternalProcessFailure {
        command: "gulp link".to_string(),
        status: "exit status: 2".to_string(),
    };
    assert_eq!(err.to_string(), "Command 'gulp link' failed: exit status: 2.");
}
