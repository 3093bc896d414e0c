use std::io;

use helm_scaffold::error::Error;

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
    let err = Error::ConfigError("invalid config".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid config.");

    let err = Error::WriteRefused { path: "templates/configmap.yaml".to_string() };
    assert_eq!(err.to_string(), "Resource already exists: 'templates/configmap.yaml'.");

    let err = Error::ResolutionError { name: "ENV".to_string(), reason: "interrupted".to_string() };
    assert_eq!(err.to_string(), "Failed to resolve variable 'ENV': interrupted.");
}
