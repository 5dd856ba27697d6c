//! Tests for the error context extension trait

use npc_domain::Error;
use npc_infrastructure::error_ext::ErrorContext;
use std::io;

fn io_failure() -> Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "missing"))
}

#[test]
fn test_context_wraps_as_infrastructure_error() {
    let err = io_failure().context("Failed to open file").unwrap_err();
    match err {
        Error::Infrastructure { message, source } => {
            assert_eq!(message, "Failed to open file: missing");
            assert!(source.is_some());
        }
        other => panic!("Expected Infrastructure error, got {other:?}"),
    }
}

#[test]
fn test_with_context_is_lazy() {
    let ok: Result<u32, io::Error> = Ok(1);
    let value = ok
        .with_context(|| -> String { panic!("context must not be built on success") })
        .unwrap();
    assert_eq!(value, 1);

    let err = io_failure()
        .with_context(|| format!("Attempt {}", 3))
        .unwrap_err();
    assert!(err.to_string().contains("Attempt 3"));
}

#[test]
fn test_config_context() {
    let err = io_failure().config_context("Bad config").unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
    assert_eq!(err.error_type(), "configuration");
}

#[test]
fn test_serialization_context() {
    let parsed: Result<u32, serde_json::Error> = serde_json::from_str("{");
    let err = parsed.serialization_context("Bad payload").unwrap_err();
    assert!(matches!(err, Error::Serialization { .. }));
}
