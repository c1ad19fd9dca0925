use std::error::Error;
use clinic_core::errors::{ClinicError, ClinicResult};

#[test]
fn test_clinic_error_display() {
    let not_found = ClinicError::NotFound("Schedule not found".to_string());
    let validation = ClinicError::Validation("Invalid input".to_string());
    let database = ClinicError::Database(eyre::eyre!("Database connection failed"));
    let internal = ClinicError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    assert_eq!(
        not_found.to_string(),
        "Resource not found: Schedule not found"
    );
    assert_eq!(validation.to_string(), "Validation error: Invalid input");
    assert!(database.to_string().contains("Database error:"));
    assert!(internal.to_string().contains("Internal server error:"));
}

#[test]
fn test_error_source() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let clinic_error = ClinicError::Internal(Box::new(io_error));

    assert!(clinic_error.source().is_some());
}

#[test]
fn test_clinic_result() {
    let result: ClinicResult<usize> = Ok(4);
    assert_eq!(result.unwrap(), 4);

    let result: ClinicResult<usize> = Err(ClinicError::NotFound("Not found".to_string()));
    assert!(result.is_err());
}

#[test]
fn test_eyre_report_converts_with_question_mark() {
    fn load() -> ClinicResult<()> {
        let failing: eyre::Result<()> = Err(eyre::eyre!("connection reset"));
        failing?;
        Ok(())
    }

    match load() {
        Err(ClinicError::Database(report)) => {
            assert!(report.to_string().contains("connection reset"))
        }
        other => panic!("Expected Database error, got: {:?}", other),
    }
}
