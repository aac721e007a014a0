//! Error handling tests

use sheetkit::error::{SheetError, SheetResult};

#[test]
fn test_io_errors_convert() {
    let source = std::io::Error::new(std::io::ErrorKind::NotFound, "ledger.xlsx missing");
    let err = SheetError::from(source);

    assert!(matches!(err, SheetError::Io(_)));
    assert!(err.to_string().starts_with("IO error"));
    assert!(err.to_string().contains("ledger.xlsx missing"));
}

#[test]
fn test_json_errors_convert() {
    let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = SheetError::from(source);

    assert!(matches!(err, SheetError::Json(_)));
    assert!(err.to_string().starts_with("JSON error"));
}

#[test]
fn test_pattern_errors_convert() {
    let source = regex::Regex::new("(unclosed").unwrap_err();
    let err = SheetError::from(source);

    assert!(matches!(err, SheetError::Pattern(_)));
    assert!(err.to_string().starts_with("Pattern error"));
}

#[test]
fn test_workbook_errors_carry_message() {
    let err = SheetError::Workbook("sheet 'ledger' not found".to_string());
    assert_eq!(err.to_string(), "Workbook error: sheet 'ledger' not found");
}

#[test]
fn test_propagation_through_result_alias() {
    fn parse(payload: &str) -> SheetResult<serde_json::Value> {
        Ok(serde_json::from_str(payload)?)
    }

    assert!(parse(r#"{"rows": 3}"#).is_ok());
    assert!(matches!(parse("{"), Err(SheetError::Json(_))));
}
