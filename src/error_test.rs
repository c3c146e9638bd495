use super::*;

#[test]
fn storage_error_names_operation() {
    let err = ThemeError::Storage { op: "set", message: "QuotaExceededError".to_owned() };
    assert_eq!(err.to_string(), "storage set failed: QuotaExceededError");
}

#[test]
fn element_missing_names_id() {
    let err = ThemeError::ElementMissing("darkModeSwitch".to_owned());
    assert_eq!(err.to_string(), "element #darkModeSwitch not found");
}

#[test]
fn json_errors_convert_to_invalid_config() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: ThemeError = json_err.into();
    assert!(matches!(err, ThemeError::InvalidConfig(_)));
}
