use super::*;

#[test]
fn default_config_matches_page_markup() {
    let config = ThemeConfig::default();
    assert_eq!(config.root_id, "main-body");
    assert_eq!(config.switch_id, "darkModeSwitch");
    assert_eq!(config.storage_key, "theme");
    assert_eq!(config.attribute, "data-bs-theme");
}

#[test]
fn from_json_empty_object_yields_defaults() {
    let config = ThemeConfig::from_json("{}").unwrap();
    assert_eq!(config, ThemeConfig::default());
}

#[test]
fn from_json_overrides_only_given_fields() {
    let config = ThemeConfig::from_json(r#"{"storage_key":"site-theme","attribute":"data-theme"}"#).unwrap();
    assert_eq!(config.storage_key, "site-theme");
    assert_eq!(config.attribute, "data-theme");
    assert_eq!(config.root_id, DEFAULT_ROOT_ID);
    assert_eq!(config.switch_id, DEFAULT_SWITCH_ID);
}

#[test]
fn from_json_rejects_unknown_fields() {
    let err = ThemeConfig::from_json(r#"{"rootId":"x"}"#).unwrap_err();
    assert!(matches!(err, ThemeError::InvalidConfig(_)));
}

#[test]
fn from_json_rejects_malformed_input() {
    assert!(ThemeConfig::from_json("not json").is_err());
}
