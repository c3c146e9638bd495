use super::*;

#[test]
fn default_is_light() {
    assert_eq!(ThemePreference::default(), ThemePreference::Light);
}

#[test]
fn from_stored_only_exact_dark_selects_dark() {
    assert_eq!(ThemePreference::from_stored("dark"), ThemePreference::Dark);
    assert_eq!(ThemePreference::from_stored("light"), ThemePreference::Light);
    assert_eq!(ThemePreference::from_stored("Dark"), ThemePreference::Light);
    assert_eq!(ThemePreference::from_stored(""), ThemePreference::Light);
    assert_eq!(ThemePreference::from_stored("blue"), ThemePreference::Light);
}

#[test]
fn from_checked_maps_checked_to_dark() {
    assert_eq!(ThemePreference::from_checked(true), ThemePreference::Dark);
    assert_eq!(ThemePreference::from_checked(false), ThemePreference::Light);
}

#[test]
fn as_str_matches_attribute_literals() {
    assert_eq!(ThemePreference::Dark.as_str(), "dark");
    assert_eq!(ThemePreference::Light.as_str(), "light");
    assert_eq!(ThemePreference::Dark.to_string(), "dark");
}

#[test]
fn toggled_flips_value() {
    assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
    assert_eq!(ThemePreference::Dark.toggled(), ThemePreference::Light);
    assert!(ThemePreference::Light.toggled().is_dark());
}
