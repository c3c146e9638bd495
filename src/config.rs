//! Element ids, storage key, and attribute name used by the theme switch.
//!
//! Defaults match the markup the switch ships against: a `main-body` root
//! carrying `data-bs-theme`, a `darkModeSwitch` checkbox, and a `theme`
//! storage key.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

pub const DEFAULT_ROOT_ID: &str = "main-body";
pub const DEFAULT_SWITCH_ID: &str = "darkModeSwitch";
pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_ATTRIBUTE: &str = "data-bs-theme";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Id of the element whose attribute carries the active theme.
    pub root_id: String,
    /// Id of the optional checkbox that reflects and sets the theme.
    pub switch_id: String,
    /// Key under which the preference is persisted.
    pub storage_key: String,
    /// Attribute written on the root element.
    pub attribute: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            root_id: DEFAULT_ROOT_ID.to_owned(),
            switch_id: DEFAULT_SWITCH_ID.to_owned(),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            attribute: DEFAULT_ATTRIBUTE.to_owned(),
        }
    }
}

impl ThemeConfig {
    /// Parse a (possibly partial) JSON object; omitted fields keep defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidConfig`] for malformed JSON or unknown fields.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(raw)?)
    }
}
