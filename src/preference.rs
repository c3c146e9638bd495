//! Binary light/dark theme preference and its persisted string encoding.

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

/// The user's chosen presentation theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Decode a persisted value. Only the exact string `"dark"` selects dark.
    pub fn from_stored(raw: &str) -> Self {
        if raw == "dark" { Self::Dark } else { Self::Light }
    }

    /// Map a switch control's checked state (checked = dark).
    pub fn from_checked(checked: bool) -> Self {
        if checked { Self::Dark } else { Self::Light }
    }

    /// Literal written to storage and to the root theme attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl std::fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
