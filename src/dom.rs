//! Capabilities the controller needs from the page.
//!
//! Handles are resolved by the caller and injected; the controller holds them
//! but does not own the underlying nodes.

use crate::error::ThemeError;

/// Change notification; the receiver reads the new state from the control.
pub type ChangeHandler = Box<dyn FnMut()>;

/// Element whose attribute communicates the active theme to the styling layer.
pub trait ThemeRoot {
    /// Set attribute `name` to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Dom`] when the write is rejected.
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError>;
}

/// Boolean toggle control that reflects and sets the theme.
pub trait SwitchControl {
    fn checked(&self) -> bool;

    fn set_checked(&self, checked: bool);

    /// Register `handler` to run after every user-driven change.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Dom`] when the listener cannot be attached.
    fn on_change(&self, handler: ChangeHandler) -> Result<(), ThemeError>;
}
