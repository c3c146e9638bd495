//! # theme-switch
//!
//! Persisted light/dark theme switch for server-rendered pages.
//!
//! The [`controller::ThemeController`] keeps three things in agreement: the
//! stored preference, the theme attribute on the page's root element, and an
//! optional checkbox. Storage and DOM access sit behind small traits so the
//! controller runs natively under `cargo test`; the `hydrate` feature adds
//! the web-sys bindings and the WASM entry point.

pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod preference;
pub mod store;

#[cfg(feature = "hydrate")]
pub mod browser;

pub use config::ThemeConfig;
pub use controller::ThemeController;
pub use error::ThemeError;
pub use preference::ThemePreference;
pub use store::{MemoryStore, PreferenceStore};

/// WASM entry point: route logs and panics to the console, then wire the
/// theme switch with the default element ids.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed by the host page's bundle.
    console_log::init_with_level(log::Level::Info).ok();

    if let Err(err) = browser::install(ThemeConfig::default()) {
        log::warn!("theme switch not installed: {err}");
    }
}

/// Flip the theme from script (e.g. a keyboard shortcut) and return the new
/// value, or `undefined` if the switch has not mounted yet.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() -> Option<String> {
    browser::toggle_mounted().map(|preference| preference.as_str().to_owned())
}
