//! Theme synchronization between storage, the root element, and the switch.
//!
//! DESIGN
//! ======
//! The controller owns injected collaborators and is shared through `Rc` so the
//! switch's change listener can call back into it. That listener holds a `Weak`
//! handle; dropping the controller silently disarms it.
//!
//! Collaborator faults never escape: storage failures read as "no preference"
//! and drop writes, a missing root turns attribute writes into no-ops.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::config::ThemeConfig;
use crate::dom::{SwitchControl, ThemeRoot};
use crate::preference::ThemePreference;
use crate::store::PreferenceStore;

pub struct ThemeController<S, R, C> {
    config: ThemeConfig,
    store: S,
    root: Option<R>,
    switch: Option<C>,
    current: Cell<ThemePreference>,
    initialized: Cell<bool>,
}

impl<S, R, C> ThemeController<S, R, C>
where
    S: PreferenceStore + 'static,
    R: ThemeRoot + 'static,
    C: SwitchControl + 'static,
{
    pub fn new(config: ThemeConfig, store: S, root: Option<R>, switch: Option<C>) -> Rc<Self> {
        Rc::new(Self {
            config,
            store,
            root,
            switch,
            current: Cell::new(ThemePreference::default()),
            initialized: Cell::new(false),
        })
    }

    /// Apply the persisted preference and wire the switch, after the page's
    /// elements exist.
    ///
    /// A stored value is re-applied (and normalized in storage); an absent one
    /// renders light without writing anything. Later calls return the current
    /// preference without re-reading storage or adding another listener.
    pub fn initialize(controller: &Rc<Self>) -> ThemePreference {
        if controller.initialized.replace(true) {
            return controller.current();
        }
        if controller.root.is_none() {
            log::warn!("theme root #{} missing; attribute updates disabled", controller.config.root_id);
        }

        let applied = match controller.read_stored() {
            Some(raw) => {
                let preference = ThemePreference::from_stored(&raw);
                controller.apply(preference);
                preference
            }
            None => {
                controller.render(ThemePreference::Light);
                ThemePreference::Light
            }
        };

        if let Some(switch) = &controller.switch {
            switch.set_checked(applied.is_dark());
            let weak = Rc::downgrade(controller);
            let handler = Box::new(move || {
                let Some(controller) = weak.upgrade() else {
                    return;
                };
                if let Some(switch) = &controller.switch {
                    controller.on_toggle_change(switch.checked());
                }
            });
            match switch.on_change(handler) {
                Ok(()) => log::debug!("theme switch #{} wired", controller.config.switch_id),
                Err(err) => log::warn!("theme switch #{} not wired: {err}", controller.config.switch_id),
            }
        }

        applied
    }

    /// Set the root attribute and persist the choice.
    pub fn apply_theme(&self, is_dark: bool) {
        self.apply(ThemePreference::from_checked(is_dark));
    }

    /// Change listener body: the switch's new checked state selects the theme.
    pub fn on_toggle_change(&self, checked: bool) {
        self.apply_theme(checked);
    }

    /// Flip the theme programmatically, keeping the switch in step.
    pub fn toggle(&self) -> ThemePreference {
        let next = self.current.get().toggled();
        self.apply(next);
        if let Some(switch) = &self.switch {
            switch.set_checked(next.is_dark());
        }
        next
    }

    /// Last applied preference; light before [`Self::initialize`].
    pub fn current(&self) -> ThemePreference {
        self.current.get()
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    fn apply(&self, preference: ThemePreference) {
        self.render(preference);
        if let Err(err) = self.store.set(&self.config.storage_key, preference.as_str()) {
            log::warn!("theme preference not persisted: {err}");
        }
    }

    fn render(&self, preference: ThemePreference) {
        self.current.set(preference);
        let Some(root) = &self.root else {
            return;
        };
        match root.set_attribute(&self.config.attribute, preference.as_str()) {
            Ok(()) => log::debug!("theme applied: {preference}"),
            Err(err) => log::warn!("theme attribute not set: {err}"),
        }
    }

    fn read_stored(&self) -> Option<String> {
        match self.store.get(&self.config.storage_key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("theme preference unreadable, using default: {err}");
                None
            }
        }
    }
}
