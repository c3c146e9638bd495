//! web-sys bindings for the theme switch. Requires a browser environment.
//!
//! SYSTEM CONTEXT
//! ==============
//! Resolves the configured element ids, adapts `localStorage`, the root
//! element, and the checkbox to the controller's capability traits, and runs
//! initialization once the document has been parsed.
//!
//! TRADE-OFFS
//! ==========
//! Listener closures and the mounted controller live for the page lifetime;
//! they are intentionally leaked rather than tracked for teardown.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, HtmlInputElement, Storage};

use crate::config::ThemeConfig;
use crate::controller::ThemeController;
use crate::dom::{ChangeHandler, SwitchControl, ThemeRoot};
use crate::error::ThemeError;
use crate::preference::ThemePreference;
use crate::store::{MemoryStore, PreferenceStore};

pub type BrowserController = ThemeController<BrowserStore, ElementRoot, CheckboxSwitch>;

thread_local! {
    static MOUNTED: RefCell<Option<Rc<BrowserController>>> = const { RefCell::new(None) };
}

/// `localStorage` when the page may use it, otherwise a session-only map.
pub enum BrowserStore {
    Local(Storage),
    Memory(MemoryStore),
}

impl BrowserStore {
    pub fn open() -> Self {
        match web_sys::window().map(|w| w.local_storage()) {
            Some(Ok(Some(storage))) => Self::Local(storage),
            _ => {
                log::warn!("{}; theme preference is session-only", ThemeError::StorageUnavailable);
                Self::Memory(MemoryStore::new())
            }
        }
    }
}

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        match self {
            Self::Local(storage) => storage.get_item(key).map_err(|e| storage_error("get", &e)),
            Self::Memory(memory) => memory.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        match self {
            Self::Local(storage) => storage.set_item(key, value).map_err(|e| storage_error("set", &e)),
            Self::Memory(memory) => memory.set(key, value),
        }
    }
}

fn storage_error(op: &'static str, err: &JsValue) -> ThemeError {
    ThemeError::Storage { op, message: format!("{err:?}") }
}

pub struct ElementRoot(Element);

impl ThemeRoot for ElementRoot {
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError> {
        self.0.set_attribute(name, value).map_err(|e| ThemeError::Dom(format!("{e:?}")))
    }
}

pub struct CheckboxSwitch(HtmlInputElement);

impl SwitchControl for CheckboxSwitch {
    fn checked(&self) -> bool {
        self.0.checked()
    }

    fn set_checked(&self, checked: bool) {
        self.0.set_checked(checked);
    }

    fn on_change(&self, mut handler: ChangeHandler) -> Result<(), ThemeError> {
        let closure = Closure::<dyn FnMut(Event)>::new(move |_: Event| handler());
        self.0
            .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
            .map_err(|e| ThemeError::Dom(format!("{e:?}")))?;
        closure.forget();
        Ok(())
    }
}

fn document() -> Result<Document, ThemeError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ThemeError::Dom("no document".to_owned()))
}

fn find_element(document: &Document, id: &str) -> Result<Element, ThemeError> {
    document.get_element_by_id(id).ok_or_else(|| ThemeError::ElementMissing(id.to_owned()))
}

/// Resolve handles, initialize, and keep the controller alive for the page.
/// Once mounted, later calls return the existing controller and ignore `config`.
///
/// # Errors
///
/// Returns an error only when there is no document at all.
pub fn mount(config: ThemeConfig) -> Result<Rc<BrowserController>, ThemeError> {
    if let Some(existing) = MOUNTED.with(|slot| slot.borrow().clone()) {
        log::debug!("theme switch already mounted");
        return Ok(existing);
    }
    let document = document()?;
    let root = find_element(&document, &config.root_id).ok().map(ElementRoot);
    let switch = match find_element(&document, &config.switch_id) {
        Ok(el) => match el.dyn_into::<HtmlInputElement>() {
            Ok(input) => Some(CheckboxSwitch(input)),
            Err(_) => {
                log::warn!("#{} is not an input element; theme switch disabled", config.switch_id);
                None
            }
        },
        Err(err) => {
            log::debug!("{err}; theme switch disabled");
            None
        }
    };

    let controller = ThemeController::new(config, BrowserStore::open(), root, switch);
    ThemeController::initialize(&controller);
    MOUNTED.with(|slot| *slot.borrow_mut() = Some(Rc::clone(&controller)));
    Ok(controller)
}

/// Mount now if the document is parsed, otherwise on `DOMContentLoaded`.
///
/// # Errors
///
/// Returns an error when there is no document or the listener cannot be attached.
pub fn install(config: ThemeConfig) -> Result<(), ThemeError> {
    let document = document()?;
    if document.ready_state() != "loading" {
        mount(config)?;
        return Ok(());
    }

    let closure = Closure::once(move |_: Event| {
        if let Err(err) = mount(config) {
            log::warn!("theme switch not mounted: {err}");
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())
        .map_err(|e| ThemeError::Dom(format!("{e:?}")))?;
    closure.forget();
    Ok(())
}

/// Flip the mounted controller's theme. `None` before mounting.
pub fn toggle_mounted() -> Option<ThemePreference> {
    MOUNTED.with(|slot| slot.borrow().as_ref().map(|controller| controller.toggle()))
}
